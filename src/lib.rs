pub mod camera;
pub mod config;
pub mod error;
pub mod models;
pub mod scan;
pub mod ui;

pub use error::{AppError, Result};
