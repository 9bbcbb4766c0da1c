//! Scan wizard and simulated capture.

pub mod capture;
pub mod clock;
pub mod wizard;
