//! UI panels and shared widgets.

pub mod app;
pub mod camera_view;
pub mod components;
pub mod guide_panel;
pub mod home_panel;
pub mod patient_form;
pub mod patients_panel;
pub mod scan_panel;
pub mod settings_panel;

pub use app::App;
