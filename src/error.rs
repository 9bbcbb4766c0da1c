//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Camera permission was not granted by the platform layer
    #[error("Camera access denied")]
    CameraAccessDenied,

    /// Camera device could not be acquired
    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;
