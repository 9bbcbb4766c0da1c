//! Camera device access shim.
//!
//! Desktop stand-in for the platform camera binding: the device is acquired
//! when the scanning step is entered and released when it is left. No frames
//! are produced; the preview is painted by the UI layer.

use crate::error::{AppError, Result};

/// Which way the capture camera faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Back,
    Front,
}

impl Facing {
    pub fn toggled(self) -> Self {
        match self {
            Facing::Back => Facing::Front,
            Facing::Front => Facing::Back,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Facing::Back => "Back camera",
            Facing::Front => "Front camera",
        }
    }
}

/// Camera permission as reported by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Query camera permission.
///
/// The desktop build has no permission broker; denial is simulated through
/// the `CERVCARE_DENY_CAMERA` environment variable for manual testing of the
/// permission screen.
pub fn query_permission() -> Permission {
    if std::env::var_os("CERVCARE_DENY_CAMERA").is_some() {
        Permission::Denied
    } else {
        Permission::Granted
    }
}

/// Re-request permission after a denial. Same source as the initial query.
pub fn request_permission() -> Permission {
    query_permission()
}

/// An acquired camera device. Released when dropped.
#[derive(Debug)]
pub struct CameraDevice {
    facing: Facing,
}

impl CameraDevice {
    /// Acquire the camera for the given facing.
    pub fn open(facing: Facing) -> Result<Self> {
        if query_permission() == Permission::Denied {
            return Err(AppError::CameraAccessDenied);
        }
        if std::env::var_os("CERVCARE_NO_CAMERA").is_some() {
            return Err(AppError::CameraUnavailable("no capture device found".to_string()));
        }
        tracing::debug!(?facing, "camera acquired");
        Ok(Self { facing })
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn set_facing(&mut self, facing: Facing) {
        if facing != self.facing {
            tracing::debug!(?facing, "camera facing switched");
            self.facing = facing;
        }
    }
}

impl Drop for CameraDevice {
    fn drop(&mut self) {
        tracing::debug!("camera released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_toggle() {
        assert_eq!(Facing::Back.toggled(), Facing::Front);
        assert_eq!(Facing::Front.toggled(), Facing::Back);
    }

    #[test]
    fn test_open_and_switch() {
        // Permission env vars are not set under the test harness.
        let mut camera = CameraDevice::open(Facing::Back).expect("camera should open");
        assert_eq!(camera.facing(), Facing::Back);

        camera.set_facing(Facing::Front);
        assert_eq!(camera.facing(), Facing::Front);
    }
}
