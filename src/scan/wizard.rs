//! Linear scan wizard: device check, patient setup, scanning, review.

use egui_phosphor::regular::{CAMERA, CHECK_CIRCLE, DEVICE_MOBILE, EYE};

/// One step of the scan wizard, ordinals 0-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ScanStep {
    #[default]
    DeviceCheck,
    PatientSetup,
    Scanning,
    Review,
}

impl ScanStep {
    pub const ALL: [ScanStep; 4] = [
        ScanStep::DeviceCheck,
        ScanStep::PatientSetup,
        ScanStep::Scanning,
        ScanStep::Review,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> ScanStep {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn title(self) -> &'static str {
        match self {
            ScanStep::DeviceCheck => "Device Check",
            ScanStep::PatientSetup => "Patient Setup",
            ScanStep::Scanning => "3D Scanning",
            ScanStep::Review => "Review & Submit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScanStep::DeviceCheck => "Verify camera and LiDAR capabilities",
            ScanStep::PatientSetup => "Position patient for optimal scanning",
            ScanStep::Scanning => "Capture neck measurements",
            ScanStep::Review => "Verify scan quality and upload",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ScanStep::DeviceCheck => DEVICE_MOBILE,
            ScanStep::PatientSetup => EYE,
            ScanStep::Scanning => CAMERA,
            ScanStep::Review => CHECK_CIRCLE,
        }
    }
}

/// Wizard state for one scan session. Owned by the scan screen and discarded
/// when the screen is left.
#[derive(Debug, Clone)]
pub struct ScanWizard {
    step: ScanStep,
    /// Capability flag from the device query. Changes the device check text
    /// and icon only; transitions never depend on it.
    pub has_lidar: bool,
}

impl ScanWizard {
    pub fn new(has_lidar: bool) -> Self {
        Self {
            step: ScanStep::DeviceCheck,
            has_lidar,
        }
    }

    pub fn step(&self) -> ScanStep {
        self.step
    }

    /// Accept the start confirmation. Only valid in DeviceCheck; the caller
    /// invokes this after the user accepts the confirmation dialog, so a
    /// rejected dialog simply never reaches here.
    pub fn confirm_start(&mut self) -> bool {
        if self.step == ScanStep::DeviceCheck {
            self.step = ScanStep::PatientSetup;
            true
        } else {
            false
        }
    }

    /// Move one step back. No-op in the initial step.
    pub fn go_back(&mut self) -> bool {
        match self.step.index() {
            0 => false,
            index => {
                self.step = ScanStep::from_index(index - 1);
                true
            }
        }
    }

    /// Advance from PatientSetup to Scanning.
    pub fn go_next(&mut self) -> bool {
        if self.step == ScanStep::PatientSetup {
            self.step = ScanStep::Scanning;
            true
        } else {
            false
        }
    }

    /// Enter Review once the capture has produced its result. Review is
    /// terminal: there is no transition out of it.
    pub fn complete_scan(&mut self) -> bool {
        if self.step == ScanStep::Scanning {
            self.step = ScanStep::Review;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_device_check() {
        let wizard = ScanWizard::new(false);
        assert_eq!(wizard.step(), ScanStep::DeviceCheck);
        assert_eq!(wizard.step().index(), 0);
    }

    #[test]
    fn test_confirm_start_then_back() {
        let mut wizard = ScanWizard::new(false);

        assert!(wizard.confirm_start());
        assert_eq!(wizard.step().index(), 1);

        assert!(wizard.go_back());
        assert_eq!(wizard.step().index(), 0);
    }

    #[test]
    fn test_confirm_start_only_from_device_check() {
        let mut wizard = ScanWizard::new(false);
        wizard.confirm_start();

        assert!(!wizard.confirm_start());
        assert_eq!(wizard.step(), ScanStep::PatientSetup);
    }

    #[test]
    fn test_back_is_noop_at_start() {
        let mut wizard = ScanWizard::new(false);
        assert!(!wizard.go_back());
        assert_eq!(wizard.step().index(), 0);
    }

    #[test]
    fn test_next_only_from_patient_setup() {
        let mut wizard = ScanWizard::new(true);
        assert!(!wizard.go_next());
        assert_eq!(wizard.step(), ScanStep::DeviceCheck);

        wizard.confirm_start();
        assert!(wizard.go_next());
        assert_eq!(wizard.step(), ScanStep::Scanning);

        assert!(!wizard.go_next());
        assert_eq!(wizard.step(), ScanStep::Scanning);
    }

    #[test]
    fn test_review_is_terminal() {
        let mut wizard = ScanWizard::new(false);
        wizard.confirm_start();
        wizard.go_next();
        assert!(wizard.complete_scan());
        assert_eq!(wizard.step(), ScanStep::Review);

        assert!(!wizard.go_next());
        assert!(!wizard.complete_scan());
        assert_eq!(wizard.step(), ScanStep::Review);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut wizard = ScanWizard::new(false);
        for _ in 0..10 {
            wizard.go_back();
        }
        assert_eq!(wizard.step().index(), 0);

        wizard.confirm_start();
        wizard.go_next();
        wizard.complete_scan();
        for _ in 0..10 {
            wizard.go_next();
        }
        assert!(wizard.step().index() <= 3);
    }

    #[test]
    fn test_lidar_flag_never_gates_transitions() {
        let mut with_lidar = ScanWizard::new(true);
        let mut without = ScanWizard::new(false);

        assert_eq!(with_lidar.confirm_start(), without.confirm_start());
        assert_eq!(with_lidar.go_next(), without.go_next());
        assert_eq!(with_lidar.step(), without.step());
    }
}
