//! Simulated capture progress.
//!
//! Stands in for real 3D acquisition: a fixed-period tick walks a percentage
//! counter through the four scan angles and emits one result when it reaches
//! 100. The step and period are placeholders, not derived from any sensor
//! signal; a real capture pipeline must define its own progress metric.

use std::time::Duration;

use chrono::{DateTime, Local};

/// Ordered viewpoints a full scan covers. Display labels only.
pub const SCAN_ANGLES: [&str; 4] = ["Front view", "Left profile", "Right profile", "Back view"];

/// Period between simulated capture ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(2000);

/// Percent added per tick.
const PROGRESS_STEP: u8 = 25;

/// Phase of a capture run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePhase {
    #[default]
    Idle,
    Running,
    Complete,
}

/// Payload handed to the caller on the tick that reaches 100 percent.
#[derive(Debug, Clone)]
pub struct CaptureResult {
    /// All four angle labels, in capture order.
    pub angles: Vec<&'static str>,
    pub timestamp: DateTime<Local>,
    /// Constant until a real quality metric exists.
    pub quality: &'static str,
}

/// Progress state for one capture run. Created when capture starts, reset on
/// cancel, discarded with the screen after completion.
#[derive(Debug, Clone, Default)]
pub struct CaptureProgress {
    phase: CapturePhase,
    percent: u8,
    angle_index: usize,
}

impl CaptureProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_running(&self) -> bool {
        self.phase == CapturePhase::Running
    }

    /// Label of the angle currently being captured.
    pub fn current_angle(&self) -> &'static str {
        SCAN_ANGLES[self.angle_index.min(SCAN_ANGLES.len() - 1)]
    }

    /// Begin a capture run. Only valid from Idle.
    pub fn start(&mut self) -> bool {
        if self.phase != CapturePhase::Idle {
            return false;
        }
        self.phase = CapturePhase::Running;
        self.percent = 0;
        self.angle_index = 0;
        tracing::info!("capture started");
        true
    }

    /// Advance one simulated tick. Returns the result exactly once, on the
    /// tick that reaches 100 percent; ticks outside Running are ignored.
    pub fn tick(&mut self) -> Option<CaptureResult> {
        if self.phase != CapturePhase::Running {
            return None;
        }

        // The first tick captures the first angle; later ticks move the pointer.
        if self.percent > 0 && self.angle_index < SCAN_ANGLES.len() - 1 {
            self.angle_index += 1;
        }
        self.percent = self.percent.saturating_add(PROGRESS_STEP).min(100);

        if self.percent >= 100 {
            self.phase = CapturePhase::Complete;
            tracing::info!("capture complete");
            return Some(CaptureResult {
                angles: SCAN_ANGLES.to_vec(),
                timestamp: Local::now(),
                quality: "high",
            });
        }
        None
    }

    /// Abort a running capture and return to Idle with no result. Calling
    /// this when already Idle is a no-op.
    pub fn cancel(&mut self) {
        if self.phase == CapturePhase::Running {
            tracing::info!(percent = self.percent, "capture cancelled");
            *self = Self::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_only_from_idle() {
        let mut capture = CaptureProgress::new();
        assert_eq!(capture.phase(), CapturePhase::Idle);

        assert!(capture.start());
        assert!(capture.is_running());
        assert!(!capture.start());
    }

    #[test]
    fn test_four_ticks_complete_the_capture() {
        let mut capture = CaptureProgress::new();
        capture.start();

        assert!(capture.tick().is_none());
        assert_eq!(capture.percent(), 25);
        assert_eq!(capture.current_angle(), "Front view");

        assert!(capture.tick().is_none());
        assert_eq!(capture.percent(), 50);
        assert_eq!(capture.current_angle(), "Left profile");

        assert!(capture.tick().is_none());
        assert_eq!(capture.percent(), 75);
        assert_eq!(capture.current_angle(), "Right profile");

        let result = capture.tick().expect("fourth tick completes");
        assert_eq!(capture.percent(), 100);
        assert!(!capture.is_running());
        assert_eq!(capture.phase(), CapturePhase::Complete);
        assert_eq!(capture.current_angle(), "Back view");

        assert_eq!(result.quality, "high");
        assert_eq!(
            result.angles,
            vec!["Front view", "Left profile", "Right profile", "Back view"]
        );
    }

    #[test]
    fn test_result_emitted_exactly_once() {
        let mut capture = CaptureProgress::new();
        capture.start();

        let results: Vec<_> = (0..6).filter_map(|_| capture.tick()).collect();
        assert_eq!(results.len(), 1);
        assert_eq!(capture.percent(), 100);
    }

    #[test]
    fn test_percent_monotonic_while_running() {
        let mut capture = CaptureProgress::new();
        capture.start();

        let mut last = capture.percent();
        while capture.is_running() {
            capture.tick();
            assert!(capture.percent() >= last);
            last = capture.percent();
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_cancel_mid_run_discards_progress() {
        let mut capture = CaptureProgress::new();
        capture.start();

        assert!(capture.tick().is_none());
        assert_eq!(capture.percent(), 25);

        capture.cancel();
        assert_eq!(capture.phase(), CapturePhase::Idle);
        assert_eq!(capture.percent(), 0);
        assert!(capture.tick().is_none());
    }

    #[test]
    fn test_cancel_when_idle_is_noop() {
        let mut capture = CaptureProgress::new();
        capture.cancel();
        assert_eq!(capture.phase(), CapturePhase::Idle);
        assert_eq!(capture.percent(), 0);
    }

    #[test]
    fn test_tick_when_idle_is_ignored() {
        let mut capture = CaptureProgress::new();
        assert!(capture.tick().is_none());
        assert_eq!(capture.percent(), 0);
    }
}
