//! Fixed-period tick scheduling for the simulated capture.

use std::time::{Duration, Instant};

/// Repeating fixed-period timer polled from the frame loop.
///
/// At most one tick is ever pending: a poll that arrives late re-arms from
/// the poll time instead of queueing missed ticks. Stopping takes effect
/// before the next scheduled tick; a tick already delivered is not recalled.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self { period, next_due: None }
    }

    /// Arm the timer; the first tick is due one period from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Disarm the timer.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true when a tick is due, at most once per period.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(2000);

    #[test]
    fn test_no_tick_before_period() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(start);

        assert!(!ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(1999)));
        assert!(ticker.poll(start + PERIOD));
    }

    #[test]
    fn test_one_tick_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(start);

        assert!(ticker.poll(start + PERIOD));
        // Same instant again: the next tick is a full period away.
        assert!(!ticker.poll(start + PERIOD));
        assert!(ticker.poll(start + PERIOD * 2));
    }

    #[test]
    fn test_late_poll_does_not_queue_ticks() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(start);

        // Three periods elapse before anyone polls; only one tick fires.
        let late = start + PERIOD * 3;
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert!(ticker.poll(late + PERIOD));
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(start);
        assert!(ticker.is_running());

        ticker.stop();
        assert!(!ticker.is_running());
        assert!(!ticker.poll(start + PERIOD * 10));
    }

    #[test]
    fn test_unstarted_ticker_never_fires() {
        let mut ticker = Ticker::new(PERIOD);
        assert!(!ticker.is_running());
        assert!(!ticker.poll(Instant::now() + PERIOD));
    }
}
