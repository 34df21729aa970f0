//! Countdown timer driven by externally supplied frame deltas
//!
//! Every timed behavior in the simulation (movement cadence, shoot cooldown,
//! death pause, wave respawn, bonus cooldown) is built on this type. A timer
//! that finished stays done until the caller resets or restarts it.

use std::time::Duration;

/// A countdown with explicit running/elapsed/done state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    duration: Duration,
    elapsed: Duration,
    running: bool,
    done: bool,
}

impl Timer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            running: false,
            done: false,
        }
    }

    /// Begin counting from zero
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
        self.done = false;
    }

    /// Zero elapsed time and clear running/done
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = false;
        self.done = false;
    }

    /// Accumulate `dt` while running
    pub fn update(&mut self, dt: Duration) {
        if !self.running || self.done {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.done = true;
        }
    }

    /// Change the duration; takes effect from the next `update`
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_counts_only_while_running() {
        let mut timer = Timer::new(Duration::from_millis(100));
        timer.update(Duration::from_millis(500));
        assert!(!timer.is_running());
        assert!(!timer.is_done());
        assert_eq!(timer.elapsed(), Duration::ZERO);

        timer.start();
        timer.update(Duration::from_millis(60));
        assert!(timer.is_running());
        assert!(!timer.is_done());
        assert_eq!(timer.remaining(), Duration::from_millis(40));

        timer.update(Duration::from_millis(40));
        assert!(timer.is_done());
    }

    #[test]
    fn test_timer_stays_done_until_restarted() {
        let mut timer = Timer::new(Duration::from_millis(10));
        timer.start();
        timer.update(Duration::from_millis(10));
        assert!(timer.is_done());

        timer.update(Duration::from_millis(10));
        assert!(timer.is_done());
        assert!(timer.is_running());

        timer.start();
        assert!(!timer.is_done());
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_timer_reset_clears_state() {
        let mut timer = Timer::new(Duration::from_millis(10));
        timer.start();
        timer.update(Duration::from_millis(20));
        timer.reset();
        assert!(!timer.is_running());
        assert!(!timer.is_done());
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_timer_duration_change() {
        let mut timer = Timer::new(Duration::from_secs(1));
        timer.start();
        timer.update(Duration::from_millis(300));
        timer.set_duration(Duration::from_millis(200));
        timer.update(Duration::ZERO);
        assert!(timer.is_done());
    }
}
