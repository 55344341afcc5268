use std::time::Duration;

/// Tracks elapsed teaching time against a target duration.
#[derive(Debug, Clone)]
pub struct TeachingTimer {
    target: Duration,
    elapsed: Duration,
    paused: bool,
}

impl TeachingTimer {
    pub fn new(target: Duration) -> Self {
        Self {
            target,
            elapsed: Duration::ZERO,
            paused: false,
        }
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self::new(Duration::from_secs(u64::from(minutes) * 60))
    }

    /// Adds `dt` unless paused, stopping at the target. Returns whether the
    /// target has been reached.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.paused {
            self.elapsed = (self.elapsed + dt).min(self.target);
        }
        self.is_complete()
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn remaining(&self) -> Duration {
        self.target.saturating_sub(self.elapsed)
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.target
    }

    pub fn progress_percent(&self) -> f64 {
        if self.target.is_zero() {
            return 100.0;
        }
        self.elapsed.as_secs_f64() / self.target.as_secs_f64() * 100.0
    }
}

/// Formats a duration as `MM:SS`; minutes are not wrapped into hours.
pub fn format_clock(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_saturates_at_target() {
        let mut timer = TeachingTimer::from_minutes(1);
        assert!(!timer.advance(Duration::from_secs(45)));
        assert_eq!(timer.remaining(), Duration::from_secs(15));
        assert!(timer.advance(Duration::from_secs(30)));
        assert_eq!(timer.elapsed(), Duration::from_secs(60));
        assert_eq!(timer.remaining(), Duration::ZERO);
        assert_eq!(timer.progress_percent(), 100.0);
    }

    #[test]
    fn test_paused_timer_does_not_advance() {
        let mut timer = TeachingTimer::from_minutes(15);
        timer.advance(Duration::from_secs(10));
        timer.pause();
        assert!(timer.is_paused());
        timer.advance(Duration::from_secs(100));
        assert_eq!(timer.elapsed(), Duration::from_secs(10));
        timer.resume();
        timer.advance(Duration::from_secs(5));
        assert_eq!(timer.elapsed(), Duration::from_secs(15));
    }

    #[test]
    fn test_reset_clears_elapsed_and_pause() {
        let mut timer = TeachingTimer::from_minutes(15);
        timer.advance(Duration::from_secs(90));
        timer.pause();
        timer.reset();
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert!(!timer.is_paused());
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_secs(65)), "01:05");
        assert_eq!(format_clock(Duration::from_secs(90 * 60)), "90:00");
    }
}
