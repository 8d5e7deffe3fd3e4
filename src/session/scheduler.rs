use std::time::{Duration, Instant};

/// Visible delays around a shuffle action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleTiming {
    /// How long the split preview stays up before the shuffle commits
    pub split_delay: Duration,
    /// Gap between automatic shuffles
    pub auto_interval: Duration,
}

impl Default for ShuffleTiming {
    fn default() -> Self {
        ShuffleTiming {
            split_delay: Duration::from_millis(800),
            auto_interval: Duration::from_millis(1500),
        }
    }
}

/// Fixed-interval trigger for repeated shuffles. The caller supplies the
/// clock, so nothing here sleeps or spawns.
#[derive(Debug, Clone)]
pub struct AutoShuffle {
    interval: Duration,
    running: bool,
    last_fired: Option<Instant>,
}

impl AutoShuffle {
    pub fn new(interval: Duration) -> Self {
        AutoShuffle {
            interval,
            running: false,
            last_fired: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start counting the interval from `now`
    pub fn start(&mut self, now: Instant) {
        self.running = true;
        self.last_fired = Some(now);
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last_fired = None;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.running {
            self.stop();
        } else {
            self.start(now);
        }
    }

    /// Whether a shuffle should fire at `now`. Never fires while an
    /// animation is pending. Firing restarts the interval.
    pub fn due(&mut self, now: Instant, animating: bool) -> bool {
        if !self.running || animating {
            return false;
        }
        let elapsed = match self.last_fired {
            Some(last) => now.saturating_duration_since(last),
            None => self.interval,
        };
        if elapsed >= self.interval {
            self.last_fired = Some(now);
            true
        } else {
            false
        }
    }

    /// Time left until the next shuffle, if running
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        let last = self.last_fired?;
        Some(self.interval.saturating_sub(now.saturating_duration_since(last)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_stopped_never_fires() {
        let mut auto = AutoShuffle::new(ms(1500));
        let now = Instant::now();
        assert!(!auto.due(now + ms(10_000), false));
        assert_eq!(auto.remaining(now), None);
    }

    #[test]
    fn test_fires_after_interval() {
        let mut auto = AutoShuffle::new(ms(1500));
        let start = Instant::now();
        auto.start(start);
        assert!(!auto.due(start + ms(1499), false));
        assert!(auto.due(start + ms(1500), false));
        // interval restarts from the last fire
        assert!(!auto.due(start + ms(2000), false));
        assert!(auto.due(start + ms(3000), false));
    }

    #[test]
    fn test_waits_for_animation() {
        let mut auto = AutoShuffle::new(ms(1500));
        let start = Instant::now();
        auto.start(start);
        assert!(!auto.due(start + ms(2000), true));
        assert!(auto.due(start + ms(2100), false));
    }

    #[test]
    fn test_toggle() {
        let mut auto = AutoShuffle::new(ms(100));
        let now = Instant::now();
        auto.toggle(now);
        assert!(auto.is_running());
        assert_eq!(auto.remaining(now), Some(ms(100)));
        auto.toggle(now);
        assert!(!auto.is_running());
    }

    #[test]
    fn test_default_timing() {
        let timing = ShuffleTiming::default();
        assert_eq!(timing.split_delay, ms(800));
        assert_eq!(timing.auto_interval, ms(1500));
    }
}
