//! Logical timers driven by the shell's monotonic clock
//!
//! Nothing here sleeps. The owner polls with the current time since start and
//! the timer reports what fell due. Dropping a timer cancels it.

use std::time::Duration;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A fixed-period repeating timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next_due: Duration,
}

impl Interval {
    /// Start a timer whose first tick is one period after `now`
    pub fn starting_at(now: Duration, period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks that fell due up to `now`, advancing past them
    pub fn poll(&mut self, now: Duration) -> u32 {
        if now < self.next_due {
            return 0;
        }
        let behind = now - self.next_due;
        let ticks = (behind.as_nanos() / self.period.as_nanos()) as u32 + 1;
        self.next_due += self.period * ticks;
        ticks
    }
}

/// A one-shot deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    due: Duration,
}

impl Deadline {
    pub fn after(now: Duration, delay: Duration) -> Self {
        Self { due: now + delay }
    }

    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_interval_not_due_before_period() {
        let mut i = Interval::starting_at(ms(0), ms(300));
        assert_eq!(i.poll(ms(299)), 0);
        assert_eq!(i.poll(ms(300)), 1);
        assert_eq!(i.poll(ms(301)), 0);
    }

    #[test]
    fn test_interval_catches_up_missed_ticks() {
        let mut i = Interval::starting_at(ms(100), ms(300));
        assert_eq!(i.poll(ms(1000)), 3);
        assert_eq!(i.poll(ms(1300)), 1);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let i = Interval::starting_at(ms(0), Duration::ZERO);
        assert_eq!(i.period(), MIN_PERIOD);
    }

    #[test]
    fn test_deadline() {
        let d = Deadline::after(ms(500), ms(2000));
        assert!(!d.is_due(ms(2499)));
        assert!(d.is_due(ms(2500)));
    }
}
