//! Repeat-Press Controller - press-and-hold nudges
//!
//! A press applies one ±1 step at once, then one more step every period
//! until release. There is no acceleration.

use std::time::Duration;

use crate::time_math::{Direction, Hand, HandDelta};
use crate::timer::Interval;

/// Default auto-repeat period while a control button is held
pub const DEFAULT_REPEAT_INTERVAL: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
struct RepeatState {
    hand: Hand,
    direction: Direction,
    interval: Interval,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatPress {
    period: Duration,
    held: Option<RepeatState>,
}

impl RepeatPress {
    pub fn new(period: Duration) -> Self {
        Self { period, held: None }
    }

    /// Hand and direction of the button currently held
    pub fn held(&self) -> Option<(Hand, Direction)> {
        self.held.as_ref().map(|s| (s.hand, s.direction))
    }

    /// Press a button: cancels any earlier hold and returns the immediate step
    pub fn press(&mut self, hand: Hand, direction: Direction, now: Duration) -> HandDelta {
        self.held = Some(RepeatState {
            hand,
            direction,
            interval: Interval::starting_at(now, self.period),
        });
        HandDelta {
            hand,
            units: direction.step(),
        }
    }

    /// Steps that fell due since the last poll, with how many ticks elapsed
    pub fn poll(&mut self, now: Duration) -> Option<(HandDelta, u32)> {
        let state = self.held.as_mut()?;
        let ticks = state.interval.poll(now);
        if ticks == 0 {
            return None;
        }
        let step = HandDelta {
            hand: state.hand,
            units: state.direction.step(),
        };
        Some((step, ticks))
    }

    /// Release the held button. Returns whether anything was held.
    pub fn release(&mut self) -> bool {
        self.held.take().is_some()
    }
}

impl Default for RepeatPress {
    fn default() -> Self {
        Self::new(DEFAULT_REPEAT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_press_returns_immediate_step() {
        let mut repeat = RepeatPress::default();
        let step = repeat.press(Hand::Minute, Direction::CounterClockwise, ms(0));
        assert_eq!(step, HandDelta { hand: Hand::Minute, units: -1 });
        assert_eq!(repeat.held(), Some((Hand::Minute, Direction::CounterClockwise)));
    }

    #[test]
    fn test_hold_repeats_each_period() {
        let mut repeat = RepeatPress::default();
        repeat.press(Hand::Second, Direction::Clockwise, ms(1000));
        assert_eq!(repeat.poll(ms(1299)), None);
        let (step, ticks) = repeat.poll(ms(1900)).unwrap();
        assert_eq!(step.units, 1);
        assert_eq!(ticks, 3);
    }

    #[test]
    fn test_release_cancels() {
        let mut repeat = RepeatPress::default();
        repeat.press(Hand::Hour, Direction::Clockwise, ms(0));
        assert!(repeat.release());
        assert_eq!(repeat.poll(ms(5000)), None);
        assert!(!repeat.release());
    }

    #[test]
    fn test_new_press_replaces_old_hold() {
        let mut repeat = RepeatPress::default();
        repeat.press(Hand::Hour, Direction::Clockwise, ms(0));
        repeat.press(Hand::Minute, Direction::CounterClockwise, ms(200));
        let (step, ticks) = repeat.poll(ms(500)).unwrap();
        assert_eq!(step, HandDelta { hand: Hand::Minute, units: -1 });
        assert_eq!(ticks, 1);
    }
}
