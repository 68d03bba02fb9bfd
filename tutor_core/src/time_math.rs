//! Time Arithmetic - 12-hour clock positions and carry propagation
//!
//! All functions here are pure: they take a [`TimeOfDay`] and return a new one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Seconds in one full turn of the hour hand (12 hours)
pub const CYCLE_SECONDS: i64 = 12 * 3600;

/// One of the three rotating hands on the face.
///
/// Also names the matching time field for text edits and button nudges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// All hands, in the order they are hit-tested (thinnest first)
    pub const ALL: [Hand; 3] = [Hand::Second, Hand::Minute, Hand::Hour];

    /// Number of discrete positions on this hand's grid
    pub fn grid(self) -> u32 {
        match self {
            Hand::Hour => 12,
            Hand::Minute | Hand::Second => 60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Hand::Hour => "Hour",
            Hand::Minute => "Minute",
            Hand::Second => "Second",
        }
    }
}

/// Rotation direction for button nudges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Signed unit step for this direction
    pub fn step(self) -> i64 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// A signed change to one hand, in that hand's grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandDelta {
    pub hand: Hand,
    pub units: i64,
}

/// A position on a 12-hour clock face
///
/// `hour` is in 1..=12, `minute` and `second` in 0..=59. The only value with
/// hour 0 is the unanswered state ([`TimeOfDay::BLANK`]) or an hour typed in
/// as 0; arithmetic maps it back into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    /// Unanswered state shown before the learner enters anything
    pub const BLANK: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// 12:00:00, where exploration starts
    pub const NOON: TimeOfDay = TimeOfDay {
        hour: 12,
        minute: 0,
        second: 0,
    };

    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Position of `hand` on its own grid
    pub fn unit(&self, hand: Hand) -> u32 {
        match hand {
            Hand::Hour => self.hour % 12,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }

    /// Seconds past 12:00:00, in `0..CYCLE_SECONDS` for normalized values
    pub fn elapsed_seconds(&self) -> i64 {
        (self.hour % 12) as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }

    /// Same hour and minute, seconds ignored
    pub fn same_hour_minute(&self, other: &TimeOfDay) -> bool {
        self.hour == other.hour && self.minute == other.minute
    }

    /// Format as "hh:mm"
    pub fn format_hm(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::NOON
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Rotation of each hand in degrees, clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandDegrees {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandDegrees {
    pub fn for_hand(&self, hand: Hand) -> f64 {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }
}

/// Hand rotations for drawing. Minute and hour hands creep continuously.
pub fn degrees_for(time: &TimeOfDay) -> HandDegrees {
    let second = time.second as f64;
    let minute = time.minute as f64;
    let hour = (time.hour % 12) as f64;

    HandDegrees {
        second: second / 60.0 * 360.0,
        minute: (minute + second / 60.0) / 60.0 * 360.0,
        hour: (hour + minute / 60.0) / 12.0 * 360.0,
    }
}

/// Wrap any hour count into 1..=12 (never 0)
pub fn normalize_hour(hour: i128) -> u32 {
    ((hour - 1).rem_euclid(12) + 1) as u32
}

/// Add `units` to one field, pushing carries upward only.
///
/// A minute change never touches seconds and an hour change never touches
/// minutes or seconds, except through carry.
pub fn apply_delta(time: &TimeOfDay, hand: Hand, units: i64) -> TimeOfDay {
    let units = units as i128;
    let mut second = time.second as i128;
    let mut minute = time.minute as i128;
    let mut hour = time.hour as i128;

    match hand {
        Hand::Second => {
            second += units;
            minute += second.div_euclid(60);
            second = second.rem_euclid(60);
            hour += minute.div_euclid(60);
            minute = minute.rem_euclid(60);
        }
        Hand::Minute => {
            minute += units;
            hour += minute.div_euclid(60);
            minute = minute.rem_euclid(60);
        }
        Hand::Hour => {
            hour += units;
        }
    }

    TimeOfDay {
        hour: normalize_hour(hour),
        minute: minute as u32,
        second: second as u32,
    }
}

/// Apply a [`HandDelta`] produced by a controller
pub fn apply_hand_delta(time: &TimeOfDay, delta: HandDelta) -> TimeOfDay {
    apply_delta(time, delta.hand, delta.units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_time() -> impl Strategy<Value = TimeOfDay> {
        (1u32..=12, 0u32..60, 0u32..60).prop_map(|(h, m, s)| TimeOfDay::new(h, m, s))
    }

    fn any_hand() -> impl Strategy<Value = Hand> {
        prop_oneof![Just(Hand::Hour), Just(Hand::Minute), Just(Hand::Second)]
    }

    #[test]
    fn test_degrees_at_three_fifteen() {
        let d = degrees_for(&TimeOfDay::new(3, 15, 0));
        assert_eq!(d.second, 0.0);
        assert_eq!(d.minute, 90.0);
        assert!((d.hour - 97.5).abs() < 1e-9);
    }

    #[test]
    fn test_degrees_twelve_is_top() {
        let d = degrees_for(&TimeOfDay::NOON);
        assert_eq!(d.hour, 0.0);
        assert_eq!(d.minute, 0.0);
    }

    #[test]
    fn test_minute_hand_creeps_with_seconds() {
        let d = degrees_for(&TimeOfDay::new(12, 0, 30));
        assert!((d.minute - 3.0).abs() < 1e-9);
        assert!((d.second - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_second_carry_into_minute_and_hour() {
        let t = apply_delta(&TimeOfDay::new(12, 59, 59), Hand::Second, 1);
        assert_eq!(t, TimeOfDay::new(1, 0, 0));
    }

    #[test]
    fn test_second_borrow_from_hour() {
        let t = apply_delta(&TimeOfDay::new(1, 0, 0), Hand::Second, -1);
        assert_eq!(t, TimeOfDay::new(12, 59, 59));
    }

    #[test]
    fn test_minute_change_keeps_seconds() {
        let t = apply_delta(&TimeOfDay::new(4, 58, 42), Hand::Minute, 3);
        assert_eq!(t, TimeOfDay::new(5, 1, 42));
    }

    #[test]
    fn test_hour_change_keeps_minutes_and_seconds() {
        let t = apply_delta(&TimeOfDay::new(11, 20, 5), Hand::Hour, 2);
        assert_eq!(t, TimeOfDay::new(1, 20, 5));
    }

    #[test]
    fn test_blank_hour_wraps_to_twelve() {
        let t = apply_delta(&TimeOfDay::BLANK, Hand::Minute, 0);
        assert_eq!(t.hour, 12);
    }

    #[test]
    fn test_extreme_deltas_do_not_overflow() {
        let t = apply_delta(&TimeOfDay::new(6, 30, 30), Hand::Second, i64::MAX);
        assert!((1..=12).contains(&t.hour));
        let t = apply_delta(&TimeOfDay::new(6, 30, 30), Hand::Minute, i64::MIN);
        assert!((1..=12).contains(&t.hour));
    }

    #[test]
    fn test_unit_of_hour_hand() {
        assert_eq!(TimeOfDay::new(12, 0, 0).unit(Hand::Hour), 0);
        assert_eq!(TimeOfDay::new(7, 0, 0).unit(Hand::Hour), 7);
    }

    #[test]
    fn test_display_pads_fields() {
        assert_eq!(TimeOfDay::new(3, 5, 9).to_string(), "03:05:09");
        assert_eq!(TimeOfDay::new(10, 45, 0).format_hm(), "10:45");
    }

    proptest! {
        #[test]
        fn prop_second_delta_preserves_elapsed(t in valid_time(), d in any::<i64>()) {
            let r = apply_delta(&t, Hand::Second, d);
            prop_assert!(r.second < 60);
            prop_assert!(r.minute < 60);
            prop_assert!((1..=12).contains(&r.hour));
            let moved = (r.elapsed_seconds() - t.elapsed_seconds()) as i128;
            prop_assert_eq!(
                moved.rem_euclid(CYCLE_SECONDS as i128),
                (d as i128).rem_euclid(CYCLE_SECONDS as i128)
            );
        }

        #[test]
        fn prop_hour_never_zero(t in valid_time(), hand in any_hand(), d in any::<i64>()) {
            let r = apply_delta(&t, hand, d);
            prop_assert!(r.hour >= 1 && r.hour <= 12);
        }

        #[test]
        fn prop_minute_delta_leaves_seconds(t in valid_time(), d in -100_000i64..100_000) {
            let r = apply_delta(&t, Hand::Minute, d);
            prop_assert_eq!(r.second, t.second);
        }
    }
}
