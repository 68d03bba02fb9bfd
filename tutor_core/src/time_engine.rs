//! Time Engine - wall-clock readings for the live clock
//!
//! The wall clock is injected through [`WallClock`] so the live mode can be
//! driven by a fixed instant in tests.

use std::cell::Cell;

use chrono::{DateTime, Local, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::time_math::TimeOfDay;

/// Source of the current instant
pub trait WallClock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// The operating system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that stands still until advanced
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Cell::new(instant),
        }
    }

    /// Fixed clock at a UTC wall time on an arbitrary date
    pub fn at_hms(hour: u32, minute: u32, second: u32) -> Self {
        let instant = Utc
            .with_ymd_and_hms(2024, 1, 15, hour, minute, second)
            .single()
            .unwrap_or_default();
        Self::new(instant)
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.instant.set(self.instant.get() + by);
    }
}

impl WallClock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant.get()
    }
}

impl<C: WallClock + ?Sized> WallClock for &C {
    fn now_utc(&self) -> DateTime<Utc> {
        (**self).now_utc()
    }
}

/// Convert a 24-hour hour into 12-hour form (0 and 12 both become 12)
pub fn to_hour12(hour24: u32) -> u32 {
    match hour24 % 24 {
        0 => 12,
        h @ 1..=12 => h,
        h => h - 12,
    }
}

/// The face position of `now_utc` in a timezone
pub fn reading_at(tz: Tz, now_utc: DateTime<Utc>) -> TimeOfDay {
    let local = now_utc.with_timezone(&tz);
    TimeOfDay {
        hour: to_hour12(local.hour()),
        minute: local.minute(),
        // Leap seconds report 60
        second: local.second().min(59),
    }
}

/// Sample a wall clock in a timezone
pub fn read_clock<C: WallClock + ?Sized>(clock: &C, tz: Tz) -> TimeOfDay {
    reading_at(tz, clock.now_utc())
}

/// Parse a timezone string into a Tz
pub fn parse_timezone(tz_str: &str) -> Result<Tz, String> {
    tz_str
        .parse::<Tz>()
        .map_err(|_| format!("Invalid timezone: {}", tz_str))
}

/// Get the system's local timezone as a chrono-tz Tz, when it can be named
pub fn system_timezone() -> Option<Tz> {
    let tz_name = Local::now().format("%Z").to_string();
    tz_name.parse::<Tz>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hour12() {
        assert_eq!(to_hour12(0), 12);
        assert_eq!(to_hour12(9), 9);
        assert_eq!(to_hour12(12), 12);
        assert_eq!(to_hour12(13), 1);
        assert_eq!(to_hour12(23), 11);
    }

    #[test]
    fn test_reading_in_utc() {
        let clock = FixedClock::at_hms(15, 42, 7);
        let reading = read_clock(&clock, chrono_tz::UTC);
        assert_eq!(reading, TimeOfDay::new(3, 42, 7));
    }

    #[test]
    fn test_reading_respects_timezone() {
        let clock = FixedClock::at_hms(12, 0, 0);
        let tz: Tz = "Asia/Tokyo".parse().unwrap();
        // UTC+9 with no DST
        assert_eq!(read_clock(&clock, tz), TimeOfDay::new(9, 0, 0));
    }

    #[test]
    fn test_fixed_clock_advances() {
        let clock = FixedClock::at_hms(0, 59, 59);
        clock.advance(chrono::Duration::seconds(1));
        assert_eq!(read_clock(&clock, chrono_tz::UTC), TimeOfDay::new(1, 0, 0));
    }

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("Europe/London").is_ok());
        assert!(parse_timezone("Not/AZone").is_err());
    }
}
