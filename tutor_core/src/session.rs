//! Session data model - modes, answers and feedback

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time_math::{Hand, TimeOfDay};

/// Teaching mode. `Idle` is the entry screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Idle,
    /// The face shows a target time; the learner types what it reads
    Read,
    /// The learner moves the hands to match a target time
    Set,
    /// Free exploration with every hand movable
    Learn,
    /// The face follows the wall clock
    Realtime,
}

impl Mode {
    /// Modes selectable from the entry screen
    pub const ACTIVE: [Mode; 4] = [Mode::Read, Mode::Set, Mode::Learn, Mode::Realtime];

    pub fn title(self) -> &'static str {
        match self {
            Mode::Idle => "Teaching Clock",
            Mode::Read => "Read the Clock",
            Mode::Set => "Set the Clock",
            Mode::Learn => "Learn the Clock",
            Mode::Realtime => "Live Clock",
        }
    }

    /// Whether the learner may grab `hand` with the pointer
    pub fn can_drag(self, hand: Hand) -> bool {
        match self {
            Mode::Set => hand != Hand::Second,
            Mode::Learn => true,
            Mode::Idle | Mode::Read | Mode::Realtime => false,
        }
    }

    /// Hands that get clockwise/counter-clockwise buttons
    pub fn control_hands(self) -> &'static [Hand] {
        match self {
            Mode::Set => &[Hand::Hour, Hand::Minute],
            Mode::Learn => &[Hand::Hour, Hand::Minute, Hand::Second],
            Mode::Idle | Mode::Read | Mode::Realtime => &[],
        }
    }

    pub fn shows_second_hand(self) -> bool {
        matches!(self, Mode::Learn | Mode::Realtime)
    }

    /// Read and Set are quizzes with a target and attempts
    pub fn is_quiz(self) -> bool {
        matches!(self, Mode::Read | Mode::Set)
    }

    /// Whether the numeric fields may overwrite the current time
    pub fn allows_field_edits(self) -> bool {
        matches!(self, Mode::Read | Mode::Learn)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Message shown under the clock after an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn correct() -> Self {
        Self {
            text: "Correct!".to_string(),
            kind: FeedbackKind::Success,
        }
    }

    /// Read mode reveals the answer
    pub fn reveal(target: &TimeOfDay) -> Self {
        Self {
            text: format!("Not quite! The correct time is {}", target.format_hm()),
            kind: FeedbackKind::Error,
        }
    }

    /// Set mode only says where the hands point, never the target
    pub fn hands_show(current: &TimeOfDay) -> Self {
        Self {
            text: format!("Not quite! Your hands show {}", current.format_hm()),
            kind: FeedbackKind::Error,
        }
    }

    pub fn out_of_attempts() -> Self {
        Self {
            text: "No attempts left! Returning to the start screen".to_string(),
            kind: FeedbackKind::Error,
        }
    }
}

/// Snapshot of the teaching state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub mode: Mode,
    /// Time to read or set; meaningful only in Read and Set
    pub target: TimeOfDay,
    /// Time on the hands (or typed in, for Read)
    pub current: TimeOfDay,
    pub attempts_remaining: u32,
    pub feedback: Option<Feedback>,
}

impl Session {
    /// The entry-screen state
    pub fn idle(attempts: u32) -> Self {
        Self {
            mode: Mode::Idle,
            target: TimeOfDay::NOON,
            current: TimeOfDay::NOON,
            attempts_remaining: attempts,
            feedback: None,
        }
    }

    /// Whether `current` answers `target` under the active mode's rule.
    ///
    /// Read ignores seconds. Set matches within half an hour step and one
    /// minute, which for whole units is an exact hour and minute match.
    pub fn is_correct(&self) -> bool {
        match self.mode {
            Mode::Read => self.current.same_hour_minute(&self.target),
            Mode::Set => {
                let hour_gap = (self.current.hour as f64 - self.target.hour as f64).abs();
                let minute_gap = (self.current.minute as f64 - self.target.minute as f64).abs();
                hour_gap < 0.5 && minute_gap < 1.0
            }
            Mode::Idle | Mode::Learn | Mode::Realtime => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(mode: Mode, current: TimeOfDay, target: TimeOfDay) -> Session {
        Session {
            mode,
            target,
            current,
            ..Session::idle(3)
        }
    }

    #[test]
    fn test_read_ignores_seconds() {
        let s = quiz(Mode::Read, TimeOfDay::new(3, 15, 0), TimeOfDay::new(3, 15, 45));
        assert!(s.is_correct());
    }

    #[test]
    fn test_read_wrong_minute() {
        let s = quiz(Mode::Read, TimeOfDay::new(3, 16, 0), TimeOfDay::new(3, 15, 0));
        assert!(!s.is_correct());
    }

    #[test]
    fn test_set_exact_match() {
        let target = TimeOfDay::new(7, 40, 0);
        assert!(quiz(Mode::Set, TimeOfDay::new(7, 40, 0), target).is_correct());
        assert!(!quiz(Mode::Set, TimeOfDay::new(7, 41, 0), target).is_correct());
        assert!(!quiz(Mode::Set, TimeOfDay::new(8, 40, 0), target).is_correct());
    }

    #[test]
    fn test_non_quiz_modes_never_correct() {
        let t = TimeOfDay::new(1, 1, 1);
        assert!(!quiz(Mode::Learn, t, t).is_correct());
        assert!(!quiz(Mode::Realtime, t, t).is_correct());
    }

    #[test]
    fn test_mode_permissions() {
        assert!(Mode::Learn.can_drag(Hand::Second));
        assert!(!Mode::Set.can_drag(Hand::Second));
        assert!(Mode::Set.can_drag(Hand::Hour));
        assert!(!Mode::Read.can_drag(Hand::Minute));
        assert!(!Mode::Realtime.can_drag(Hand::Minute));
        assert!(Mode::Read.allows_field_edits());
        assert!(!Mode::Set.allows_field_edits());
        assert_eq!(Mode::Set.control_hands(), &[Hand::Hour, Hand::Minute]);
    }

    #[test]
    fn test_feedback_texts() {
        let t = TimeOfDay::new(9, 5, 0);
        assert!(Feedback::reveal(&t).text.contains("09:05"));
        assert!(Feedback::hands_show(&t).text.contains("09:05"));
        assert_eq!(Feedback::correct().kind, FeedbackKind::Success);
    }
}
