//! Rendering projection - what the shell should draw for a session

use crate::session::{Feedback, Mode, Session};
use crate::time_math::{degrees_for, Hand, HandDegrees, TimeOfDay};

/// Values for the numeric entry row under the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRow {
    pub hour: u32,
    pub minute: u32,
    /// Present only where the second hand is shown
    pub second: Option<u32>,
    pub editable: bool,
}

/// Everything the shell needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ClockView {
    pub mode: Mode,
    pub title: &'static str,
    /// Time the hands on the face point at
    pub face: TimeOfDay,
    pub degrees: HandDegrees,
    pub show_second_hand: bool,
    pub controls: &'static [Hand],
    /// Digital "hh:mm:ss" under the face
    pub readout: Option<String>,
    pub fields: Option<FieldRow>,
    pub attempts: Option<u32>,
    pub feedback: Option<Feedback>,
    pub show_confirm: bool,
}

impl ClockView {
    pub fn project(session: &Session) -> Self {
        let mode = session.mode;

        // Read shows the question on the face; the answer goes in the fields
        let face = if mode == Mode::Read {
            session.target
        } else {
            session.current
        };

        // Set shows the question in the (locked) fields
        let fields = match mode {
            Mode::Idle | Mode::Realtime => None,
            Mode::Set => Some(FieldRow {
                hour: session.target.hour,
                minute: session.target.minute,
                second: None,
                editable: false,
            }),
            Mode::Read | Mode::Learn => Some(FieldRow {
                hour: session.current.hour,
                minute: session.current.minute,
                second: mode.shows_second_hand().then_some(session.current.second),
                editable: true,
            }),
        };

        Self {
            mode,
            title: mode.title(),
            face,
            degrees: degrees_for(&face),
            show_second_hand: mode.shows_second_hand(),
            controls: mode.control_hands(),
            readout: mode.shows_second_hand().then(|| face.to_string()),
            fields,
            attempts: mode.is_quiz().then_some(session.attempts_remaining),
            feedback: session.feedback.clone(),
            show_confirm: mode.is_quiz(),
        }
    }

    pub fn is_entry_screen(&self) -> bool {
        self.mode == Mode::Idle
    }
}
