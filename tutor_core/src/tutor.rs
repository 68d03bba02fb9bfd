//! Mode / Session State Machine
//!
//! [`Tutor`] owns the session along with every timer that can change it: the
//! live-clock sampler, the held control button and the delayed follow-up
//! after an answer. Each is dropped on every path out of a mode, and a
//! follow-up only fires into the mode and entry it was scheduled for.

use std::time::Duration;

use chrono_tz::Tz;
use rand::Rng;
use tracing::{debug, info};

use crate::angle::angle_of;
use crate::config::TutorConfig;
use crate::drag::DragController;
use crate::repeat::RepeatPress;
use crate::session::{Feedback, Mode, Session};
use crate::time_engine::{read_clock, WallClock};
use crate::time_math::{apply_hand_delta, Direction, Hand, TimeOfDay};
use crate::timer::{Deadline, Interval};
use crate::view::ClockView;

/// Everything the shell can ask of the tutor
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectMode(Mode),
    BackToEntry,
    HandPointerDown(Hand),
    /// Pointer position in screen coordinates (y grows downward)
    PointerMove { x: f64, y: f64 },
    /// Pointer up, cancelled, or left the tracking surface
    PointerUp,
    ControlPress(Hand, Direction),
    ControlRelease,
    EditField(Hand, String),
    CheckAnswer,
    /// Let due timers fire
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FollowUp {
    NextRound,
    ReturnToEntry,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    deadline: Deadline,
    mode: Mode,
    entry: u64,
    follow_up: FollowUp,
}

pub struct Tutor<C, R> {
    session: Session,
    config: TutorConfig,
    tz: Tz,
    clock: C,
    rng: R,
    drag: DragController,
    repeat: RepeatPress,
    realtime: Option<Interval>,
    pending: Option<Pending>,
    /// Bumped on every mode entry and exit
    entry: u64,
    face_center: (f64, f64),
}

impl<C: WallClock, R: Rng> Tutor<C, R> {
    pub fn new(config: TutorConfig, clock: C, rng: R) -> Self {
        Self {
            session: Session::idle(config.attempts()),
            tz: config.tz(),
            repeat: RepeatPress::new(config.repeat_interval()),
            config,
            clock,
            rng,
            drag: DragController::new(),
            realtime: None,
            pending: None,
            entry: 0,
            face_center: (0.0, 0.0),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> ClockView {
        ClockView::project(&self.session)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn dragging(&self) -> Option<Hand> {
        self.drag.active()
    }

    pub fn held_control(&self) -> Option<(Hand, Direction)> {
        self.repeat.held()
    }

    /// Whether a delayed follow-up is waiting to fire
    pub fn has_pending_follow_up(&self) -> bool {
        self.pending.is_some()
    }

    /// Where the face is centered, in the same coordinates as pointer moves
    pub fn set_face_center(&mut self, x: f64, y: f64) {
        self.face_center = (x, y);
    }

    /// Single entry point for every action
    pub fn handle(&mut self, action: Action, now: Duration) -> &Session {
        match action {
            Action::SelectMode(mode) => self.select_mode(mode, now),
            Action::BackToEntry => self.back_to_entry(),
            Action::HandPointerDown(hand) => {
                self.on_hand_pointer_down(hand);
            }
            Action::PointerMove { x, y } => self.on_pointer_move(x, y),
            Action::PointerUp => self.on_pointer_up(),
            Action::ControlPress(hand, direction) => self.on_control_press(hand, direction, now),
            Action::ControlRelease => self.on_control_release(),
            Action::EditField(hand, raw) => self.edit_field(hand, &raw),
            Action::CheckAnswer => self.check_answer(now),
            Action::Tick => self.advance(now),
        }
        &self.session
    }

    /// Enter a mode. Selecting while another mode is active leaves it first.
    pub fn select_mode(&mut self, mode: Mode, now: Duration) {
        if mode == Mode::Idle {
            self.back_to_entry();
            return;
        }
        if self.session.mode != Mode::Idle {
            self.leave_mode();
        }

        self.entry += 1;
        self.session.mode = mode;
        self.session.feedback = None;

        match mode {
            Mode::Read | Mode::Set => {
                self.session.attempts_remaining = self.config.attempts();
                self.start_round();
            }
            Mode::Learn => {
                self.session.current = TimeOfDay::NOON;
            }
            Mode::Realtime => {
                self.session.current = read_clock(&self.clock, self.tz);
                self.realtime = Some(Interval::starting_at(now, self.config.realtime_period()));
            }
            Mode::Idle => {}
        }

        info!(mode = ?mode, "entered mode");
    }

    /// Return to the entry screen from any mode
    pub fn back_to_entry(&mut self) {
        if self.session.mode == Mode::Idle {
            debug!("already on entry screen");
            return;
        }
        let left = self.session.mode;
        self.leave_mode();
        info!(mode = ?left, "returned to entry screen");
    }

    /// Grab a hand. Returns whether a drag started.
    pub fn on_hand_pointer_down(&mut self, hand: Hand) -> bool {
        if !self.session.mode.can_drag(hand) {
            debug!(hand = ?hand, mode = ?self.session.mode, "hand not draggable in this mode");
            return false;
        }
        if !self.drag.begin(hand) {
            debug!(hand = ?hand, "ignoring pointer down during another drag");
            return false;
        }
        debug!(hand = ?hand, "drag started");
        true
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !self.drag.is_dragging() {
            return;
        }
        let (cx, cy) = self.face_center;
        let angle = angle_of(x, y, cx, cy);
        if let Some(delta) = self.drag.track(angle, &self.session.current) {
            self.session.current = apply_hand_delta(&self.session.current, delta);
        }
    }

    pub fn on_pointer_up(&mut self) {
        if let Some(hand) = self.drag.end() {
            debug!(hand = ?hand, time = %self.session.current, "drag ended");
        }
    }

    pub fn on_control_press(&mut self, hand: Hand, direction: Direction, now: Duration) {
        if !self.session.mode.control_hands().contains(&hand) {
            debug!(hand = ?hand, mode = ?self.session.mode, "no control for hand in this mode");
            return;
        }
        let step = self.repeat.press(hand, direction, now);
        self.session.current = apply_hand_delta(&self.session.current, step);
        debug!(hand = ?hand, direction = ?direction, "control pressed");
    }

    pub fn on_control_release(&mut self) {
        if self.repeat.release() {
            debug!("control released");
        }
    }

    /// Overwrite one field from typed text.
    ///
    /// Non-numeric text counts as 0. The value is clamped into the field's
    /// range (hour 0..=12, where 0 is blank) and never carries.
    pub fn edit_field(&mut self, hand: Hand, raw: &str) {
        if !self.session.mode.allows_field_edits() {
            debug!(mode = ?self.session.mode, "field edits disabled in this mode");
            return;
        }
        let value = parse_field(raw);
        let current = &mut self.session.current;
        match hand {
            Hand::Hour => current.hour = value.clamp(0, 12) as u32,
            Hand::Minute => current.minute = value.clamp(0, 59) as u32,
            Hand::Second => current.second = value.clamp(0, 59) as u32,
        }
    }

    /// Judge the current answer in Read or Set
    pub fn check_answer(&mut self, now: Duration) {
        let mode = self.session.mode;
        if !mode.is_quiz() {
            debug!(mode = ?mode, "no answer to check in this mode");
            return;
        }
        if self.session.attempts_remaining == 0 {
            debug!("attempts exhausted, waiting to return");
            return;
        }

        if self.session.is_correct() {
            info!(mode = ?mode, answer = %self.session.target.format_hm(), "correct answer");
            self.session.feedback = Some(Feedback::correct());
            self.schedule(FollowUp::NextRound, self.config.success_delay(), now);
            return;
        }

        self.session.attempts_remaining -= 1;
        let feedback = match mode {
            Mode::Read => {
                self.session.current = TimeOfDay {
                    second: 0,
                    ..self.session.target
                };
                Feedback::reveal(&self.session.target)
            }
            _ => Feedback::hands_show(&self.session.current),
        };
        info!(
            mode = ?mode,
            attempts_remaining = self.session.attempts_remaining,
            "wrong answer"
        );

        if self.session.attempts_remaining == 0 {
            self.session.feedback = Some(Feedback::out_of_attempts());
            self.schedule(FollowUp::ReturnToEntry, self.config.exit_delay(), now);
        } else {
            self.session.feedback = Some(feedback);
            self.schedule(FollowUp::NextRound, self.config.retry_delay(), now);
        }
    }

    /// Fire whatever fell due by `now`
    pub fn advance(&mut self, now: Duration) {
        if let Some((step, ticks)) = self.repeat.poll(now) {
            for _ in 0..ticks {
                self.session.current = apply_hand_delta(&self.session.current, step);
            }
        }

        let sample_due = self
            .realtime
            .as_mut()
            .map_or(false, |interval| interval.poll(now) > 0);
        if sample_due && self.session.mode == Mode::Realtime {
            self.session.current = read_clock(&self.clock, self.tz);
        }

        let Some(pending) = self.pending else {
            return;
        };
        if !pending.deadline.is_due(now) {
            return;
        }
        self.pending = None;
        if pending.mode != self.session.mode || pending.entry != self.entry {
            debug!(scheduled_for = ?pending.mode, "dropping stale follow-up");
            return;
        }
        match pending.follow_up {
            FollowUp::NextRound => {
                self.session.feedback = None;
                self.start_round();
                debug!(mode = ?self.session.mode, "next round");
            }
            FollowUp::ReturnToEntry => self.back_to_entry(),
        }
    }

    fn schedule(&mut self, follow_up: FollowUp, delay: Duration, now: Duration) {
        self.pending = Some(Pending {
            deadline: Deadline::after(now, delay),
            mode: self.session.mode,
            entry: self.entry,
            follow_up,
        });
    }

    /// Fresh target, and a fresh starting point for the learner
    fn start_round(&mut self) {
        self.session.target = random_time(&mut self.rng);
        self.session.current = match self.session.mode {
            Mode::Set => random_time(&mut self.rng),
            _ => TimeOfDay::BLANK,
        };
    }

    fn leave_mode(&mut self) {
        self.drag.end();
        self.repeat.release();
        self.realtime = None;
        self.pending = None;
        self.entry += 1;
        self.session.mode = Mode::Idle;
        self.session.feedback = None;
    }
}

/// A whole-minute time with hour in 1..=12 and minute in 0..=59
pub fn random_time<R: Rng + ?Sized>(rng: &mut R) -> TimeOfDay {
    TimeOfDay {
        hour: rng.gen_range(1..=12),
        minute: rng.gen_range(0..60),
        second: 0,
    }
}

/// Leading integer of `raw`, or 0 when there is none
fn parse_field(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = &rest[..rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len())];
    if digits.is_empty() {
        return 0;
    }
    match digits.parse::<i64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}
