//! Drag Controller - pointer motion to hand deltas
//!
//! Two states: idle, or dragging exactly one hand. Each pointer move is
//! quantized to the hand's grid and compared with where the hand currently
//! sits; the nearer way round becomes the delta. Repeatedly sweeping past 12
//! therefore keeps carrying into the next larger unit.

use crate::angle::{quantize, shortest_unit_delta};
use crate::time_math::{Hand, HandDelta, TimeOfDay};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DragController {
    active: Option<Hand>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand currently being dragged
    pub fn active(&self) -> Option<Hand> {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Start dragging `hand`. Returns false if another drag is in progress.
    pub fn begin(&mut self, hand: Hand) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(hand);
        true
    }

    /// Delta that moves the dragged hand to the unit nearest `angle`.
    ///
    /// `None` when idle or when the pointer is still over the hand's unit.
    pub fn track(&self, angle: f64, current: &TimeOfDay) -> Option<HandDelta> {
        let hand = self.active?;
        let grid = hand.grid();
        let pointed = quantize(angle, grid);
        let units = shortest_unit_delta(current.unit(hand), pointed, grid);
        (units != 0).then_some(HandDelta { hand, units })
    }

    /// Stop dragging. Returns the hand that was released, if any.
    pub fn end(&mut self) -> Option<Hand> {
        self.active.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::angle_for_unit;
    use crate::time_math::apply_hand_delta;

    #[test]
    fn test_idle_track_is_noop() {
        let drag = DragController::new();
        assert_eq!(drag.track(90.0, &TimeOfDay::NOON), None);
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let mut drag = DragController::new();
        assert!(drag.begin(Hand::Minute));
        assert!(!drag.begin(Hand::Hour));
        assert_eq!(drag.active(), Some(Hand::Minute));
    }

    #[test]
    fn test_end_without_drag_is_noop() {
        let mut drag = DragController::new();
        assert_eq!(drag.end(), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_minute_drag_across_twelve_goes_forward() {
        let mut drag = DragController::new();
        drag.begin(Hand::Minute);
        let t = TimeOfDay::new(3, 59, 0);
        let delta = drag.track(angle_for_unit(0, 60), &t).unwrap();
        assert_eq!(delta.units, 1);
        assert_eq!(apply_hand_delta(&t, delta), TimeOfDay::new(4, 0, 0));
    }

    #[test]
    fn test_second_drag_backwards_across_twelve() {
        let mut drag = DragController::new();
        drag.begin(Hand::Second);
        let t = TimeOfDay::new(4, 0, 0);
        let delta = drag.track(angle_for_unit(59, 60), &t).unwrap();
        assert_eq!(delta.units, -1);
        assert_eq!(apply_hand_delta(&t, delta), TimeOfDay::new(3, 59, 59));
    }

    #[test]
    fn test_multi_revolution_second_drag() {
        let mut drag = DragController::new();
        drag.begin(Hand::Second);
        let mut t = TimeOfDay::new(12, 0, 0);
        // Two full clockwise sweeps in 10-second steps
        for step in 1..=12 {
            let angle = angle_for_unit((step * 10) % 60, 60);
            if let Some(delta) = drag.track(angle, &t) {
                t = apply_hand_delta(&t, delta);
            }
        }
        assert_eq!(t, TimeOfDay::new(12, 2, 0));
    }

    #[test]
    fn test_hour_drag_uses_twelve_grid() {
        let mut drag = DragController::new();
        drag.begin(Hand::Hour);
        let t = TimeOfDay::new(11, 30, 0);
        let delta = drag.track(0.0, &t).unwrap();
        assert_eq!(delta, HandDelta { hand: Hand::Hour, units: 1 });
        assert_eq!(apply_hand_delta(&t, delta), TimeOfDay::new(12, 30, 0));
    }

    #[test]
    fn test_pointer_over_current_unit_emits_nothing() {
        let mut drag = DragController::new();
        drag.begin(Hand::Minute);
        let t = TimeOfDay::new(1, 15, 0);
        assert_eq!(drag.track(91.0, &t), None);
    }
}
