//! Face geometry for the Teaching Clock
//!
//! Positions of ticks, numerals and hands, plus hit testing of the hands.
//! Everything here is in nannou coordinates (origin at window center, y up).

use nannou::prelude::*;
use tutor_core::{Hand, HandDegrees};

/// Calculated face layout for the current window size
#[derive(Debug, Clone, Copy)]
pub struct FaceGeometry {
    pub center: Point2,
    pub radius: f32,
}

impl FaceGeometry {
    /// Fit the face into the area above the control panel
    pub fn calculate(window_rect: Rect, panel_height: f32) -> Self {
        let title_height = 60.0;
        let available_height = window_rect.h() - panel_height - title_height;
        let size = window_rect.w().min(available_height).max(120.0);

        let center = pt2(
            window_rect.x(),
            window_rect.y() + (panel_height - title_height) / 2.0,
        );

        Self {
            center,
            radius: size * 0.42,
        }
    }

    /// Point at `degrees` clockwise from 12 o'clock, `distance` from center
    pub fn polar(&self, degrees: f64, distance: f32) -> Point2 {
        let theta = (degrees as f32).to_radians();
        self.center + vec2(theta.sin(), theta.cos()) * distance
    }

    pub fn hand_length(&self, hand: Hand) -> f32 {
        match hand {
            Hand::Hour => self.radius * 0.5,
            Hand::Minute => self.radius * 0.72,
            Hand::Second => self.radius * 0.82,
        }
    }

    pub fn hand_weight(&self, hand: Hand) -> f32 {
        match hand {
            Hand::Hour => (self.radius * 0.045).max(4.0),
            Hand::Minute => (self.radius * 0.03).max(3.0),
            Hand::Second => (self.radius * 0.01).max(1.5),
        }
    }

    pub fn hand_tip(&self, hand: Hand, degrees: &HandDegrees) -> Point2 {
        self.polar(degrees.for_hand(hand), self.hand_length(hand))
    }

    pub fn numeral_position(&self, numeral: u32) -> Point2 {
        self.polar(numeral as f64 * 30.0, self.radius * 0.82)
    }

    /// Hand under the pointer, checking thin hands first.
    ///
    /// Uses a generous hit area for touch (~24px across at minimum).
    pub fn hit_test_hand(
        &self,
        x: f32,
        y: f32,
        degrees: &HandDegrees,
        show_second_hand: bool,
    ) -> Option<Hand> {
        let point = pt2(x, y);
        Hand::ALL
            .into_iter()
            .filter(|&hand| hand != Hand::Second || show_second_hand)
            .find(|&hand| {
                let tolerance = (self.hand_weight(hand) * 1.5).max(12.0);
                distance_to_segment(point, self.center, self.hand_tip(hand, degrees)) <= tolerance
            })
    }

    /// Convert a nannou point into the screen orientation the tutor expects
    pub fn to_screen(point: Point2) -> (f64, f64) {
        (point.x as f64, -point.y as f64)
    }
}

fn distance_to_segment(p: Point2, a: Point2, b: Point2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_squared();
    if length_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
