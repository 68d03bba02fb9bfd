//! Drawing module for the Teaching Clock
//!
//! Renders the face, hands and feedback banner using nannou's Draw API.

use nannou::prelude::*;
use tutor_core::{ClockView, Feedback, FeedbackKind, Hand};

use crate::face::FaceGeometry;

/// Color palette for the classroom theme
pub mod colors {
    use nannou::prelude::*;

    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 245,
        green: 240,
        blue: 228,
        standard: std::marker::PhantomData,
    };
    pub const FACE: Srgb<u8> = Srgb {
        red: 255,
        green: 253,
        blue: 247,
        standard: std::marker::PhantomData,
    };
    pub const RIM: Srgb<u8> = Srgb {
        red: 60,
        green: 72,
        blue: 96,
        standard: std::marker::PhantomData,
    };
    pub const TICK_MINOR: Srgb<u8> = Srgb {
        red: 150,
        green: 150,
        blue: 150,
        standard: std::marker::PhantomData,
    };
    pub const TICK_MAJOR: Srgb<u8> = Srgb {
        red: 40,
        green: 40,
        blue: 40,
        standard: std::marker::PhantomData,
    };
    pub const NUMERAL: Srgb<u8> = Srgb {
        red: 30,
        green: 36,
        blue: 50,
        standard: std::marker::PhantomData,
    };
    pub const HOUR_HAND: Srgb<u8> = Srgb {
        red: 30,
        green: 36,
        blue: 50,
        standard: std::marker::PhantomData,
    };
    pub const MINUTE_HAND: Srgb<u8> = Srgb {
        red: 50,
        green: 90,
        blue: 160,
        standard: std::marker::PhantomData,
    };
    pub const SECOND_HAND: Srgb<u8> = Srgb {
        red: 214,
        green: 60,
        blue: 50,
        standard: std::marker::PhantomData,
    };
    /// Hand currently being dragged
    pub const GRABBED: Srgb<u8> = Srgb {
        red: 240,
        green: 160,
        blue: 20,
        standard: std::marker::PhantomData,
    };
    pub const SUCCESS_BG: Srgb<u8> = Srgb {
        red: 46,
        green: 125,
        blue: 50,
        standard: std::marker::PhantomData,
    };
    pub const ERROR_BG: Srgb<u8> = Srgb {
        red: 170,
        green: 40,
        blue: 40,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_LIGHT: Srgb<u8> = Srgb {
        red: 250,
        green: 250,
        blue: 250,
        standard: std::marker::PhantomData,
    };
}

/// Draw the clock face with ticks, numerals and the visible hands
pub fn draw_face(draw: &Draw, geometry: &FaceGeometry, view: &ClockView, grabbed: Option<Hand>) {
    let radius = geometry.radius;

    draw.ellipse()
        .xy(geometry.center)
        .radius(radius)
        .color(colors::FACE)
        .stroke(colors::RIM)
        .stroke_weight((radius * 0.03).max(3.0));

    for i in 0..60u32 {
        let is_major = i % 5 == 0;
        let length = if is_major { radius * 0.1 } else { radius * 0.05 };
        let degrees = i as f64 * 6.0;
        draw.line()
            .start(geometry.polar(degrees, radius * 0.95 - length))
            .end(geometry.polar(degrees, radius * 0.95))
            .color(if is_major {
                colors::TICK_MAJOR
            } else {
                colors::TICK_MINOR
            })
            .weight(if is_major { 3.0 } else { 1.0 });
    }

    let numeral_size = (radius * 0.12).max(12.0) as u32;
    for numeral in 1..=12u32 {
        draw.text(&numeral.to_string())
            .xy(geometry.numeral_position(numeral))
            .color(colors::NUMERAL)
            .font_size(numeral_size)
            .w(radius * 0.3);
    }

    for hand in [Hand::Hour, Hand::Minute, Hand::Second] {
        if hand == Hand::Second && !view.show_second_hand {
            continue;
        }
        let color = if grabbed == Some(hand) {
            colors::GRABBED
        } else {
            hand_color(hand)
        };
        draw.line()
            .start(geometry.center)
            .end(geometry.hand_tip(hand, &view.degrees))
            .color(color)
            .weight(geometry.hand_weight(hand))
            .caps_round();
    }

    draw.ellipse()
        .xy(geometry.center)
        .radius((radius * 0.035).max(5.0))
        .color(colors::RIM);
}

fn hand_color(hand: Hand) -> Srgb<u8> {
    match hand {
        Hand::Hour => colors::HOUR_HAND,
        Hand::Minute => colors::MINUTE_HAND,
        Hand::Second => colors::SECOND_HAND,
    }
}

/// Draw the mode title above the face
pub fn draw_title(draw: &Draw, title: &str, window_rect: Rect) {
    draw.text(title)
        .x_y(0.0, window_rect.top() - 28.0)
        .color(colors::NUMERAL)
        .font_size(22)
        .w(window_rect.w());
}

/// Draw the answer feedback as a banner across the top of the face
pub fn draw_feedback_banner(draw: &Draw, feedback: &Feedback, geometry: &FaceGeometry) {
    let banner_height = 36.0;
    let banner_width = geometry.radius * 2.0;
    let pos = geometry.center + vec2(0.0, -geometry.radius * 0.45);

    let background = match feedback.kind {
        FeedbackKind::Success => colors::SUCCESS_BG,
        FeedbackKind::Error => colors::ERROR_BG,
    };

    draw.rect()
        .xy(pos)
        .w_h(banner_width, banner_height)
        .color(background);

    draw.text(&feedback.text)
        .xy(pos)
        .color(colors::TEXT_LIGHT)
        .font_size(15)
        .w(banner_width - 20.0);
}
