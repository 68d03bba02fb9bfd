//! Angle Resolver - pointer positions to clock angles and grid units
//!
//! Angles are measured in degrees clockwise from 12 o'clock, using screen
//! coordinates where y grows downward.

/// Clockwise angle of the pointer around the center, in `[0, 360)`.
///
/// A pointer exactly on the center (or non-finite input) resolves to 0.
pub fn angle_of(px: f64, py: f64, cx: f64, cy: f64) -> f64 {
    let dx = px - cx;
    let dy = py - cy;
    if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
        return 0.0;
    }

    let mut degrees = dx.atan2(-dy).to_degrees();
    if degrees < 0.0 {
        degrees += 360.0;
    }
    // -tiny + 360.0 can round up to exactly 360.0
    if degrees >= 360.0 {
        degrees -= 360.0;
    }
    degrees
}

/// Angular size of one unit on a grid of `grid` positions
pub fn step_degrees(grid: u32) -> f64 {
    360.0 / grid as f64
}

/// Nearest grid unit for an angle: `round(angle / step) mod grid`
pub fn quantize(angle: f64, grid: u32) -> u32 {
    let units = (angle / step_degrees(grid)).round();
    if !units.is_finite() {
        return 0;
    }
    (units as i64).rem_euclid(grid as i64) as u32
}

/// Angle at which a hand sits exactly on `unit`
pub fn angle_for_unit(unit: u32, grid: u32) -> f64 {
    (unit % grid) as f64 * step_degrees(grid)
}

/// Signed difference `to - from` wrapped onto the nearer way round the dial.
///
/// Differences beyond half a turn are folded back, so moving from 59 to 0 on
/// a 60-grid is +1 rather than -59.
pub fn shortest_unit_delta(from: u32, to: u32, grid: u32) -> i64 {
    let grid = grid as i64;
    let half = grid / 2;
    let mut diff = to as i64 - from as i64;
    if diff > half {
        diff -= grid;
    } else if diff < -half {
        diff += grid;
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(angle_of(0.0, -10.0, 0.0, 0.0), 0.0);
        assert!((angle_of(10.0, 0.0, 0.0, 0.0) - 90.0).abs() < 1e-9);
        assert!((angle_of(0.0, 10.0, 0.0, 0.0) - 180.0).abs() < 1e-9);
        assert!((angle_of(-10.0, 0.0, 0.0, 0.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_offset_center() {
        let a = angle_of(200.0, 100.0, 100.0, 100.0);
        assert!((a - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_center_is_stable() {
        assert_eq!(angle_of(5.0, 5.0, 5.0, 5.0), 0.0);
        assert_eq!(angle_of(f64::NAN, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_far_outside_face_still_resolves() {
        let a = angle_of(1.0e9, -1.0e9, 0.0, 0.0);
        assert!((a - 45.0).abs() < 1e-6);
    }

    #[test]
    fn test_quantize_rounds_to_nearest() {
        assert_eq!(quantize(2.9, 60), 0);
        assert_eq!(quantize(3.1, 60), 1);
        assert_eq!(quantize(359.0, 60), 0);
        assert_eq!(quantize(44.0, 12), 1);
        assert_eq!(quantize(46.0, 12), 2);
    }

    #[test]
    fn test_shortest_path_wraps() {
        assert_eq!(shortest_unit_delta(59, 0, 60), 1);
        assert_eq!(shortest_unit_delta(0, 59, 60), -1);
        assert_eq!(shortest_unit_delta(11, 0, 12), 1);
        assert_eq!(shortest_unit_delta(10, 20, 60), 10);
        assert_eq!(shortest_unit_delta(20, 10, 60), -10);
    }

    #[test]
    fn test_half_turn_is_not_folded() {
        assert_eq!(shortest_unit_delta(0, 30, 60), 30);
        assert_eq!(shortest_unit_delta(30, 0, 60), -30);
    }

    proptest! {
        #[test]
        fn prop_angle_round_trip(unit in 0u32..60) {
            prop_assert_eq!(quantize(angle_for_unit(unit, 60), 60), unit);
        }

        #[test]
        fn prop_hour_angle_round_trip(unit in 0u32..12) {
            prop_assert_eq!(quantize(angle_for_unit(unit, 12), 12), unit);
        }

        #[test]
        fn prop_angle_in_range(px in -1.0e6f64..1.0e6, py in -1.0e6f64..1.0e6) {
            let a = angle_of(px, py, 0.0, 0.0);
            prop_assert!((0.0..360.0).contains(&a));
        }

        #[test]
        fn prop_shortest_delta_lands_on_target(from in 0u32..60, to in 0u32..60) {
            let d = shortest_unit_delta(from, to, 60);
            prop_assert!(d.abs() <= 30);
            prop_assert_eq!((from as i64 + d).rem_euclid(60), to as i64);
        }
    }
}
