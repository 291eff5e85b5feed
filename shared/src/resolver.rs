use crate::constants::{FULL_TURN, POINTER_OFFSET_DEG};
use crate::entrants::segment_angle;

/// Maps any angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if normalized >= FULL_TURN {
        0.0
    } else {
        normalized
    }
}

/// Disc angle sitting under the fixed pointer for a given wheel rotation.
/// The disc turns opposite to the angle convention, so the rotation is
/// subtracted before the pointer offset is applied.
pub fn pointer_angle(rotation: f64) -> f64 {
    normalize_angle(FULL_TURN - normalize_angle(rotation) + POINTER_OFFSET_DEG)
}

/// Index of the segment under the pointer. Pure, no hidden state.
pub fn resolve_index(rotation: f64, count: usize) -> usize {
    let count = count.max(1);
    let index = (pointer_angle(rotation) / segment_angle(count)).floor() as usize;
    index.min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(725.0), 5.0);
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(-1e-14), 0.0);
        assert_eq!(normalize_angle(360.0 * 40.0), 0.0);
    }

    #[test]
    fn test_known_positions() {
        // At rest the pointer reads disc angle 90.
        assert_eq!(pointer_angle(0.0), 90.0);
        assert_eq!(resolve_index(0.0, 4), 1);
        assert_eq!(resolve_index(90.0, 4), 0);
        assert_eq!(resolve_index(100.0, 4), 3);
        assert_eq!(resolve_index(270.0 + 360.0 * 9.0, 4), 2);
    }

    #[test]
    fn test_single_segment_always_wins() {
        for rotation in [0.0, 12.5, 359.999, 1e6, -45.0] {
            assert_eq!(resolve_index(rotation, 1), 0);
        }
    }

    #[test]
    fn test_clamps_upper_edge() {
        // pointer angle a hair below 360 must still land on the last segment
        let rotation = POINTER_OFFSET_DEG + 1e-12;
        assert_eq!(resolve_index(rotation, 37), 36);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let rotation = 5123.456;
        let first = resolve_index(rotation, 8);
        assert_eq!(resolve_index(rotation, 8), first);
        assert_eq!(resolve_index(rotation, 8), first);
    }

    #[test]
    fn test_zero_count_treated_as_one() {
        assert_eq!(resolve_index(200.0, 0), 0);
    }
}
