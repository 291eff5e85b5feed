use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{FULL_TURN, POINTER_OFFSET_DEG};
use crate::entrants::segment_center;
use crate::resolver::normalize_angle;

/// A pre-committed spin: the winner is chosen first and the target angle is
/// built so that the winner's segment center ends under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub winner_index: usize,
    pub full_turns: u32,
    pub start_angle: f64,
    pub target_angle: f64,
}

/// Uniform draw over `[0, count)`.
pub fn pick_winner<R: Rng + ?Sized>(rng: &mut R, count: usize) -> usize {
    rng.gen_range(0..count.max(1))
}

/// Rotation that lands segment `index` under the pointer, reached from
/// `current` by moving forward `full_turns` whole turns plus the remainder.
pub fn target_angle_for(index: usize, count: usize, current: f64, full_turns: u32) -> f64 {
    let rest = normalize_angle(POINTER_OFFSET_DEG - segment_center(index, count));
    let adjustment = normalize_angle(rest - normalize_angle(current));
    current + f64::from(full_turns) * FULL_TURN + adjustment
}

pub fn plan_spin<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    current: f64,
    min_spins: u32,
    max_spins: u32,
) -> SpinPlan {
    let count = count.max(1);
    let winner_index = pick_winner(rng, count);
    let full_turns = rng.gen_range(min_spins..=max_spins.max(min_spins));
    let target_angle = target_angle_for(winner_index, count, current, full_turns);

    log::debug!(
        "Planned spin: winner={} of {}, turns={}, {:.2} -> {:.2}",
        winner_index,
        count,
        full_turns,
        current,
        target_angle
    );

    SpinPlan { winner_index, full_turns, start_angle: current, target_angle }
}
