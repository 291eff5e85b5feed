// Spin timing
pub const SPIN_DURATION_MS: u32 = 4000;
/// Extra time the deadline timer waits past the animation before forcing completion.
pub const DEADLINE_GRACE_MS: u32 = 150;

// Full rotations added to every spin, inclusive on both ends
pub const MIN_SPINS: u32 = 8;
pub const MAX_SPINS: u32 = 12;

pub const POINTS_PER_WIN: u32 = 5;

// Celebration timings after a winner is announced
pub const CELEBRATION_MS: u32 = 4000;
pub const CONFETTI_MS: u32 = 3500;
pub const VOICE_STOP_DELAY_MS: u32 = 500;

pub const FULL_TURN: f64 = 360.0;
/// Angle of the fixed pointer in the resolver's frame.
pub const POINTER_OFFSET_DEG: f64 = 90.0;

pub const PLACEHOLDER_NAME: &str = "No names";

pub const DEFAULT_NAMES: [&str; 6] = ["Shruti", "Naman", "Keta", "Kuldip", "Praful", "Viren"];
