pub mod animator;
pub mod config;
pub mod constants;
pub mod entrants;
pub mod error;
pub mod ledger;
pub mod palette;
pub mod picker;
pub mod renderer;
pub mod resolver;
pub mod voice;
pub mod wheel;

pub use config::WheelConfig;
pub use entrants::Roster;
pub use error::WheelError;
pub use ledger::{ScoreLedger, ScoreRecord};
pub use picker::SpinPlan;
pub use wheel::{SpinOutcome, Wheel, WheelState};
