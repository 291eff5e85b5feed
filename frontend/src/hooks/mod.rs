pub mod use_ledger;
pub mod use_winner_audio;

pub use use_ledger::*;
pub use use_winner_audio::*;
