pub mod celebration;
pub mod names_input;
pub mod voice_control;
pub mod winners_sidebar;

pub use celebration::Celebration;
pub use names_input::NamesInput;
pub use voice_control::VoiceControl;
pub use winners_sidebar::WinnersSidebar;
