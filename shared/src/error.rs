use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WheelError {
    #[error("a spin is already in progress")]
    SpinInProgress,
    #[error("the roster cannot change while the wheel is spinning")]
    RosterLocked,
    #[error("invalid wheel configuration: {0}")]
    InvalidConfig(String),
}

impl From<validator::ValidationErrors> for WheelError {
    fn from(errors: validator::ValidationErrors) -> Self {
        WheelError::InvalidConfig(errors.to_string())
    }
}
