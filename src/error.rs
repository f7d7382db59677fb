use thiserror::Error;

pub type Result<T> = std::result::Result<T, AutomatonError>;

/// Errors raised while building rules, engines, or decoding rows.
///
/// Every variant is produced at construction time. A validly constructed
/// [`GenerationEngine`](crate::GenerationEngine) never fails afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    #[error("invalid rule: {0}")]
    InvalidRule(String),

    #[error("invalid neighborhood input: ({left}, {center}, {right})")]
    InvalidInput { left: u8, center: u8, right: u8 },

    #[error("invalid row length: {0}")]
    InvalidLength(usize),

    #[error("invalid initial state: {0}")]
    InvalidInitialState(String),

    #[error("cannot decode row: {0}")]
    Decode(String),
}
