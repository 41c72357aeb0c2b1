//! Error types for lookups and the diagnostic decoder.
//!
//! Player mistakes are not errors; they come back as `game::Feedback`.

/// A clue lookup outside the drawn sequence
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClueError {
    #[error("clue index {index} out of range (0..{count})")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("step {step} out of range (1..={count})")]
    StepOutOfRange { step: usize, count: usize },
}

/// Failures of the hex/XOR decode helper
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("decoded bytes are not valid UTF-8")]
    NotUtf8,
}
