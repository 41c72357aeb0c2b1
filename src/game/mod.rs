//! Gameplay - answer normalization, the step/passphrase state machine and
//! the masked diagnostic view

pub mod diagnostics;
pub mod machine;
mod normalize;

pub use diagnostics::{DecodeReply, Request, decode};
pub use machine::{Feedback, Game, Phase};
