//! Validation state machine - steps through the clues, then the passphrase

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::ClueError;
use crate::generate::{Grid, MaskedPlacement, Puzzle};
use super::diagnostics::Diagnostics;
use super::normalize::normalize;

/// Where the player is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Answering clue `step` (1-based)
    Playing { step: usize },
    /// All clues answered, waiting for the passphrase
    Final,
    Solved,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing { step } => write!(f, "step {step}"),
            Self::Final => write!(f, "final"),
            Self::Solved => write!(f, "solved"),
        }
    }
}

/// Outcome of a player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Nothing left after normalization
    MissingInput,
    /// Wrong word for the current step
    Incorrect,
    /// Correct; now on `step`
    Advanced { step: usize },
    /// Last clue answered; the passphrase input opens
    FinalUnlocked,
    /// Wrong passphrase; try again
    Retry,
    Solved,
    /// Action not available in the current phase
    Locked,
}

impl Feedback {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Advanced { .. } | Self::FinalUnlocked | Self::Solved)
    }

    pub fn message(&self) -> String {
        match self {
            Self::MissingInput => "Type an answer first.".to_string(),
            Self::Incorrect => "Incorrect answer.".to_string(),
            Self::Advanced { step } => format!("Correct! On to clue {step}."),
            Self::FinalUnlocked => "All clues found. Enter the passphrase.".to_string(),
            Self::Retry => "That passphrase is wrong. Try again.".to_string(),
            Self::Solved => "Solved!".to_string(),
            Self::Locked => "Not available right now.".to_string(),
        }
    }
}

/// One game over one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: Puzzle,
    phase: Phase,
}

impl Game {
    pub fn new(puzzle: Puzzle) -> Self {
        let phase = if puzzle.clues().is_empty() {
            Phase::Final
        } else {
            Phase::Playing { step: 1 }
        };
        Self { puzzle, phase }
    }

    pub fn from_seed(seed: &str, config: &GameConfig) -> Self {
        Self::new(Puzzle::derive(seed, config))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current step while playing
    pub fn step(&self) -> Option<usize> {
        match self.phase {
            Phase::Playing { step } => Some(step),
            _ => None,
        }
    }

    pub fn clue_count(&self) -> usize {
        self.puzzle.clues().len()
    }

    /// Cells for rendering. Tokens are hidden by the presentation layer, not here.
    pub fn grid(&self) -> &Grid {
        self.puzzle.grid()
    }

    /// Check `answer` against the clue for the current step.
    pub fn submit(&mut self, answer: &str) -> Feedback {
        let Phase::Playing { step } = self.phase else {
            return Feedback::Locked;
        };
        let answer = normalize(answer);
        if answer.is_empty() {
            return Feedback::MissingInput;
        }
        if answer != normalize(&self.puzzle.clues()[step - 1]) {
            debug!(step, "incorrect answer");
            return Feedback::Incorrect;
        }

        info!(step, "clue solved");
        let next = step + 1;
        if next > self.clue_count() {
            self.phase = Phase::Final;
            info!("all clues solved, passphrase unlocked");
            Feedback::FinalUnlocked
        } else {
            self.phase = Phase::Playing { step: next };
            Feedback::Advanced { step: next }
        }
    }

    /// Check the hyphen-joined passphrase. Only succeeds in `Final`.
    pub fn submit_final(&mut self, passphrase: &str) -> Feedback {
        if self.phase != Phase::Final {
            return Feedback::Locked;
        }
        let passphrase = normalize(passphrase);
        if passphrase.is_empty() {
            return Feedback::MissingInput;
        }
        if passphrase == normalize(&self.puzzle.passphrase()) {
            self.phase = Phase::Solved;
            info!(seed = self.puzzle.seed(), "puzzle solved");
            Feedback::Solved
        } else {
            debug!("incorrect passphrase");
            Feedback::Retry
        }
    }

    /// Offset and length for `step` (1-based). Never includes the word.
    pub fn hint(&self, step: usize) -> Result<MaskedPlacement, ClueError> {
        let count = self.clue_count();
        if step == 0 || step > count {
            warn!(step, count, "hint requested for step out of range");
            return Err(ClueError::StepOutOfRange { step, count });
        }
        Ok(self.puzzle.placements()[step - 1].masked(step - 1))
    }

    /// Hint for the step being played, if any
    pub fn current_hint(&self) -> Option<MaskedPlacement> {
        self.step().and_then(|step| self.hint(step).ok())
    }

    /// Read-only masked view for the diagnostic surface
    pub fn diagnostics(&self) -> Diagnostics<'_> {
        Diagnostics::new(&self.puzzle, self.phase)
    }
}
