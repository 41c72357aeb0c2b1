//! Status line - the transient feedback message under the controls

use crate::game::Feedback;

/// The message currently shown, tagged with the generation that showed it.
///
/// Each `show` starts a new generation, so a timer started for an earlier
/// message cannot clear a later one, even when both carry the same feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusLine {
    generation: u64,
    feedback: Option<Feedback>,
}

impl StatusLine {
    /// Show `feedback` and return the generation its timer has to present to `expire`
    pub fn show(&mut self, feedback: Feedback) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.feedback = Some(feedback);
        self.generation
    }

    /// Clear the line if nothing was shown since `generation`
    pub fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.feedback = None;
        }
    }

    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.feedback = None;
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }
}
