//! Feedback gate shared by every game.
//!
//! `Idle` means gestures are live. `Showing` blocks every gesture except the
//! dismissal; there is no timeout, only an explicit acknowledgement leaves it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game_engine::models::{Feedback, FeedbackKind};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "feedback")]
pub enum FeedbackState {
    #[default]
    Idle,
    Showing(Feedback),
}

impl FeedbackState {
    pub fn is_idle(&self) -> bool {
        matches!(self, FeedbackState::Idle)
    }

    pub fn current(&self) -> Option<&Feedback> {
        match self {
            FeedbackState::Idle => None,
            FeedbackState::Showing(fb) => Some(fb),
        }
    }

    pub fn kind(&self) -> Option<FeedbackKind> {
        self.current().map(|fb| fb.kind)
    }

    /// Enter `Showing`. A feedback already on screen is replaced; callers
    /// gate on `is_idle` first so this only happens on reset paths.
    pub fn show(&mut self, feedback: Feedback) {
        debug!(kind = ?feedback.kind, title = %feedback.title, "feedback shown");
        *self = FeedbackState::Showing(feedback);
    }

    /// Return to `Idle`. Returns `false` if nothing was showing.
    pub fn dismiss(&mut self) -> bool {
        match std::mem::take(self) {
            FeedbackState::Idle => false,
            FeedbackState::Showing(fb) => {
                debug!(kind = ?fb.kind, "feedback dismissed");
                true
            }
        }
    }
}
