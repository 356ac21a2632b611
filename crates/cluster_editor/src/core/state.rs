//! Root state targeted by the reducer.
//!
//! Bundles the three sub-states the dialog is made of: the editing session
//! (drafts, focus, mode), the derived validation map, and the submission
//! lifecycle. The UI renders exclusively from this struct; the reducer is
//! the only writer.

use serde::{Deserialize, Serialize};

use crate::core::session::EditSession;
use crate::core::validation::ValidationState;

/// Submission lifecycle of the dialog.
///
/// A rejected submit is not a distinct variant: it leaves the state `Idle`
/// with the verdicts written to `RootState::validation` and the first
/// offending tab focused, so the user can fix fields and resubmit
/// immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// Exactly one gateway call is in flight; further submits are ignored.
    Submitting,
    /// The gateway reported an error; shown verbatim as the banner.
    Failed(String),
}

/// Everything the reducer mutates and the UI reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootState {
    pub session: EditSession,
    pub validation: ValidationState,
    pub submission: SubmissionState,
}

impl RootState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a gateway call is in flight; drives the confirm button's
    /// loading/disabled state.
    pub fn is_submitting(&self) -> bool {
        matches!(self.submission, SubmissionState::Submitting)
    }

    /// Banner message if the last submission failed.
    pub fn error_banner(&self) -> Option<&str> {
        match &self.submission {
            SubmissionState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
