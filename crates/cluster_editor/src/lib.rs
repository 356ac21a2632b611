//! Editing core for the Crane cluster dialog.
//!
//! Holds the draft collection, validates it field by field and drives the
//! submission lifecycle against a [`cluster_api::ClusterGateway`]. The UI
//! layer feeds [`Action`]s into [`reduce`] and renders from [`RootState`];
//! asynchronous gateway calls are described as effects and interpreted by
//! the [`TaskExecutor`].

pub mod action;
pub mod core;

pub use action::Action;
pub use core::effects::{Effect, TaskKind, TaskResultKind};
pub use core::executor::{TaskExecutor, TaskId};
pub use core::reducer::reduce;
pub use core::session::{ClusterDraft, DraftPatch, EditMode, EditSession, SessionError};
pub use core::state::{RootState, SubmissionState};
pub use core::validation::{DraftField, DraftVerdicts, ValidationState, Verdict};
