use serde::{Deserialize, Serialize};
use strum::Display;

use crate::core::effects::TaskResultKind;
use crate::core::executor::TaskId;
use crate::core::session::{ClusterDraft, DraftPatch};
use crate::core::validation::DraftField;

/// Everything that can happen to the editor: UI events and task lifecycle
/// callbacks alike. The reducer consumes these one at a time; mutation is
/// always sequenced through discrete actions, so the state never needs a
/// lock.
#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
    /// Open the dialog for batch creation with a single blank draft.
    OpenCreate,
    /// Open the dialog seeded with an existing cluster record.
    OpenUpdate(ClusterDraft),
    /// Dismiss the dialog; always resets the session.
    Close,
    /// "+" on the tab bar.
    TabAdded,
    /// Close button on one tab.
    TabRemoved(String),
    /// A tab header was clicked.
    TabSelected(String),
    /// An input field changed for the identified draft.
    DraftEdited { id: String, patch: DraftPatch },
    /// An input field lost focus; validate just that field.
    FieldBlurred { id: String, field: DraftField },
    /// Confirm button.
    SubmitRequested,
    /// The executor picked up a scheduled gateway call.
    TaskStarted(TaskId, String),
    /// Terminal outcome of a gateway call.
    TaskFinished(TaskId, TaskResultKind),
}
