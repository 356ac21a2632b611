//! Pure reducer: consumes one [`Action`], mutates [`RootState`], returns
//! the effects to run.
//!
//! Policy:
//!   - Side-effect free; backend calls are only described via
//!     `Effect::Async` and performed by the executor.
//!   - Structural misuse (stale ids, forbidden tab operations) is logged at
//!     warn level and ignored. It never reaches the user.
//!   - Submission is all-or-nothing across the whole draft collection; no
//!     partial submission ever occurs.
//!   - Unhandled situations do not panic.

use tracing::warn;

use cluster_api::{ClusterSpec, CreateClustersRequest, UpdateClusterRequest};

use crate::action::Action;
use crate::core::effects::{Effect, TaskKind, TaskResultKind};
use crate::core::session::EditMode;
use crate::core::state::{RootState, SubmissionState};
use crate::core::validation::{self, DraftField};

/// Reduce a single action into state transitions + effects.
pub fn reduce(state: &mut RootState, action: Action) -> Vec<Effect> {
    match action {
        Action::OpenCreate => {
            state.validation.clear();
            state.submission = SubmissionState::Idle;
            state.session.open_create();
        }
        Action::OpenUpdate(seed) => {
            state.validation.clear();
            state.submission = SubmissionState::Idle;
            state.session.open_update(seed);
        }
        Action::Close => {
            state.session.close();
            state.validation.clear();
            state.submission = SubmissionState::Idle;
        }
        Action::TabAdded => {
            state.session.add_draft();
        }
        Action::TabRemoved(id) => {
            state.session.remove_draft(&id);
            state.validation.remove(&id);
        }
        Action::TabSelected(id) => {
            if let Err(e) = state.session.set_focused(&id) {
                warn!("tab selection ignored: {e}");
            }
        }
        Action::DraftEdited { id, patch } => {
            if let Err(e) = state.session.update_draft(&id, patch) {
                warn!("draft edit ignored: {e}");
            }
        }
        Action::FieldBlurred { id, field } => {
            let Some(draft) = state.session.get(&id) else {
                warn!("blur validation ignored: no draft with id `{id}`");
                return Vec::new();
            };
            let verdict = match field {
                DraftField::ClusterName => validation::validate_name(draft),
                DraftField::CraneUrl => validation::validate_crane_url(draft),
            };
            let entry = state.validation.entry(id).or_default();
            match field {
                DraftField::ClusterName => entry.cluster_name = verdict,
                DraftField::CraneUrl => entry.crane_url = verdict,
            }
        }
        Action::SubmitRequested => return submit(state),
        Action::TaskStarted(..) => {}
        Action::TaskFinished(_, result) => return finish(state, result),
    }
    Vec::new()
}

/// Validate every draft in tab order, then either focus the first offending
/// tab (blocking submission) or emit exactly one gateway call for the whole
/// collection.
fn submit(state: &mut RootState) -> Vec<Effect> {
    if !state.session.is_open() {
        warn!("submit ignored: session is closed");
        return Vec::new();
    }
    // One in-flight call at a time; a second submit is a no-op.
    if state.is_submitting() {
        return Vec::new();
    }

    let mut first_failed: Option<String> = None;
    for draft in state.session.drafts() {
        let verdicts = validation::validate_draft(draft);
        if verdicts.any_failed() && first_failed.is_none() {
            first_failed = Some(draft.id.clone());
        }
        state.validation.insert(draft.id.clone(), verdicts);
    }

    if let Some(id) = first_failed {
        if let Err(e) = state.session.set_focused(&id) {
            warn!("could not focus offending draft: {e}");
        }
        return vec![Effect::log(format!(
            "submit blocked by validation, first offending draft {id}"
        ))];
    }

    let kind = match state.session.mode() {
        EditMode::Create => TaskKind::CreateClusters(CreateClustersRequest {
            clusters: state
                .session
                .drafts()
                .iter()
                .map(|d| ClusterSpec {
                    name: d.cluster_name.clone(),
                    crane_url: d.crane_url.clone(),
                })
                .collect(),
        }),
        EditMode::Update => {
            // An open update session holds exactly one draft.
            let Some(d) = state.session.drafts().first() else {
                warn!("submit ignored: update session holds no draft");
                return Vec::new();
            };
            TaskKind::UpdateCluster(UpdateClusterRequest {
                id: d.id.clone(),
                name: d.cluster_name.clone(),
                crane_url: d.crane_url.clone(),
            })
        }
    };

    state.submission = SubmissionState::Submitting;
    vec![Effect::Async(kind)]
}

/// Reconcile a terminal gateway outcome.
///
/// Success resets and closes the session; failure surfaces the message and
/// leaves all drafts intact. Completions arriving after the session was
/// already closed are dropped rather than reopening anything.
fn finish(state: &mut RootState, result: TaskResultKind) -> Vec<Effect> {
    if !state.session.is_open() {
        return vec![Effect::log(format!(
            "dropping stale task completion: {result:?}"
        ))];
    }
    match result {
        TaskResultKind::CreateDone | TaskResultKind::UpdateDone => {
            state.session.close();
            state.validation.clear();
            state.submission = SubmissionState::Idle;
        }
        TaskResultKind::CreateFailed { error } | TaskResultKind::UpdateFailed { error } => {
            state.submission = SubmissionState::Failed(error);
        }
    }
    Vec::new()
}
