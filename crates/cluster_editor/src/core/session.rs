//! Editing session and draft store.
//!
//! `EditSession` owns the ordered collection of in-progress cluster drafts,
//! the focused tab and the edit mode. It is a pure state container: no I/O,
//! no validation. Structural misuse (stale ids, removing the last draft,
//! adding tabs outside create mode) indicates a caller bug, not bad user
//! input, and is either reported as [`SessionError`] or swallowed as a
//! no-op. It is never surfaced to the user.
//!
//! Lifecycle: `open_create` / `open_update` start a session, `close` always
//! resets it. A session is never left populated across open/close cycles.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether the session creates new clusters (batch, multiple tabs) or
/// updates one existing record (singleton).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditMode {
    Create,
    Update,
}

/// One in-progress cluster definition, keyed by a session-stable id.
///
/// In create mode ids are generated locally (`draft-N`); in update mode the
/// id is the backend-assigned one and travels back out in the update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterDraft {
    pub id: String,
    pub cluster_name: String,
    pub crane_url: String,
}

impl ClusterDraft {
    fn blank(id: String) -> Self {
        Self {
            id,
            cluster_name: String::new(),
            crane_url: String::new(),
        }
    }
}

/// Partial field update merged into a draft; absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPatch {
    pub cluster_name: Option<String>,
    pub crane_url: Option<String>,
}

impl DraftPatch {
    pub fn name(value: impl Into<String>) -> Self {
        Self {
            cluster_name: Some(value.into()),
            crane_url: None,
        }
    }

    pub fn url(value: impl Into<String>) -> Self {
        Self {
            cluster_name: None,
            crane_url: Some(value.into()),
        }
    }
}

/// Structural store errors. These mean a stale caller, never user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no draft with id `{0}` in the current session")]
    DraftNotFound(String),
}

/// Editing session scoped to one open/close cycle of the cluster dialog.
///
/// Invariants:
/// - draft ids are pairwise distinct
/// - `focused_id` names a present draft while the session is open
/// - a create-mode collection never drops below one draft
/// - an update-mode collection holds exactly one draft
/// - a closed session holds no drafts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    mode: EditMode,
    drafts: Vec<ClusterDraft>,
    focused_id: Option<String>,
    is_open: bool,
    next_local_id: u64,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::closed()
    }
}

impl EditSession {
    /// A session in the closed, blank state.
    pub fn closed() -> Self {
        Self {
            mode: EditMode::Create,
            drafts: Vec::new(),
            focused_id: None,
            is_open: false,
            next_local_id: 1,
        }
    }

    /// Open for batch creation with a single blank draft, focused.
    pub fn open_create(&mut self) {
        self.reset();
        self.mode = EditMode::Create;
        self.is_open = true;
        let id = self.fresh_id();
        self.drafts.push(ClusterDraft::blank(id.clone()));
        self.focused_id = Some(id);
    }

    /// Open for updating exactly one existing cluster.
    pub fn open_update(&mut self, seed: ClusterDraft) {
        self.reset();
        self.mode = EditMode::Update;
        self.is_open = true;
        self.focused_id = Some(seed.id.clone());
        self.drafts.push(seed);
    }

    /// Close the dialog. Always resets, independent of pending edits.
    pub fn close(&mut self) {
        self.reset();
    }

    /// Back to the blank closed shape.
    pub fn reset(&mut self) {
        self.mode = EditMode::Create;
        self.drafts.clear();
        self.focused_id = None;
        self.is_open = false;
        self.next_local_id = 1;
    }

    /// Append a blank draft and focus it. Only meaningful while creating;
    /// a no-op in update mode or on a closed session.
    pub fn add_draft(&mut self) {
        if self.mode != EditMode::Create || !self.is_open {
            return;
        }
        let id = self.fresh_id();
        self.drafts.push(ClusterDraft::blank(id.clone()));
        self.focused_id = Some(id);
    }

    /// Remove the identified draft.
    ///
    /// No-op outside create mode, on a stale id, or when it would empty the
    /// collection. If the removed draft was focused, focus falls back to the
    /// previous neighbor (the first remaining draft if none precedes).
    pub fn remove_draft(&mut self, id: &str) {
        if self.mode != EditMode::Create || self.drafts.len() <= 1 {
            return;
        }
        let Some(pos) = self.drafts.iter().position(|d| d.id == id) else {
            return;
        };
        self.drafts.remove(pos);
        if self.focused_id.as_deref() == Some(id) {
            let neighbor = pos.saturating_sub(1);
            self.focused_id = Some(self.drafts[neighbor].id.clone());
        }
    }

    /// Merge field values into the identified draft.
    pub fn update_draft(&mut self, id: &str, patch: DraftPatch) -> Result<(), SessionError> {
        let draft = self
            .drafts
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| SessionError::DraftNotFound(id.to_string()))?;
        if let Some(name) = patch.cluster_name {
            draft.cluster_name = name;
        }
        if let Some(url) = patch.crane_url {
            draft.crane_url = url;
        }
        Ok(())
    }

    /// Focus the identified tab.
    pub fn set_focused(&mut self, id: &str) -> Result<(), SessionError> {
        if self.drafts.iter().any(|d| d.id == id) {
            self.focused_id = Some(id.to_string());
            Ok(())
        } else {
            Err(SessionError::DraftNotFound(id.to_string()))
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Drafts in tab order.
    pub fn drafts(&self) -> &[ClusterDraft] {
        &self.drafts
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused_id.as_deref()
    }

    pub fn focused(&self) -> Option<&ClusterDraft> {
        let id = self.focused_id.as_deref()?;
        self.get(id)
    }

    pub fn get(&self, id: &str) -> Option<&ClusterDraft> {
        self.drafts.iter().find(|d| d.id == id)
    }

    fn fresh_id(&mut self) -> String {
        let id = format!("draft-{}", self.next_local_id);
        self.next_local_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn seed() -> ClusterDraft {
        ClusterDraft {
            id: "cls-42".into(),
            cluster_name: "prod".into(),
            crane_url: "http://crane.example.com".into(),
        }
    }

    #[test]
    fn open_create_starts_with_one_blank_focused_draft() {
        let mut s = EditSession::closed();
        s.open_create();
        assert!(s.is_open());
        assert_eq!(s.mode(), EditMode::Create);
        assert_eq!(s.drafts().len(), 1);
        assert_eq!(s.focused_id(), Some(s.drafts()[0].id.as_str()));
        assert_eq!(s.drafts()[0].cluster_name, "");
        assert_eq!(s.drafts()[0].crane_url, "");
    }

    #[test]
    fn open_update_holds_exactly_the_seed() {
        let mut s = EditSession::closed();
        s.open_update(seed());
        assert_eq!(s.mode(), EditMode::Update);
        assert_eq!(s.drafts(), &[seed()]);
        assert_eq!(s.focused_id(), Some("cls-42"));
    }

    #[test]
    fn add_then_remove_restores_collection_and_focus() {
        let mut s = EditSession::closed();
        s.open_create();
        s.add_draft();
        let before = s.clone();

        s.add_draft();
        let added = s.focused_id().expect("new draft focused").to_string();
        s.remove_draft(&added);

        assert_eq!(s.drafts(), before.drafts());
        assert_eq!(s.focused_id(), before.focused_id());
    }

    #[test]
    fn remove_never_empties_the_collection() {
        let mut s = EditSession::closed();
        s.open_create();
        let only = s.drafts()[0].id.clone();
        s.remove_draft(&only);
        assert_eq!(s.drafts().len(), 1);
        assert_eq!(s.focused_id(), Some(only.as_str()));
    }

    #[test]
    fn remove_unfocused_draft_keeps_focus() {
        let mut s = EditSession::closed();
        s.open_create();
        let first = s.drafts()[0].id.clone();
        s.add_draft();
        let second = s.focused_id().unwrap().to_string();
        s.remove_draft(&first);
        assert_eq!(s.drafts().len(), 1);
        assert_eq!(s.focused_id(), Some(second.as_str()));
    }

    #[test]
    fn remove_focused_draft_falls_back_to_previous_neighbor() {
        let mut s = EditSession::closed();
        s.open_create();
        let first = s.drafts()[0].id.clone();
        s.add_draft();
        s.add_draft();
        let third = s.focused_id().unwrap().to_string();
        let second = s.drafts()[1].id.clone();

        s.set_focused(&second).unwrap();
        s.remove_draft(&second);
        assert_eq!(s.focused_id(), Some(first.as_str()));
        assert_eq!(s.drafts().len(), 2);
        assert_eq!(s.drafts()[1].id, third);
    }

    #[test]
    fn remove_is_a_noop_in_update_mode() {
        let mut s = EditSession::closed();
        s.open_update(seed());
        s.remove_draft("cls-42");
        assert_eq!(s.drafts().len(), 1);
    }

    #[test]
    fn add_is_a_noop_in_update_mode() {
        let mut s = EditSession::closed();
        s.open_update(seed());
        s.add_draft();
        assert_eq!(s.drafts().len(), 1);
    }

    #[test]
    fn update_draft_merges_only_given_fields() {
        let mut s = EditSession::closed();
        s.open_update(seed());
        s.update_draft("cls-42", DraftPatch::name("prod-eu")).unwrap();
        let d = s.get("cls-42").unwrap();
        assert_eq!(d.cluster_name, "prod-eu");
        assert_eq!(d.crane_url, "http://crane.example.com");
    }

    #[test]
    fn stale_ids_report_not_found() {
        let mut s = EditSession::closed();
        s.open_create();
        assert_eq!(
            s.update_draft("ghost", DraftPatch::name("x")),
            Err(SessionError::DraftNotFound("ghost".into()))
        );
        assert_eq!(
            s.set_focused("ghost"),
            Err(SessionError::DraftNotFound("ghost".into()))
        );
    }

    #[test]
    fn close_resets_to_blank() {
        let mut s = EditSession::closed();
        s.open_create();
        s.add_draft();
        s.close();
        assert_eq!(s, EditSession::closed());
    }

    #[test]
    fn ids_are_distinct_across_adds() {
        let mut s = EditSession::closed();
        s.open_create();
        s.add_draft();
        s.add_draft();
        let mut ids: Vec<_> = s.drafts().iter().map(|d| d.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
