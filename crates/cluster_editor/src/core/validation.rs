//! Pure field validators and the per-draft verdict map.
//!
//! The validators take a draft and return a [`Verdict`]; they never touch
//! state. The caller (reducer on submit, blur handler per field) writes the
//! result into [`ValidationState`], which is derived data keyed by draft id.
//! It is recomputed on blur and on submit and is never the source of truth
//! for draft content.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::session::ClusterDraft;

/// The two validated input fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftField {
    ClusterName,
    CraneUrl,
}

/// Pass/fail result for one field of one draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub failed: bool,
    pub message: String,
}

impl Verdict {
    pub fn pass() -> Self {
        Self::default()
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            failed: true,
            message: message.into(),
        }
    }
}

/// Verdicts for every validated field of a single draft. Both fields are
/// always computed and shown independently; only tab focus singles out the
/// first offending draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftVerdicts {
    pub cluster_name: Verdict,
    pub crane_url: Verdict,
}

impl DraftVerdicts {
    pub fn any_failed(&self) -> bool {
        self.cluster_name.failed || self.crane_url.failed
    }
}

/// Validation results keyed by draft id.
pub type ValidationState = HashMap<String, DraftVerdicts>;

/// The cluster name must carry at least one non-whitespace character.
pub fn validate_name(draft: &ClusterDraft) -> Verdict {
    if draft.cluster_name.trim().is_empty() {
        Verdict::fail("cluster name must not be empty.")
    } else {
        Verdict::pass()
    }
}

/// Ordered checks on the Crane endpoint URL; the first failure wins.
///
/// The trailing-slash check exists because the cost insight pages build
/// dashboard links by appending paths to this URL.
pub fn validate_crane_url(draft: &ClusterDraft) -> Verdict {
    let url = &draft.crane_url;
    if url.is_empty() {
        Verdict::fail("URL must not be empty")
    } else if !url.starts_with("http://") && !url.starts_with("https://") {
        Verdict::fail("malformed URL, must start with http(s)://")
    } else if url.ends_with('/') {
        Verdict::fail("trailing slash must be removed — it breaks downstream dashboard links")
    } else {
        Verdict::pass()
    }
}

/// Run both validators over one draft.
pub fn validate_draft(draft: &ClusterDraft) -> DraftVerdicts {
    DraftVerdicts {
        cluster_name: validate_name(draft),
        crane_url: validate_crane_url(draft),
    }
}
