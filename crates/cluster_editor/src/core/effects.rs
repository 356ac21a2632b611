//! Declarative side-effect model emitted by the reducer.
//!
//! The reducer stays pure: instead of calling the backend it returns
//! [`Effect`] values describing what should happen. The
//! [`TaskExecutor`](crate::core::executor::TaskExecutor) interprets
//! `Effect::Async(TaskKind)` by driving the gateway and feeds the terminal
//! [`TaskResultKind`] back into the reducer as an action.

use std::fmt;

use cluster_api::{CreateClustersRequest, UpdateClusterRequest};
use serde::{Deserialize, Serialize};

/// Instruction emitted by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Explicit "no effect" marker (easy to filter).
    None,
    /// Schedule exactly one asynchronous gateway call.
    Async(TaskKind),
    /// Lightweight side-effect: log a message at info level.
    Log(String),
}

impl Effect {
    pub fn log<T: Into<String>>(msg: T) -> Self {
        Effect::Log(msg.into())
    }

    pub fn async_task(kind: TaskKind) -> Self {
        Effect::Async(kind)
    }

    pub fn none() -> Self {
        Effect::None
    }
}

/// One asynchronous backend call, with all inputs captured so the executor
/// needs no additional context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Batch creation of new clusters (tab order preserved).
    CreateClusters(CreateClustersRequest),
    /// Update of the single existing cluster record.
    UpdateCluster(UpdateClusterRequest),
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::CreateClusters(req) => write!(f, "CreateClusters(n={})", req.clusters.len()),
            TaskKind::UpdateCluster(req) => write!(f, "UpdateCluster(id={})", req.id),
        }
    }
}

/// Terminal outcome of a gateway call, fed back as `Action::TaskFinished`.
///
/// Pending/success/error are modeled explicitly so that a stale completion
/// (arriving after the session closed) is representable and testable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskResultKind {
    CreateDone,
    CreateFailed { error: String },
    UpdateDone,
    UpdateFailed { error: String },
}

impl TaskResultKind {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskResultKind::CreateDone | TaskResultKind::UpdateDone)
    }

    /// Error message for failed outcomes.
    pub fn error(&self) -> Option<&str> {
        match self {
            TaskResultKind::CreateFailed { error } | TaskResultKind::UpdateFailed { error } => {
                Some(error)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cluster_api::ClusterSpec;

    #[test]
    fn task_kind_display_is_compact() {
        let create = TaskKind::CreateClusters(CreateClustersRequest {
            clusters: vec![ClusterSpec {
                name: "a".into(),
                crane_url: "http://a".into(),
            }],
        });
        assert_eq!(create.to_string(), "CreateClusters(n=1)");

        let update = TaskKind::UpdateCluster(UpdateClusterRequest {
            id: "cls-1".into(),
            name: "a".into(),
            crane_url: "http://a".into(),
        });
        assert_eq!(update.to_string(), "UpdateCluster(id=cls-1)");
    }

    #[test]
    fn result_kind_classifies_outcomes() {
        assert!(TaskResultKind::CreateDone.is_success());
        assert!(TaskResultKind::UpdateDone.is_success());
        let failed = TaskResultKind::UpdateFailed {
            error: "boom".into(),
        };
        assert!(!failed.is_success());
        assert_eq!(failed.error(), Some("boom"));
    }
}
