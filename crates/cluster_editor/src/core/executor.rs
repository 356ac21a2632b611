//! Task executor: interprets `Effect::Async` by driving the cluster gateway
//! on a background tokio task and feeding lifecycle actions back into the
//! application loop.
//!
//! Guarantees:
//! - Exactly one gateway call per scheduled task; no retries.
//! - No cancellation: once issued, the call runs to its terminal outcome and
//!   the outcome is delivered as `Action::TaskFinished`. Whether that
//!   outcome still matters is the reducer's decision (it drops completions
//!   for closed sessions).
//! - All gateway work happens off the caller's thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;
use tracing::{info, warn};

use cluster_api::ClusterGateway;

use crate::action::Action;
use crate::core::effects::{Effect, TaskKind, TaskResultKind};

/// Monotonic task identifier, used to correlate lifecycle actions.
pub type TaskId = u64;

/// Handle for scheduling gateway calls.
///
/// Cloneable & cheap: internally only wraps an `mpsc::UnboundedSender`.
#[derive(Clone)]
pub struct TaskExecutor {
    tx: mpsc::UnboundedSender<Dispatch>,
}

/// Internal dispatch envelope.
struct Dispatch {
    id: TaskId,
    kind: TaskKind,
}

impl TaskExecutor {
    /// Create the executor and spawn its worker loop against the given
    /// gateway. Lifecycle actions (`TaskStarted`, `TaskFinished`) are emitted
    /// on `action_tx`.
    pub fn new<G>(gateway: Arc<G>, action_tx: mpsc::UnboundedSender<Action>) -> Self
    where
        G: ClusterGateway,
    {
        let (tx, rx) = mpsc::unbounded_channel::<Dispatch>();
        Worker {
            rx,
            gateway,
            action_tx,
        }
        .spawn();
        Self { tx }
    }

    /// Schedule one gateway call. Returns the allocated id.
    pub fn spawn(&self, kind: TaskKind) -> TaskId {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        if let Err(e) = self.tx.send(Dispatch { id, kind }) {
            warn!("task executor channel closed; dropping task: {e}");
        }
        id
    }

    /// Route a reducer effect list into the executor / the log.
    pub fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Async(kind) => {
                    self.spawn(kind);
                }
                Effect::Log(msg) => info!("{msg}"),
                Effect::None => {}
            }
        }
    }
}

/// Background worker driving gateway calls one at a time.
struct Worker<G> {
    rx: mpsc::UnboundedReceiver<Dispatch>,
    gateway: Arc<G>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl<G: ClusterGateway> Worker<G> {
    fn emit(&self, action: Action) {
        // The app loop may already be gone during shutdown; nothing to do then.
        let _ = self.action_tx.send(action);
    }

    fn spawn(mut self) {
        tokio::spawn(async move {
            while let Some(dispatch) = self.rx.recv().await {
                self.handle(dispatch).await;
            }
            info!("task executor worker stopped (channel closed)");
        });
    }

    async fn handle(&self, dispatch: Dispatch) {
        let label = dispatch.kind.to_string();
        self.emit(Action::TaskStarted(dispatch.id, label));

        let result = match dispatch.kind {
            TaskKind::CreateClusters(request) => {
                let count = request.clusters.len();
                match self.gateway.create_clusters(request).await {
                    Ok(()) => {
                        info!("[task:{}] created {count} cluster(s)", dispatch.id);
                        TaskResultKind::CreateDone
                    }
                    Err(e) => {
                        warn!("[task:{}] cluster creation failed: {e}", dispatch.id);
                        TaskResultKind::CreateFailed { error: e.message }
                    }
                }
            }
            TaskKind::UpdateCluster(request) => {
                let cluster_id = request.id.clone();
                match self.gateway.update_cluster(request).await {
                    Ok(()) => {
                        info!("[task:{}] cluster {cluster_id} updated", dispatch.id);
                        TaskResultKind::UpdateDone
                    }
                    Err(e) => {
                        warn!("[task:{}] cluster update failed: {e}", dispatch.id);
                        TaskResultKind::UpdateFailed { error: e.message }
                    }
                }
            }
        };

        self.emit(Action::TaskFinished(dispatch.id, result));
    }
}
