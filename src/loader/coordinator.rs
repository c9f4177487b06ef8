//! Per-owner batching coordinator
//!
//! Holds at most one active batch behind a single mutex. `schedule` and the
//! batch close paths are linearized by that lock; it is held only for O(1)
//! state mutation, never across a resolver call.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info};

use crate::host::{
    ConfigurationResolver, ConfigurationSink, LoaderSettings, ProgressIndicator, TransactionSink,
};
use crate::script::ScriptRequest;

use super::batch::{Batch, ExecutionMode};

/// Collaborators and the active-batch slot, shared between the coordinator
/// handle and its batch workers.
pub(crate) struct Shared {
    resolver: Arc<dyn ConfigurationResolver>,
    sink: Arc<dyn ConfigurationSink>,
    transaction: Arc<dyn TransactionSink>,
    indicator: Arc<dyn ProgressIndicator>,
    settings: LoaderSettings,
    active: Mutex<Option<Arc<Batch>>>,
}

impl Shared {
    pub(crate) fn resolver(&self) -> &Arc<dyn ConfigurationResolver> {
        &self.resolver
    }

    pub(crate) fn sink(&self) -> &Arc<dyn ConfigurationSink> {
        &self.sink
    }

    pub(crate) fn indicator(&self) -> Arc<dyn ProgressIndicator> {
        Arc::clone(&self.indicator)
    }

    /// Drain-close: succeeds only if the queue is still empty under the
    /// coordinator lock, so a request racing in via `schedule` is never
    /// stranded in a closed batch.
    pub(crate) fn try_close_batch(&self, batch: &Arc<Batch>) -> bool {
        let mut active = self.active.lock();
        if !batch.queue_is_empty() {
            return false;
        }
        if active
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, batch))
        {
            *active = None;
        }
        if batch.mark_closed() {
            self.transaction.commit();
            debug!("batch drained, transaction committed");
        }
        true
    }

    /// Cancel-close: unconditional. Whatever is still queued is abandoned
    /// for this batch; already-saved results stay saved and are committed.
    pub(crate) fn cancel_batch(&self, batch: &Arc<Batch>) {
        let mut active = self.active.lock();
        if active
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, batch))
        {
            *active = None;
        }
        if batch.mark_closed() {
            self.transaction.commit();
            info!(
                abandoned = batch.pending(),
                "batch canceled, transaction committed with partial results"
            );
        }
    }
}

/// Observability snapshot of the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoordinatorStatus {
    /// Whether a batch is currently open.
    pub batch_active: bool,
    /// Not-yet-processed requests in the active batch, zero when idle.
    pub pending_requests: usize,
    /// Execution mode of the active batch, `None` when idle.
    pub mode: Option<ExecutionMode>,
}

/// Per-owner singleton serializing batch creation and termination.
///
/// Scheduling never blocks the caller beyond a short lock hold; the slow
/// resolver and sink calls run only on the batch's background worker.
/// Workers are spawned on the ambient tokio runtime, so
/// [`RefreshCoordinator::schedule`] must be called from within one.
pub struct RefreshCoordinator {
    shared: Arc<Shared>,
}

impl RefreshCoordinator {
    /// Create a coordinator over the host's collaborators. `indicator` is
    /// the cancellation signal polled during visible execution.
    pub fn new(
        resolver: Arc<dyn ConfigurationResolver>,
        sink: Arc<dyn ConfigurationSink>,
        transaction: Arc<dyn TransactionSink>,
        indicator: Arc<dyn ProgressIndicator>,
        settings: LoaderSettings,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                resolver,
                sink,
                transaction,
                indicator,
                settings,
                active: Mutex::new(None),
            }),
        }
    }

    /// Route `request` into the active batch, creating one if none is open.
    ///
    /// Creating a batch begins the store transaction, picks the initial
    /// mode from the auto-reload policy, and starts the background worker.
    pub fn schedule(&self, request: ScriptRequest) {
        let mut active = self.shared.active.lock();
        if let Some(batch) = active.as_ref() {
            batch.enqueue(request);
            return;
        }

        self.shared.transaction.begin();
        let mode = if self.shared.settings.auto_reload_enabled {
            ExecutionMode::Visible
        } else {
            ExecutionMode::Silent
        };
        let batch = Batch::new(Arc::downgrade(&self.shared), mode);
        batch.enqueue(request);
        *active = Some(Arc::clone(&batch));
        batch.spawn_worker();
        debug!(?mode, "new batch started, transaction begun");
    }

    /// Snapshot the coordinator state for diagnostics and tests.
    pub fn status(&self) -> CoordinatorStatus {
        let active = self.shared.active.lock();
        match active.as_ref() {
            Some(batch) => CoordinatorStatus {
                batch_active: true,
                pending_requests: batch.pending(),
                mode: Some(batch.mode()),
            },
            None => CoordinatorStatus {
                batch_active: false,
                pending_requests: 0,
                mode: None,
            },
        }
    }
}
