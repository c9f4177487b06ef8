//! One in-flight unit of batched refresh work
//!
//! A batch owns the pending-request queue, the silent/visible execution
//! mode, and the cooperative `force_stop` flag used to hand the queue over
//! between worker generations during escalation. The batch holds only a
//! weak back-reference to the coordinator's shared state: the coordinator
//! owns the batch, never the reverse.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::host::{ProgressIndicator, SilentIndicator};
use crate::script::ScriptRequest;

use super::coordinator::Shared;
use super::queue::{Enqueued, RequestQueue};

/// Maximum backlog a silent batch tolerates. When the number of pending
/// requests exceeds this, execution escalates to visible mode so the user
/// is informed the operation may take a while and can cancel it.
pub const ESCALATION_THRESHOLD: usize = 3;

/// How a batch executes its queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionMode {
    /// Background processing with no user-visible indicator.
    Silent,
    /// Background processing with a user-visible, cancelable indicator.
    Visible,
}

const STATE_CREATED: u8 = 0;
const STATE_RUNNING: u8 = 1;
const STATE_CLOSED: u8 = 2;

pub(crate) struct Batch {
    queue: RequestQueue,
    mode: Mutex<ExecutionMode>,
    state: AtomicU8,
    force_stop: AtomicBool,
    worker: Mutex<Option<JoinHandle<()>>>,
    shared: Weak<Shared>,
}

impl Batch {
    pub(crate) fn new(shared: Weak<Shared>, mode: ExecutionMode) -> Arc<Self> {
        Arc::new(Self {
            queue: RequestQueue::new(),
            mode: Mutex::new(mode),
            state: AtomicU8::new(STATE_CREATED),
            force_stop: AtomicBool::new(false),
            worker: Mutex::new(None),
            shared,
        })
    }

    pub(crate) fn mode(&self) -> ExecutionMode {
        *self.mode.lock()
    }

    pub(crate) fn pending(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn queue_is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Add `request` to the queue (set semantics by identity). While the
    /// batch is silent, a backlog past the threshold triggers escalation.
    pub(crate) fn enqueue(self: &Arc<Self>, request: ScriptRequest) {
        match self.queue.push(request) {
            Enqueued::Duplicate => {
                debug!("request already pending, skipped");
            }
            Enqueued::Added { pending } => {
                debug!(pending, "request added to update queue");
                if pending > ESCALATION_THRESHOLD {
                    self.escalate();
                }
            }
        }
    }

    /// One-directional Silent -> Visible switch; fires at most once.
    ///
    /// Sets `force_stop` so the running silent worker abandons the queue at
    /// its next iteration, then relaunches a visible worker over the same
    /// queue once the silent one has returned. No queued request is lost
    /// between the two generations.
    fn escalate(self: &Arc<Self>) {
        {
            let mut mode = self.mode.lock();
            if *mode != ExecutionMode::Silent {
                return;
            }
            *mode = ExecutionMode::Visible;
        }
        info!(
            threshold = ESCALATION_THRESHOLD,
            "backlog exceeded threshold, escalating to visible execution"
        );

        self.force_stop.store(true, Ordering::Release);
        let batch = Arc::clone(self);
        tokio::spawn(async move {
            let previous = batch.worker.lock().take();
            if let Some(handle) = previous {
                // The silent worker finishes its in-flight request, observes
                // the flag, and returns without closing the batch.
                let _ = handle.await;
            }
            batch.force_stop.store(false, Ordering::Release);
            batch.spawn_worker();
        });
    }

    /// Launch the worker for the current mode. Silent workers poll an
    /// indicator that never cancels; visible workers poll the host's.
    pub(crate) fn spawn_worker(self: &Arc<Self>) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        let indicator: Arc<dyn ProgressIndicator> = match self.mode() {
            ExecutionMode::Silent => Arc::new(SilentIndicator),
            ExecutionMode::Visible => shared.indicator(),
        };
        self.state.store(STATE_RUNNING, Ordering::Release);
        let batch = Arc::clone(self);
        let handle = tokio::spawn(run_worker(batch, shared, indicator));
        *self.worker.lock() = Some(handle);
    }

    /// Transition to `Closed`. Returns `true` only for the transition that
    /// actually closed the batch, so commit happens exactly once.
    pub(crate) fn mark_closed(&self) -> bool {
        self.state.swap(STATE_CLOSED, Ordering::AcqRel) != STATE_CLOSED
    }
}

/// Worker body: drain the queue FIFO, one request at a time.
///
/// Per-iteration order matters: `force_stop` is observed before the
/// cancel/empty close checks, so when escalation races with the queue
/// draining to empty, exactly one of {close, relaunch} wins.
async fn run_worker(batch: Arc<Batch>, shared: Arc<Shared>, indicator: Arc<dyn ProgressIndicator>) {
    loop {
        if batch.force_stop.load(Ordering::Acquire) {
            // A relaunch in visible mode is imminent and owns the queue now.
            return;
        }
        if indicator.is_canceled() {
            shared.cancel_batch(&batch);
            return;
        }
        let Some(request) = batch.queue.pop() else {
            if shared.try_close_batch(&batch) {
                return;
            }
            // A request raced in between the empty observation and the
            // close decision; keep draining.
            continue;
        };

        debug!(
            script = %request.path().display(),
            id = %request.id(),
            "start dependencies loading"
        );
        match shared.resolver().resolve(&request).await {
            Ok(configuration) => {
                shared.sink().save(&request, configuration).await;
                debug!(
                    script = %request.path().display(),
                    id = %request.id(),
                    "finish dependencies loading"
                );
            }
            Err(error) => {
                // Contained: one request's failure never aborts the batch.
                warn!(
                    script = %request.path().display(),
                    id = %request.id(),
                    %error,
                    "dependencies loading failed, continuing with next request"
                );
            }
        }
    }
}
