//! Pending-request queue
//!
//! A lock-protected FIFO set: concurrent append from any number of
//! schedulers, single-consumer drain from the batch worker. Deduplication
//! is by request identity and applies only to pending entries — once a
//! request has been popped its identity may be enqueued again.

use std::collections::{HashSet, VecDeque};

use parking_lot::Mutex;

use crate::script::{RequestId, ScriptRequest};

/// Outcome of a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Enqueued {
    /// The request was appended; `pending` is the queue length afterwards.
    Added {
        /// Number of not-yet-processed requests, including this one.
        pending: usize,
    },
    /// The identity is already pending; the queue is unchanged.
    Duplicate,
}

#[derive(Default)]
struct QueueInner {
    order: VecDeque<ScriptRequest>,
    pending: HashSet<RequestId>,
}

/// FIFO queue of pending requests with identity-based deduplication.
#[derive(Default)]
pub(crate) struct RequestQueue {
    inner: Mutex<QueueInner>,
}

impl RequestQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `request` unless its identity is already pending.
    pub(crate) fn push(&self, request: ScriptRequest) -> Enqueued {
        let mut inner = self.inner.lock();
        if !inner.pending.insert(request.id()) {
            return Enqueued::Duplicate;
        }
        inner.order.push_back(request);
        Enqueued::Added {
            pending: inner.order.len(),
        }
    }

    /// Remove and return the head request, releasing its identity for
    /// future enqueues.
    pub(crate) fn pop(&self) -> Option<ScriptRequest> {
        let mut inner = self.inner.lock();
        let request = inner.order.pop_front()?;
        inner.pending.remove(&request.id());
        Some(request)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.inner.lock().order.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.lock().order.len()
    }
}
