//! Cancellation indicators

use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation signal polled by the batch worker.
///
/// Polled once per loop iteration, and only while the batch runs in visible
/// mode; silent execution uses [`SilentIndicator`] and cannot be canceled
/// from outside.
pub trait ProgressIndicator: Send + Sync {
    /// Whether the user has asked to abort the visible operation.
    fn is_canceled(&self) -> bool;
}

/// The silent-mode indicator: never canceled.
#[derive(Debug, Default)]
pub struct SilentIndicator;

impl ProgressIndicator for SilentIndicator {
    fn is_canceled(&self) -> bool {
        false
    }
}

/// A host- or test-controlled indicator backed by an atomic flag.
#[derive(Debug, Default)]
pub struct CancelFlag {
    canceled: AtomicBool,
}

impl CancelFlag {
    /// Create an indicator in the not-canceled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the flag. Irreversible for the lifetime of the value.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Release);
    }
}

impl ProgressIndicator for CancelFlag {
    fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Acquire)
    }
}
