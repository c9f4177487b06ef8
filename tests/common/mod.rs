//! Shared fake collaborators for the integration tests
//!
//! The resolver can be gated on a semaphore so a test controls exactly when
//! each resolution completes; the sink records every save in order; the
//! transaction counts its begin/commit calls.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Semaphore;

use scriptload::host::{
    ConfigurationResolver, ConfigurationSink, ResolveError, TransactionSink,
};
use scriptload::script::{RefinedConfiguration, RequestId, ScriptRequest};

/// Initialize tracing once per test binary; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Poll `condition` until it holds, panicking after five seconds.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..500 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not met within 5s");
}

/// A resolver whose completions the test controls.
///
/// When gated, each `resolve` consumes one semaphore permit; the test
/// releases permits with `Semaphore::add_permits`. Paths containing the
/// configured substring fail instead of resolving.
pub struct TestResolver {
    gate: Option<Arc<Semaphore>>,
    asynchronous: bool,
    fail_substring: Option<String>,
    started: AtomicUsize,
}

impl TestResolver {
    /// Asynchronous resolver blocked on `gate` (create it with 0 permits).
    pub fn gated(gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            asynchronous: true,
            fail_substring: None,
            started: AtomicUsize::new(0),
        }
    }

    /// Asynchronous resolver that completes immediately.
    pub fn instant() -> Self {
        Self {
            gate: None,
            asynchronous: true,
            fail_substring: None,
            started: AtomicUsize::new(0),
        }
    }

    /// Synchronous resolver that completes immediately.
    pub fn synchronous() -> Self {
        Self {
            asynchronous: false,
            ..Self::instant()
        }
    }

    /// Fail any request whose path contains `substring`.
    pub fn failing_on(mut self, substring: &str) -> Self {
        self.fail_substring = Some(substring.to_string());
        self
    }

    /// How many resolutions have started (including failed ones).
    pub fn started(&self) -> usize {
        self.started.load(Ordering::Acquire)
    }
}

#[async_trait]
impl ConfigurationResolver for TestResolver {
    fn is_async(&self) -> bool {
        self.asynchronous
    }

    async fn resolve(
        &self,
        request: &ScriptRequest,
    ) -> Result<RefinedConfiguration, ResolveError> {
        self.started.fetch_add(1, Ordering::AcqRel);
        if let Some(gate) = &self.gate {
            let permit = gate.acquire().await.expect("gate closed");
            permit.forget();
        }
        if let Some(substring) = &self.fail_substring {
            if request.path().to_string_lossy().contains(substring.as_str()) {
                return Err(ResolveError::Failed(format!(
                    "no configuration for {}",
                    request.path().display()
                )));
            }
        }
        Ok(RefinedConfiguration::with_classpath([request
            .path()
            .with_extension("jar")]))
    }
}

/// Records every save, in call order.
#[derive(Default)]
pub struct RecordingSink {
    saves: Mutex<Vec<(RequestId, PathBuf)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved_ids(&self) -> Vec<RequestId> {
        self.saves.lock().iter().map(|(id, _)| *id).collect()
    }

    pub fn saved_paths(&self) -> Vec<PathBuf> {
        self.saves.lock().iter().map(|(_, path)| path.clone()).collect()
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().len()
    }
}

#[async_trait]
impl ConfigurationSink for RecordingSink {
    async fn save(&self, request: &ScriptRequest, _configuration: RefinedConfiguration) {
        self.saves
            .lock()
            .push((request.id(), request.path().to_path_buf()));
    }
}

/// Counts transaction brackets.
#[derive(Default)]
pub struct CountingTransaction {
    begins: AtomicUsize,
    commits: AtomicUsize,
}

impl CountingTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begins(&self) -> usize {
        self.begins.load(Ordering::Acquire)
    }

    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::Acquire)
    }
}

impl TransactionSink for CountingTransaction {
    fn begin(&self) {
        self.begins.fetch_add(1, Ordering::AcqRel);
    }

    fn commit(&self) {
        self.commits.fetch_add(1, Ordering::AcqRel);
    }
}
