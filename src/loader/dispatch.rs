//! Dispatch entry point

use std::sync::Arc;

use tracing::debug;

use crate::host::{
    ConfigurationResolver, ConfigurationSink, LoaderSettings, ProgressIndicator, TransactionSink,
};
use crate::script::ScriptRequest;
use crate::Result;

use super::coordinator::RefreshCoordinator;

/// Routes refresh requests to inline or batched execution.
///
/// Asynchronous resolvers (per [`ConfigurationResolver::is_async`]) go
/// through the batching coordinator; synchronous ones resolve and save on
/// the caller's task, without a transaction bracket.
pub struct ConfigurationLoader {
    resolver: Arc<dyn ConfigurationResolver>,
    sink: Arc<dyn ConfigurationSink>,
    coordinator: RefreshCoordinator,
}

impl ConfigurationLoader {
    /// Create a loader over the host's collaborators.
    pub fn new(
        resolver: Arc<dyn ConfigurationResolver>,
        sink: Arc<dyn ConfigurationSink>,
        transaction: Arc<dyn TransactionSink>,
        indicator: Arc<dyn ProgressIndicator>,
        settings: LoaderSettings,
    ) -> Self {
        let coordinator = RefreshCoordinator::new(
            Arc::clone(&resolver),
            Arc::clone(&sink),
            transaction,
            indicator,
            settings,
        );
        Self {
            resolver,
            sink,
            coordinator,
        }
    }

    /// The coordinator backing the asynchronous route.
    pub fn coordinator(&self) -> &RefreshCoordinator {
        &self.coordinator
    }

    /// Refresh the dependency configuration for `request`.
    ///
    /// Returns immediately after enqueueing on the asynchronous route; on
    /// the inline route it completes the update before returning and
    /// surfaces resolver failures to the caller.
    pub async fn load_dependencies(&self, request: ScriptRequest) -> Result<()> {
        if self.resolver.is_async() {
            self.coordinator.schedule(request);
            Ok(())
        } else {
            self.run_update(request).await
        }
    }

    async fn run_update(&self, request: ScriptRequest) -> Result<()> {
        debug!(script = %request.path().display(), "start dependencies loading");
        let configuration = self.resolver.resolve(&request).await?;
        debug!(script = %request.path().display(), "finish dependencies loading");
        self.sink.save(&request, configuration).await;
        Ok(())
    }
}
