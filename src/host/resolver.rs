//! Dependency resolver contract

use async_trait::async_trait;
use thiserror::Error;

use crate::script::{RefinedConfiguration, ScriptRequest};

/// Errors a resolver may report for one request.
///
/// Classification of failures is the resolver's business, not this crate's;
/// the variants carry opaque host-provided messages. Inside a batch a
/// failure is logged and the worker moves on to the next request; on the
/// inline path it propagates to the caller.
#[derive(Error, Debug, Clone)]
pub enum ResolveError {
    /// Resolution ran and reported a failure for this script.
    #[error("resolution failed: {0}")]
    Failed(String),

    /// The resolver could not run at all (missing toolchain, dead daemon).
    #[error("resolver unavailable: {0}")]
    Unavailable(String),
}

/// Computes the refined dependency configuration for one script.
///
/// `resolve` may be arbitrarily slow; the coordination core only ever calls
/// it from a background worker (or inline, when the resolver declares itself
/// synchronous via [`is_async`](ConfigurationResolver::is_async)).
#[async_trait]
pub trait ConfigurationResolver: Send + Sync {
    /// Whether this resolver performs asynchronous resolution.
    ///
    /// Drives dispatch: asynchronous resolvers are routed through the
    /// batching coordinator, synchronous ones run on the caller's task.
    fn is_async(&self) -> bool;

    /// Resolve the configuration for `request`.
    async fn resolve(&self, request: &ScriptRequest)
        -> Result<RefinedConfiguration, ResolveError>;
}
