//! Configuration store contracts

use async_trait::async_trait;

use crate::script::{RefinedConfiguration, ScriptRequest};

/// Receives one resolved configuration per successfully processed request.
///
/// Writes arrive strictly sequentially from the single active batch worker,
/// so implementations need no additional locking against this crate.
#[async_trait]
pub trait ConfigurationSink: Send + Sync {
    /// Persist `configuration` as the current configuration for the script
    /// named by `request`.
    async fn save(&self, request: &ScriptRequest, configuration: RefinedConfiguration);
}

/// Begin/commit bracket the store uses to suppress intermediate
/// observability of batched writes.
///
/// Called exactly once each per batch: `begin` when the batch is created,
/// `commit` when it closes (drained or canceled). All `save` calls of the
/// batch happen between the two.
pub trait TransactionSink: Send + Sync {
    /// A batch is starting; subsequent saves belong to it.
    fn begin(&self);

    /// The batch closed; publish its writes.
    fn commit(&self);
}
