//! # scriptload
//!
//! Batched background loading of script dependency configurations.
//!
//! Script-like source artifacts depend on external configuration (classpath
//! roots, source roots, implicit imports) whose resolution may be slow and
//! asynchronous. When many artifacts request a refresh at once, running each
//! request independently would start redundant overlapping resolution work
//! and produce inconsistent partial writes to the shared configuration
//! store. This crate provides the coordination layer that batches concurrent
//! refresh requests into a single in-flight unit of work, brackets that unit
//! in a store transaction, drains it on a background worker, and escalates
//! from silent to user-visible execution when the backlog grows.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use scriptload::host::{CancelFlag, LoaderSettings};
//! use scriptload::loader::ConfigurationLoader;
//! use scriptload::script::ScriptRequest;
//! # use scriptload::host::{ConfigurationResolver, ConfigurationSink, TransactionSink};
//! # fn collaborators() -> (
//! #     Arc<dyn ConfigurationResolver>,
//! #     Arc<dyn ConfigurationSink>,
//! #     Arc<dyn TransactionSink>,
//! # ) { unimplemented!() }
//!
//! # async fn example() -> scriptload::Result<()> {
//! let (resolver, sink, transaction) = collaborators();
//! let cancel = Arc::new(CancelFlag::new());
//!
//! let loader = ConfigurationLoader::new(
//!     resolver,
//!     sink,
//!     transaction,
//!     cancel,
//!     LoaderSettings::default(),
//! );
//!
//! // Routed to the background coordinator or resolved inline, depending on
//! // whether the resolver reports itself as asynchronous.
//! loader.load_dependencies(ScriptRequest::new("build.gradle.kts")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`script`]: request identity and resolved-configuration payload
//! - [`host`]: contracts for the external collaborators (resolver, sink,
//!   transaction bracket, cancellation indicator, policy settings)
//! - [`loader`]: the coordination core — dispatch entry point, per-owner
//!   coordinator, and the batching worker

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use thiserror::Error;

/// Result type for scriptload operations
pub type Result<T> = std::result::Result<T, ScriptLoadError>;

/// Main error type for scriptload operations
#[derive(Error, Debug)]
pub enum ScriptLoadError {
    /// A resolver failure surfaced on the inline (synchronous) update path.
    /// Failures inside a background batch are contained there and never
    /// reach this level.
    #[error("Resolve error: {0}")]
    Resolve(#[from] host::ResolveError),

    /// Generic error for unexpected conditions
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Request identity and resolved-configuration payload
pub mod script;

/// External collaborator contracts
pub mod host;

/// Coordination core: dispatch, coordinator, batch worker
pub mod loader;
