//! Contracts for the external collaborators
//!
//! The coordination core is purely an in-process layer: it owns no
//! resolution algorithm, no storage format, and no UI. Everything it needs
//! from the host arrives through the traits in this module — the resolver
//! that computes a configuration for one script, the sink and transaction
//! bracket of the configuration store, the cancellation indicator shown to
//! the user during visible execution, and the policy settings.

pub mod progress;
pub mod resolver;
pub mod settings;
pub mod sink;

pub use progress::{CancelFlag, ProgressIndicator, SilentIndicator};
pub use resolver::{ConfigurationResolver, ResolveError};
pub use settings::LoaderSettings;
pub use sink::{ConfigurationSink, TransactionSink};
