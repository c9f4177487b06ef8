//! Data model for dependency refresh work
//!
//! A [`ScriptRequest`] names one script artifact whose external dependency
//! configuration should be refreshed. A [`RefinedConfiguration`] is the
//! opaque result produced by the host's resolver and forwarded, unchanged,
//! to the host's configuration store.

pub mod configuration;
pub mod request;

pub use configuration::RefinedConfiguration;
pub use request::{RequestId, ScriptRequest};
