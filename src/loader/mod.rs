//! The coordination core
//!
//! This module batches concurrent refresh requests into a single in-flight
//! unit of work. [`ConfigurationLoader`] is the dispatch entry point: it
//! routes each request either to an inline resolution on the caller's task
//! or to the [`RefreshCoordinator`], which maintains at most one active
//! batch at a time. The batch drains its queue FIFO on a background tokio
//! worker inside a store transaction, and escalates from silent to visible
//! execution once its backlog exceeds [`ESCALATION_THRESHOLD`] pending
//! requests.

pub mod batch;
pub mod coordinator;
pub mod dispatch;
pub mod queue;

pub use batch::{ExecutionMode, ESCALATION_THRESHOLD};
pub use coordinator::{CoordinatorStatus, RefreshCoordinator};
pub use dispatch::ConfigurationLoader;
