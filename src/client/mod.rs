//! Remote service boundary: the client trait and its wire types.
//!
//! The polling core talks to the orchestration service exclusively through
//! this module:
//! - [`WorkflowService`] the async client trait (one method per service
//!   operation), shared as [`ServiceRef`];
//! - [`PollRequest`], [`TaskPage`], [`HistoryEvent`], [`WorkflowExecution`],
//!   [`WorkflowType`] the serde wire types.
//!
//! Concrete implementations (HTTP, gRPC, in-process fakes) live outside the
//! core; the crate ships only a scripted test mock.

mod service;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use service::{ServiceRef, WorkflowService};
pub use types::{HistoryEvent, PollRequest, TaskPage, WorkflowExecution, WorkflowType};
