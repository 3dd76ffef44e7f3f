//! # Remote service handle.
//!
//! [`WorkflowService`] is the boundary between the polling core and the
//! network client that talks to the orchestration service. The core never
//! constructs requests beyond the wire types in
//! [`types`](super::types) and never interprets transport details; it only
//! requires that a fetch for the *same* continuation token can be retried
//! safely.
//!
//! The handle is shared read-only across fetches ([`ServiceRef`]); every
//! call is stateless from the core's point of view.

use async_trait::async_trait;
use std::sync::Arc;

use crate::client::{PollRequest, TaskPage};
use crate::error::TransportError;

/// Shared handle to a [`WorkflowService`] implementation.
pub type ServiceRef = Arc<dyn WorkflowService>;

/// # Client for a remote workflow-orchestration service.
///
/// Implementations perform the actual network calls. Each method maps to one
/// service operation and fails with a [`TransportError`]; all retry logic
/// lives in the callers ([`Poller`](crate::Poller),
/// [`Decider`](crate::Decider), [`ActivityResponder`](crate::ActivityResponder)).
///
/// ### Contract
/// - `fetch_task` may long-poll: the service holds the request open until
///   work is available or a timeout elapses, then answers with a
///   [`TaskPage`] (possibly empty).
/// - `fetch_task` must be idempotent per continuation token so a failed
///   page fetch can be re-issued with the identical request.
/// - Responder operations are single wire calls with no pagination concerns.
#[async_trait]
pub trait WorkflowService: Send + Sync + 'static {
    /// Long-polls one task-source operation.
    ///
    /// `selector` names the remote operation (e.g. `"PollForDecisionTask"`);
    /// the request carries domain, task list and optional continuation token.
    async fn fetch_task(
        &self,
        selector: &str,
        request: &PollRequest,
    ) -> Result<TaskPage, TransportError>;

    /// Reports a unit of work as completed.
    async fn respond_completed(
        &self,
        task_token: &str,
        result: &str,
    ) -> Result<(), TransportError>;

    /// Reports a unit of work as failed.
    async fn respond_failed(
        &self,
        task_token: &str,
        reason: Option<&str>,
        details: Option<&str>,
    ) -> Result<(), TransportError>;

    /// Records a liveness heartbeat for a long-running unit of work.
    async fn record_heartbeat(
        &self,
        task_token: &str,
        details: &str,
    ) -> Result<(), TransportError>;
}
