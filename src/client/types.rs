//! # Wire types for the workflow service boundary.
//!
//! Request/response shapes exchanged with a remote workflow-orchestration
//! service. All types derive serde with camelCase field names so concrete
//! [`WorkflowService`](super::WorkflowService) implementations can map them
//! directly onto a JSON transport.
//!
//! The central type is [`TaskPage`]: the response to one task fetch. A page
//! may describe a task plus the first slice of its event history, carry a
//! continuation token when more history is available, or be empty (no task
//! token) when a long poll timed out without work.

use serde::{Deserialize, Serialize};

/// One task-fetch request derived from a [`PollConfig`](crate::PollConfig).
///
/// Seed requests carry no continuation token; continuation requests carry
/// the token of the next history page. Values are derived fresh per fetch,
/// so retrying a fetch re-sends an identical request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollRequest {
    /// Remote domain identifier.
    pub domain: String,
    /// Task-list identifier to long-poll.
    pub task_list: String,
    /// Optional caller identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    /// Continuation token of the next history page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Identity of one workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowExecution {
    /// Caller-assigned workflow identifier.
    pub workflow_id: String,
    /// Service-assigned run identifier.
    pub run_id: String,
}

/// Registered workflow type of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowType {
    /// Type name.
    pub name: String,
    /// Optional type version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// One entry of a workflow's event history.
///
/// `attributes` is kept free-form: the polling layer never interprets event
/// payloads, it only guarantees their order and completeness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    /// Monotonic event identifier assigned by the service.
    pub event_id: i64,
    /// Service-defined event type name.
    pub event_type: String,
    /// Wall-clock timestamp (epoch milliseconds), if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_timestamp: Option<i64>,
    /// Free-form event payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Value>,
}

impl HistoryEvent {
    /// Creates a bare event with the given id and type.
    pub fn new(event_id: i64, event_type: impl Into<String>) -> Self {
        Self {
            event_id,
            event_type: event_type.into(),
            event_timestamp: None,
            attributes: None,
        }
    }
}

/// Response to one task fetch.
///
/// ### Shapes
/// - **Empty long poll**: no `task_token`; the cycle produced no work.
/// - **Single-page task**: `task_token` set, no `next_page_token`.
/// - **Paged task**: `task_token` set and `next_page_token` present; the
///   remaining history must be fetched page by page until a token-less page
///   arrives.
///
/// Events are listed in the order the service returned them; the poller
/// preserves that order when stitching pages together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPage {
    /// Opaque token identifying the delivered task; absent on empty polls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_token: Option<String>,
    /// Workflow run the task belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_execution: Option<WorkflowExecution>,
    /// Workflow type of the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_type: Option<WorkflowType>,
    /// Event id at which this task started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_event_id: Option<i64>,
    /// Event id at which the previous task for this run started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_started_event_id: Option<i64>,
    /// History events carried by this page, in service order.
    #[serde(default)]
    pub events: Vec<HistoryEvent>,
    /// Continuation token; present when more history pages are available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl TaskPage {
    /// True when this page delivered a task (long poll did not time out).
    pub fn has_task(&self) -> bool {
        self.task_token.is_some()
    }

    /// True when more history pages must be fetched.
    pub fn has_more_pages(&self) -> bool {
        self.next_page_token.is_some()
    }
}
