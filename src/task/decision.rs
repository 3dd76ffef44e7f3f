//! # Assembled decision task.
//!
//! [`DecisionTask`] is the terminal artifact of a successful pagination
//! chain: the seed response's task metadata, the finalized event sequence
//! stitched across all pages, and a shared handle to the service the task
//! came from (so the consumer can respond without re-wiring a client).
//!
//! ## Rules
//! - Constructed exactly once per successful chain, then handed to the
//!   consumer via a `TaskReady` event; the core keeps no reference.
//! - `events()` is the complete history in page order. The first page's
//!   slice embedded in the seed metadata is superseded by it.

use std::fmt;

use crate::client::{HistoryEvent, ServiceRef, TaskPage, WorkflowExecution, WorkflowType};

/// A complete decision task: seed metadata plus full event history.
#[derive(Clone)]
pub struct DecisionTask {
    seed: TaskPage,
    events: Vec<HistoryEvent>,
    client: ServiceRef,
}

impl DecisionTask {
    /// Builds the task from a chain's seed page and finalized history.
    pub(crate) fn assemble(seed: TaskPage, client: ServiceRef, events: Vec<HistoryEvent>) -> Self {
        Self {
            seed,
            events,
            client,
        }
    }

    /// Opaque token identifying this task towards the service.
    pub fn task_token(&self) -> Option<&str> {
        self.seed.task_token.as_deref()
    }

    /// Workflow run this task belongs to.
    pub fn workflow_execution(&self) -> Option<&WorkflowExecution> {
        self.seed.workflow_execution.as_ref()
    }

    /// Workflow type of the run.
    pub fn workflow_type(&self) -> Option<&WorkflowType> {
        self.seed.workflow_type.as_ref()
    }

    /// Event id at which this task started.
    pub fn started_event_id(&self) -> Option<i64> {
        self.seed.started_event_id
    }

    /// Event id at which the previous task for this run started.
    pub fn previous_started_event_id(&self) -> Option<i64> {
        self.seed.previous_started_event_id
    }

    /// The complete event history, in page order.
    pub fn events(&self) -> &[HistoryEvent] {
        &self.events
    }

    /// Handle to the service this task was fetched from.
    pub fn client(&self) -> &ServiceRef {
        &self.client
    }
}

impl fmt::Debug for DecisionTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionTask")
            .field("task_token", &self.seed.task_token)
            .field("workflow_execution", &self.seed.workflow_execution)
            .field("workflow_type", &self.seed.workflow_type)
            .field("events", &self.events.len())
            .finish_non_exhaustive()
    }
}
