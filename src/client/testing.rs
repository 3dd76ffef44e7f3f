//! Scripted [`WorkflowService`] mock shared by the crate's tests.
//!
//! Fetch outcomes are queued up front with [`MockService::push_page`] /
//! [`MockService::push_fetch_err`] and consumed in order; once the script is
//! exhausted, `fetch_task` pends forever, which models an idle long poll and
//! lets loop tests observe events without the mock inventing extra cycles.
//! Responder outcomes default to `Ok(())` unless queued explicitly.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use futures::future;

use crate::client::{PollRequest, TaskPage, WorkflowService};
use crate::error::TransportError;

/// One recorded responder call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RespondCall {
    Completed {
        task_token: String,
        result: String,
    },
    Failed {
        task_token: String,
        reason: Option<String>,
        details: Option<String>,
    },
    Heartbeat {
        task_token: String,
        details: String,
    },
}

#[derive(Default)]
pub(crate) struct MockService {
    fetches: Mutex<VecDeque<Result<TaskPage, TransportError>>>,
    fetch_log: Mutex<Vec<(String, PollRequest)>>,
    respond_outcomes: Mutex<VecDeque<Result<(), TransportError>>>,
    respond_log: Mutex<Vec<RespondCall>>,
}

impl MockService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues a successful fetch outcome.
    pub(crate) fn push_page(&self, page: TaskPage) {
        self.fetches.lock().unwrap().push_back(Ok(page));
    }

    /// Queues a failed fetch outcome.
    pub(crate) fn push_fetch_err(&self, err: TransportError) {
        self.fetches.lock().unwrap().push_back(Err(err));
    }

    /// Queues a responder outcome (defaults to `Ok` when the queue is empty).
    pub(crate) fn push_respond_outcome(&self, outcome: Result<(), TransportError>) {
        self.respond_outcomes.lock().unwrap().push_back(outcome);
    }

    /// Requests observed by `fetch_task`, with their selectors, in call order.
    pub(crate) fn fetch_log(&self) -> Vec<(String, PollRequest)> {
        self.fetch_log.lock().unwrap().clone()
    }

    /// Number of `fetch_task` calls observed so far.
    pub(crate) fn fetch_count(&self) -> usize {
        self.fetch_log.lock().unwrap().len()
    }

    /// Responder calls observed, in call order.
    pub(crate) fn respond_log(&self) -> Vec<RespondCall> {
        self.respond_log.lock().unwrap().clone()
    }

    fn next_respond_outcome(&self) -> Result<(), TransportError> {
        self.respond_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

#[async_trait]
impl WorkflowService for MockService {
    async fn fetch_task(
        &self,
        selector: &str,
        request: &PollRequest,
    ) -> Result<TaskPage, TransportError> {
        let scripted = {
            let mut fetches = self.fetches.lock().unwrap();
            let next = fetches.pop_front();
            if next.is_some() {
                self.fetch_log
                    .lock()
                    .unwrap()
                    .push((selector.to_string(), request.clone()));
            }
            next
        };
        match scripted {
            Some(outcome) => outcome,
            // Script exhausted: behave like an idle long poll that never
            // completes, so run-loop tests can stop the poller themselves.
            None => future::pending().await,
        }
    }

    async fn respond_completed(
        &self,
        task_token: &str,
        result: &str,
    ) -> Result<(), TransportError> {
        self.respond_log.lock().unwrap().push(RespondCall::Completed {
            task_token: task_token.to_string(),
            result: result.to_string(),
        });
        self.next_respond_outcome()
    }

    async fn respond_failed(
        &self,
        task_token: &str,
        reason: Option<&str>,
        details: Option<&str>,
    ) -> Result<(), TransportError> {
        self.respond_log.lock().unwrap().push(RespondCall::Failed {
            task_token: task_token.to_string(),
            reason: reason.map(str::to_string),
            details: details.map(str::to_string),
        });
        self.next_respond_outcome()
    }

    async fn record_heartbeat(
        &self,
        task_token: &str,
        details: &str,
    ) -> Result<(), TransportError> {
        self.respond_log.lock().unwrap().push(RespondCall::Heartbeat {
            task_token: task_token.to_string(),
            details: details.to_string(),
        });
        self.next_respond_outcome()
    }
}
