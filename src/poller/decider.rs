//! # Decider: pagination-stitching task source.
//!
//! [`Decider`] turns a possibly multi-page decision-task response into one
//! complete, ordered task. Downstream decision logic needs the entire event
//! history to act correctly, so no task is emitted until every page has
//! arrived.
//!
//! ## Chain state machine
//! ```text
//! SEED ──► FETCHING_PAGE ──► more pages? ──► FETCHING_PAGE
//!              │                  │
//!              │                  └─ fetch failed ──► RETRY_WAIT ──► FETCHING_PAGE
//!              │                                          │ (budget spent)
//!              ▼                                          ▼
//!           COMPLETE ──► TaskReady published          ABANDONED ──► error surfaced
//! ```
//!
//! ## Rules
//! - Events append strictly in page order; a page is appended **once**, and
//!   only after its fetch succeeded. Retries therefore cannot duplicate or
//!   drop events.
//! - The retry counter is scoped to the chain: it lives inside one
//!   [`on_response`](crate::poller::TaskSource::on_response) call, resets to
//!   zero on every successful fetch, and can never leak into another chain
//!   or instance.
//! - The seed page is retained untouched: the assembled task reports the
//!   seed's metadata even though its events are re-aggregated.
//! - Exactly one `TaskReady` per completed chain; an abandoned chain
//!   produces no task at all.

use async_trait::async_trait;
use tokio::time;

use crate::client::{ServiceRef, TaskPage};
use crate::config::PollConfig;
use crate::error::{ConfigError, PollError};
use crate::events::{Bus, PollEvent};
use crate::policies::RetryPolicy;
use crate::poller::TaskSource;
use crate::task::DecisionTask;

/// Remote operation polled by the decider.
pub const DECISION_TASK_OPERATION: &str = "PollForDecisionTask";

/// Task source that assembles decision tasks from paged histories.
pub struct Decider {
    config: PollConfig,
    client: ServiceRef,
    bus: Bus,
    retry: RetryPolicy,
}

impl std::fmt::Debug for Decider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decider")
            .field("config", &self.config)
            .field("client", &"<dyn WorkflowService>")
            .field("bus", &self.bus)
            .field("retry", &self.retry)
            .finish()
    }
}

impl Decider {
    /// Creates a decider; fails fast on an invalid configuration.
    pub fn new(
        config: PollConfig,
        client: ServiceRef,
        bus: Bus,
        retry: RetryPolicy,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            client,
            bus,
            retry,
        })
    }

    /// Runs one pagination chain to a terminal state.
    ///
    /// Returns the assembled task on COMPLETE, or the abandonment error
    /// after the continuation retry budget is spent. Seed-fetch failures
    /// never reach this point; they are handled at the cycle level.
    async fn collect_history(&self, seed: TaskPage) -> Result<DecisionTask, PollError> {
        let original = seed.clone();
        let mut events = Vec::with_capacity(seed.events.len());
        let mut page = seed;
        let mut failures: u32 = 0;

        loop {
            events.extend(page.events.iter().cloned());

            let Some(token) = page.next_page_token.clone() else {
                // Token-less page: the sequence is final.
                return Ok(DecisionTask::assemble(
                    original,
                    self.client.clone(),
                    events,
                ));
            };

            let request = self.config.continuation(&token);
            page = loop {
                match self
                    .client
                    .fetch_task(DECISION_TASK_OPERATION, &request)
                    .await
                {
                    Ok(next) => {
                        failures = 0;
                        break next;
                    }
                    Err(err) => {
                        failures += 1;
                        if self.retry.is_exhausted(failures) {
                            return Err(PollError::PageRetriesExhausted {
                                attempts: failures,
                                cause: err,
                            });
                        }
                        tracing::debug!(
                            attempt = failures,
                            delay_ms = self.retry.delay.as_millis() as u64,
                            error = %err,
                            "history page fetch failed, retrying"
                        );
                        time::sleep(self.retry.delay).await;
                    }
                }
            };
        }
    }
}

#[async_trait]
impl TaskSource for Decider {
    fn selector(&self) -> &str {
        DECISION_TASK_OPERATION
    }

    async fn on_response(&self, seed: TaskPage) -> Result<(), PollError> {
        let task = self.collect_history(seed).await?;
        tracing::debug!(
            task_token = task.task_token().unwrap_or(""),
            events = task.events().len(),
            "decision task assembled"
        );
        self.bus.publish(PollEvent::task_ready(task));
        Ok(())
    }
}
