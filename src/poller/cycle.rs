//! # Poller: the long-poll cycle driver.
//!
//! [`Poller`] drives an indefinite loop against one task-source operation:
//!
//! ```text
//! loop {
//!   ├─► cancelled? ─► exit
//!   ├─► fetch(selector, seed request)        (cancellable long poll)
//!   │       ├─ transport error ─► publish Error, next cycle
//!   │       ├─ no task token   ─► idle long poll, next cycle
//!   │       └─ task page       ─► source.on_response(page)
//!   │                                ├─ Ok  ─► source published its outcome
//!   │                                └─ Err ─► publish Error
//!   └─► repeat
//! }
//! ```
//!
//! ## Rules
//! - Exactly **one** outbound call is pending at any time per instance; a
//!   cycle's pagination chain resolves to a terminal state before the next
//!   cycle begins.
//! - Cycle-level errors are observable (published to the bus) and non-fatal:
//!   the loop resumes on its normal cadence.
//! - Cancellation is honored between cycles and during the seed long poll;
//!   an in-flight chain finishes first.

use tokio_util::sync::CancellationToken;

use crate::client::ServiceRef;
use crate::config::PollConfig;
use crate::error::{ConfigError, PollError};
use crate::events::{Bus, PollEvent};
use crate::policies::RetryPolicy;
use crate::poller::{Decider, SourceRef};

/// Long-poll loop over one task-source operation.
pub struct Poller {
    config: PollConfig,
    client: ServiceRef,
    source: SourceRef,
    bus: Bus,
}

impl std::fmt::Debug for Poller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poller")
            .field("config", &self.config)
            .field("client", &"<dyn WorkflowService>")
            .field("source", &"<dyn TaskSource>")
            .field("bus", &self.bus)
            .finish()
    }
}

impl Poller {
    /// Creates a poller over an explicit task source; fails fast on an
    /// invalid configuration.
    pub fn new(
        config: PollConfig,
        client: ServiceRef,
        source: SourceRef,
        bus: Bus,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            client,
            source,
            bus,
        })
    }

    /// Creates a poller wired to a [`Decider`] for decision tasks, with the
    /// default page-fetch retry policy.
    pub fn for_decisions(
        config: PollConfig,
        client: ServiceRef,
        bus: Bus,
    ) -> Result<Self, ConfigError> {
        let decider = Decider::new(
            config.clone(),
            client.clone(),
            bus.clone(),
            RetryPolicy::page_fetch(),
        )?;
        Self::new(config, client, std::sync::Arc::new(decider), bus)
    }

    /// The bus this poller publishes to.
    ///
    /// Subscribe **before** calling [`run`](Poller::run); receivers only
    /// observe events published after they subscribe.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Drives the long-poll loop until the token is cancelled.
    ///
    /// Never returns an error: every failure becomes an `Error` event and
    /// the loop continues.
    pub async fn run(&self, token: CancellationToken) {
        let selector = self.source.selector().to_string();
        loop {
            if token.is_cancelled() {
                break;
            }

            let request = self.config.seed_request();
            tracing::debug!(
                selector = %selector,
                domain = %self.config.domain,
                task_list = %self.config.task_list,
                "issuing long poll"
            );

            let fetched = tokio::select! {
                res = self.client.fetch_task(&selector, &request) => res,
                _ = token.cancelled() => break,
            };

            match fetched {
                Ok(page) if !page.has_task() => {
                    tracing::debug!(selector = %selector, "long poll returned no work");
                }
                Ok(page) => {
                    if let Err(err) = self.source.on_response(page).await {
                        tracing::warn!(error = %err, "pagination chain abandoned");
                        self.bus.publish(PollEvent::error(err));
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "poll cycle failed");
                    self.bus.publish(PollEvent::error(PollError::Fetch(err)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::MockService;
    use crate::client::{HistoryEvent, TaskPage};
    use crate::error::TransportError;
    use crate::events::PollEventKind;
    use std::sync::Arc;

    fn task_page(ids: &[i64]) -> TaskPage {
        TaskPage {
            task_token: Some("tok-1".into()),
            events: ids.iter().map(|id| HistoryEvent::new(*id, "e")).collect(),
            ..TaskPage::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let service = Arc::new(MockService::new());
        let err = Poller::for_decisions(
            PollConfig::new("orders", ""),
            service as ServiceRef,
            Bus::default(),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyTaskList);
    }

    #[tokio::test]
    async fn test_loop_survives_seed_errors_and_keeps_polling() {
        let service = Arc::new(MockService::new());
        service.push_fetch_err(TransportError::connection("refused"));
        service.push_page(TaskPage::default()); // idle long poll
        service.push_page(task_page(&[1, 2]));

        let bus = Bus::default();
        let poller = Poller::for_decisions(
            PollConfig::new("orders", "order-deciders"),
            Arc::clone(&service) as ServiceRef,
            bus.clone(),
        )
        .unwrap();
        let mut rx = bus.subscribe();

        let token = CancellationToken::new();
        let handle = tokio::spawn({
            let token = token.clone();
            async move { poller.run(token).await }
        });

        // First observable event: the surfaced seed-fetch error.
        let first = rx.recv().await.unwrap();
        assert!(matches!(
            first.kind,
            PollEventKind::Error(PollError::Fetch(_))
        ));

        // The idle poll produces nothing; the next event is the task.
        let second = rx.recv().await.unwrap();
        let task = second.task().expect("expected TaskReady after idle poll");
        assert_eq!(task.events().len(), 2);

        token.cancel();
        handle.await.unwrap();
        assert_eq!(service.fetch_count(), 3);
    }

    #[tokio::test]
    async fn test_chain_abandonment_surfaces_as_error_event() {
        let service = Arc::new(MockService::new());
        // Seed with a continuation token, then five failed page fetches.
        let mut seed = task_page(&[1]);
        seed.next_page_token = Some("T1".into());
        service.push_page(seed);
        for _ in 0..5 {
            service.push_fetch_err(TransportError::connection("down"));
        }

        let bus = Bus::default();
        let decider = Decider::new(
            PollConfig::new("orders", "order-deciders"),
            Arc::clone(&service) as ServiceRef,
            bus.clone(),
            // Zero-delay retries keep the test clock-free.
            RetryPolicy::new(5, std::time::Duration::ZERO),
        )
        .unwrap();
        let poller = Poller::new(
            PollConfig::new("orders", "order-deciders"),
            Arc::clone(&service) as ServiceRef,
            Arc::new(decider),
            bus.clone(),
        )
        .unwrap();
        let mut rx = bus.subscribe();

        let token = CancellationToken::new();
        let handle = tokio::spawn({
            let token = token.clone();
            async move { poller.run(token).await }
        });

        let ev = rx.recv().await.unwrap();
        assert!(matches!(
            ev.kind,
            PollEventKind::Error(PollError::PageRetriesExhausted { attempts: 5, .. })
        ));

        token.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_cancellation_interrupts_idle_long_poll() {
        let service = Arc::new(MockService::new());
        // Empty script: fetch_task pends forever, like a held long poll.
        let bus = Bus::default();
        let poller = Poller::for_decisions(
            PollConfig::new("orders", "order-deciders"),
            service as ServiceRef,
            bus,
        )
        .unwrap();

        let token = CancellationToken::new();
        let handle = tokio::spawn({
            let token = token.clone();
            async move { poller.run(token).await }
        });

        token.cancel();
        handle.await.unwrap();
    }
}
