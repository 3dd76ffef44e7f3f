//! # taskpoll
//!
//! **Taskpoll** is an event-driven long-poll client for workflow decision
//! tasks.
//!
//! It repeatedly asks a remote workflow-orchestration service for work,
//! stitches each task's event history together even when the service spreads
//! it across multiple pages, and pushes fully assembled tasks to application
//! logic through a broadcast bus. Answering the service (complete / fail /
//! heartbeat) is a thin retry-wrapped call with no state of its own.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!             ┌─────────────────────────────────────────────────────┐
//!             │  Poller (long-poll loop, one in-flight cycle)       │
//!             │    └── TaskSource (strategy: which operation,       │
//!             │                    how to interpret a response)     │
//!             └──────────────┬──────────────────────────────────────┘
//!                            ▼
//!             ┌─────────────────────────────────────────────────────┐
//!             │  Decider (pagination chain)                         │
//!             │  - seed page retained as task metadata              │
//!             │  - events appended strictly in page order           │
//!             │  - continuation fetches retried (fixed delay,       │
//!             │    chain-scoped counter, bounded budget)            │
//!             └──────────────┬──────────────────────────────────────┘
//!                            │ TaskReady(DecisionTask) / Error
//!                            ▼
//!             ┌─────────────────────────────────────────────────────┐
//!             │  Bus (broadcast channel)                            │
//!             └──────┬──────────────────────────────┬───────────────┘
//!                    ▼                              ▼
//!           broadcast receivers          SubscriberSet::listen
//!           (bus.subscribe())            (per-subscriber queues,
//!                                         worker tasks, on_event)
//! ```
//!
//! ### One pagination chain
//! ```text
//! SEED ──► FETCHING_PAGE ──► more pages? ──► FETCHING_PAGE
//!              │                  │
//!              │                  └─ fetch failed ──► RETRY_WAIT ──► FETCHING_PAGE
//!              ▼                                          │ (budget spent)
//!           COMPLETE ──► exactly one TaskReady            ▼
//!                                                     ABANDONED ──► exactly one Error
//! ```
//!
//! ## Guarantees
//! - The event sequence a consumer observes is the concatenation, in page
//!   order, of every page's events; no page skipped, duplicated, or
//!   reordered.
//! - A task is never emitted before its history is complete; an abandoned
//!   chain emits no task.
//! - Errors never cross the event boundary as panics or returns: they are
//!   either construction-time [`ConfigError`]s or emitted `Error` events,
//!   and the loop keeps polling either way.
//!
//! ## Features
//! | Area            | Description                                            | Key types / traits                  |
//! |-----------------|--------------------------------------------------------|-------------------------------------|
//! | **Polling**     | Indefinite long-poll loop with cycle error surfacing.  | [`Poller`], [`TaskSource`]          |
//! | **Pagination**  | Multi-page history stitching with bounded retry.       | [`Decider`], [`RetryPolicy`]        |
//! | **Events**      | Push-based consumer interface.                         | [`Bus`], [`PollEvent`]              |
//! | **Subscribers** | Non-blocking fan-out to registered handlers.           | [`Subscribe`], [`SubscriberSet`]    |
//! | **Responding**  | Stateless retry-wrapped answers.                       | [`ActivityResponder`]               |
//! | **Client seam** | Bring-your-own network client.                         | [`WorkflowService`], [`TaskPage`]   |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogSubscriber`](subscribers::LogSubscriber) _(demo/reference only)_.
//!
//! ## Example
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use tokio_util::sync::CancellationToken;
//! use taskpoll::{
//!     Bus, PollConfig, PollEventKind, PollRequest, Poller, TaskPage, TransportError,
//!     WorkflowService,
//! };
//!
//! /// Stand-in for a real network client.
//! struct HttpService;
//!
//! #[async_trait]
//! impl WorkflowService for HttpService {
//!     async fn fetch_task(
//!         &self,
//!         _selector: &str,
//!         _request: &PollRequest,
//!     ) -> Result<TaskPage, TransportError> {
//!         Ok(TaskPage::default()) // an idle long poll
//!     }
//!
//!     async fn respond_completed(
//!         &self,
//!         _task_token: &str,
//!         _result: &str,
//!     ) -> Result<(), TransportError> {
//!         Ok(())
//!     }
//!
//!     async fn respond_failed(
//!         &self,
//!         _task_token: &str,
//!         _reason: Option<&str>,
//!         _details: Option<&str>,
//!     ) -> Result<(), TransportError> {
//!         Ok(())
//!     }
//!
//!     async fn record_heartbeat(
//!         &self,
//!         _task_token: &str,
//!         _details: &str,
//!     ) -> Result<(), TransportError> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bus = Bus::default();
//!     let config = PollConfig::new("orders", "order-deciders").with_identity("decider-1");
//!     let poller = Poller::for_decisions(config, Arc::new(HttpService), bus.clone())?;
//!
//!     // Subscribe before the loop starts: receivers only see later events.
//!     let mut events = bus.subscribe();
//!     let token = CancellationToken::new();
//!     tokio::spawn({
//!         let token = token.clone();
//!         async move { poller.run(token).await }
//!     });
//!
//!     while let Ok(ev) = events.recv().await {
//!         match ev.kind {
//!             PollEventKind::TaskReady(task) => {
//!                 println!(
//!                     "task {:?} with {} history events",
//!                     task.task_token(),
//!                     task.events().len()
//!                 );
//!             }
//!             PollEventKind::Error(err) => eprintln!("poll error: {err}"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod policies;
pub mod poller;
pub mod subscribers;
pub mod task;

// ---- Public re-exports ----

pub use client::{
    HistoryEvent, PollRequest, ServiceRef, TaskPage, WorkflowExecution, WorkflowService,
    WorkflowType,
};
pub use config::PollConfig;
pub use error::{ConfigError, PollError, RespondError, TransportError};
pub use events::{Bus, PollEvent, PollEventKind};
pub use policies::RetryPolicy;
pub use poller::{Decider, Poller, SourceRef, TaskSource, DECISION_TASK_OPERATION};
pub use subscribers::{Subscribe, SubscriberSet};
pub use task::{ActivityResponder, DecisionTask};

// Optional: expose the built-in logging subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogSubscriber;
