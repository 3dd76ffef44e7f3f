//! # LogSubscriber — simple event logger.
//!
//! A minimal subscriber that writes incoming [`PollEvent`]s to the
//! `tracing` log. Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! task ready task_token="tok-1" events=42 seq=7
//! poll error error="poll cycle failed: connection failed: refused" label="poll_fetch" seq=8
//! ```

use async_trait::async_trait;

use crate::events::{PollEvent, PollEventKind};
use crate::subscribers::Subscribe;

/// Event logging subscriber.
#[derive(Default)]
pub struct LogSubscriber;

impl LogSubscriber {
    /// Constructs a new [`LogSubscriber`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogSubscriber {
    async fn on_event(&self, e: &PollEvent) {
        match &e.kind {
            PollEventKind::TaskReady(task) => {
                tracing::info!(
                    task_token = task.task_token().unwrap_or(""),
                    events = task.events().len(),
                    seq = e.seq,
                    "task ready"
                );
            }
            PollEventKind::Error(err) => {
                tracing::warn!(
                    error = %err,
                    label = err.as_label(),
                    seq = e.seq,
                    "poll error"
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogSubscriber"
    }
}
