//! # Events pushed to consumers.
//!
//! The poller communicates outward exclusively through [`PollEvent`]s; there
//! are no return values. Exactly two kinds exist:
//!
//! - [`PollEventKind::TaskReady`] a pagination chain completed and produced
//!   a fully assembled [`DecisionTask`](crate::DecisionTask);
//! - [`PollEventKind::Error`] a cycle or chain failed; the loop keeps
//!   running and the consumer should keep listening.
//!
//! ## Ordering guarantees
//! Each event carries a globally unique sequence number (`seq`) that
//! increases monotonically. Within one poller instance, the `TaskReady`
//! event of a chain is published only after that chain's event sequence is
//! finalized.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

use crate::error::PollError;
use crate::task::DecisionTask;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Payload of a [`PollEvent`].
#[derive(Debug, Clone)]
pub enum PollEventKind {
    /// A complete task with its fully stitched event history.
    ///
    /// The core keeps no reference to the task after publishing; the
    /// consumer owns it from here on.
    TaskReady(Arc<DecisionTask>),

    /// A poll cycle or pagination chain failed. Non-fatal: the loop resumes.
    Error(PollError),
}

/// One consumer-facing notification.
#[derive(Debug, Clone)]
pub struct PollEvent {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event payload.
    pub kind: PollEventKind,
}

impl PollEvent {
    fn next(kind: PollEventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
        }
    }

    /// Creates a `TaskReady` event, taking ownership of the task.
    pub fn task_ready(task: DecisionTask) -> Self {
        Self::next(PollEventKind::TaskReady(Arc::new(task)))
    }

    /// Creates an `Error` event.
    pub fn error(err: PollError) -> Self {
        Self::next(PollEventKind::Error(err))
    }

    /// True for `TaskReady` events.
    #[inline]
    pub fn is_task_ready(&self) -> bool {
        matches!(self.kind, PollEventKind::TaskReady(_))
    }

    /// True for `Error` events.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, PollEventKind::Error(_))
    }

    /// Returns the task for `TaskReady` events.
    pub fn task(&self) -> Option<&Arc<DecisionTask>> {
        match &self.kind {
            PollEventKind::TaskReady(task) => Some(task),
            PollEventKind::Error(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;

    #[test]
    fn test_sequence_is_monotonic() {
        let first = PollEvent::error(PollError::Fetch(TransportError::connection("a")));
        let second = PollEvent::error(PollError::Fetch(TransportError::connection("b")));
        assert!(second.seq > first.seq, "{} vs {}", second.seq, first.seq);
    }

    #[test]
    fn test_kind_predicates() {
        let err = PollEvent::error(PollError::Fetch(TransportError::connection("boom")));
        assert!(err.is_error());
        assert!(!err.is_task_ready());
        assert!(err.task().is_none());
    }
}
