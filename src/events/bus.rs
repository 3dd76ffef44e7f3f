//! # Event bus for consumer notifications.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`] providing
//! non-blocking publishing of [`PollEvent`]s from the polling core to any
//! number of listeners.
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks or awaits.
//! - **Bounded capacity**: a single ring buffer holds recent events for all
//!   receivers; the minimum capacity is 1 (clamped).
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip
//!   the `n` oldest items.
//! - **No persistence**: a receiver only observes events published after it
//!   subscribed; subscribe before starting the poller.

use tokio::sync::broadcast;

use super::event::PollEvent;

/// Broadcast channel for poller events.
///
/// Cheap to clone (internally holds an `Arc`-backed sender); clones publish
/// into the same channel.
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<PollEvent>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity (clamped to ≥ 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<PollEvent>(capacity);
        Self { tx }
    }

    /// Publishes an event to all active receivers.
    ///
    /// If there are no receivers the event is dropped; the call still
    /// returns immediately.
    pub fn publish(&self, ev: PollEvent) {
        let _ = self.tx.send(ev);
    }

    /// Creates a new receiver observing subsequent events.
    ///
    /// Each call creates an independent receiver with its own cursor.
    pub fn subscribe(&self) -> broadcast::Receiver<PollEvent> {
        self.tx.subscribe()
    }
}

impl Default for Bus {
    /// A bus with a 1024-event ring buffer.
    fn default() -> Self {
        Self::new(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PollError, TransportError};

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();
        bus.publish(PollEvent::error(PollError::Fetch(
            TransportError::connection("boom"),
        )));
        let ev = rx.recv().await.unwrap();
        assert!(ev.is_error());
    }

    #[tokio::test]
    async fn test_capacity_is_clamped_to_one() {
        let bus = Bus::new(0);
        let mut rx = bus.subscribe();
        bus.publish(PollEvent::error(PollError::Fetch(
            TransportError::connection("only"),
        )));
        assert!(rx.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_receiver_misses_events_published_before_subscribe() {
        let bus = Bus::new(8);
        bus.publish(PollEvent::error(PollError::Fetch(
            TransportError::connection("early"),
        )));
        let mut rx = bus.subscribe();
        bus.publish(PollEvent::error(PollError::Fetch(
            TransportError::connection("late"),
        )));
        let ev = rx.recv().await.unwrap();
        match ev.kind {
            crate::events::PollEventKind::Error(PollError::Fetch(
                TransportError::Connection(msg),
            )) => assert_eq!(msg, "late"),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
