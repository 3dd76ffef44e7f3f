//! # SubscriberSet: non-blocking fan-out over multiple subscribers.
//!
//! [`SubscriberSet`] distributes each [`PollEvent`] to multiple subscribers
//! **without awaiting** their processing.
//!
//! ## What it guarantees
//! - `emit(&PollEvent)` returns immediately.
//! - Per-subscriber FIFO (queue order).
//! - Panics inside subscribers are caught and logged (isolation).
//!
//! ## What it does **not** guarantee
//! - No global ordering across different subscribers.
//! - No retries on per-subscriber queue overflow (events are dropped for
//!   that subscriber).
//!
//! ## Diagram
//! ```text
//!    emit(&PollEvent)
//!        │                        (Arc-clone per subscriber)
//!        ├────────────────► [queue S1] ─► worker S1 ─► on_event()
//!        ├────────────────► [queue S2] ─► worker S2 ─► on_event()
//!        └────────────────► [queue SN] ─► worker SN ─► on_event()
//! ```

use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::broadcast::error::RecvError;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::events::{Bus, PollEvent};

use super::Subscribe;

/// Per-subscriber channel with metadata.
struct SubscriberChannel {
    name: &'static str,
    sender: mpsc::Sender<Arc<PollEvent>>,
}

/// Composite fan-out with per-subscriber bounded queues and worker tasks.
pub struct SubscriberSet {
    channels: Vec<SubscriberChannel>,
    workers: Vec<JoinHandle<()>>,
}

impl SubscriberSet {
    /// Creates a new set and spawns one worker per subscriber.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>) -> Self {
        let mut channels = Vec::with_capacity(subs.len());
        let mut workers = Vec::with_capacity(subs.len());

        for sub in subs {
            let cap = sub.queue_capacity().max(1);
            let name = sub.name();
            let (tx, mut rx) = mpsc::channel::<Arc<PollEvent>>(cap);
            let s = Arc::clone(&sub);

            let handle = tokio::spawn(async move {
                while let Some(ev) = rx.recv().await {
                    let fut = s.on_event(ev.as_ref());
                    if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                        tracing::warn!(
                            subscriber = s.name(),
                            panic = ?panic_err,
                            "subscriber panicked while handling event"
                        );
                    }
                }
            });

            channels.push(SubscriberChannel { name, sender: tx });
            workers.push(handle);
        }

        Self { channels, workers }
    }

    /// Fans one event out to all subscribers (non-blocking).
    ///
    /// If a subscriber's queue is **full** or **closed**, the event is
    /// dropped for it and a warning is logged with the subscriber's name.
    pub fn emit(&self, event: &PollEvent) {
        let ev = Arc::new(event.clone());
        for channel in &self.channels {
            match channel.sender.try_send(Arc::clone(&ev)) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    tracing::warn!(subscriber = channel.name, "dropped event: queue full");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    tracing::warn!(subscriber = channel.name, "dropped event: worker closed");
                }
            }
        }
    }

    /// Bridges a [`Bus`] into this set: spawns a listener forwarding every
    /// published event via [`emit`](SubscriberSet::emit).
    ///
    /// A lagging listener skips the overwritten events and keeps going; the
    /// task ends when the bus is dropped.
    pub fn listen(self: Arc<Self>, bus: &Bus) -> JoinHandle<()> {
        let mut rx = bus.subscribe();
        let set = self;
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(ev) => set.emit(&ev),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "subscriber listener lagged behind the bus");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }

    /// Graceful shutdown: closes all queues and awaits worker completion.
    pub async fn shutdown(self) {
        drop(self.channels);
        for h in self.workers {
            let _ = h.await;
        }
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PollError, TransportError};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    struct Recorder {
        seen: Mutex<Vec<u64>>,
        notify: Notify,
    }

    impl Recorder {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                notify: Notify::new(),
            })
        }
    }

    #[async_trait]
    impl Subscribe for Recorder {
        async fn on_event(&self, event: &PollEvent) {
            self.seen.lock().unwrap().push(event.seq);
            self.notify.notify_one();
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    fn error_event() -> PollEvent {
        PollEvent::error(PollError::Fetch(TransportError::connection("boom")))
    }

    #[tokio::test]
    async fn test_events_reach_every_subscriber_in_order() {
        let first = Recorder::new();
        let second = Recorder::new();
        let set = Arc::new(SubscriberSet::new(vec![
            Arc::clone(&first) as Arc<dyn Subscribe>,
            Arc::clone(&second) as Arc<dyn Subscribe>,
        ]));
        assert_eq!(set.len(), 2);

        let a = error_event();
        let b = error_event();
        let expected = vec![a.seq, b.seq];
        set.emit(&a);
        set.emit(&b);

        for recorder in [&first, &second] {
            while recorder.seen.lock().unwrap().len() < 2 {
                recorder.notify.notified().await;
            }
            assert_eq!(*recorder.seen.lock().unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn test_listen_forwards_bus_events() {
        let recorder = Recorder::new();
        let set = Arc::new(SubscriberSet::new(vec![
            Arc::clone(&recorder) as Arc<dyn Subscribe>
        ]));
        let bus = Bus::default();
        let _listener = Arc::clone(&set).listen(&bus);

        let ev = error_event();
        let seq = ev.seq;
        bus.publish(ev);

        while recorder.seen.lock().unwrap().is_empty() {
            recorder.notify.notified().await;
        }
        assert_eq!(*recorder.seen.lock().unwrap(), vec![seq]);
    }

    #[tokio::test]
    async fn test_shutdown_drains_workers() {
        let recorder = Recorder::new();
        let set = SubscriberSet::new(vec![Arc::clone(&recorder) as Arc<dyn Subscribe>]);
        set.emit(&error_event());
        // Must not hang: dropping the queues ends the workers.
        SubscriberSet::shutdown(set).await;
        assert_eq!(recorder.seen.lock().unwrap().len(), 1);
    }
}
