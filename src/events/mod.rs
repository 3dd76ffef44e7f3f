//! Consumer-facing events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to push
//! notifications from the polling core to consumers:
//! - [`PollEvent`], [`PollEventKind`] the two outward signals
//!   (`TaskReady`, `Error`) with sequence/timestamp metadata;
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`.
//!
//! Consumers either hold a receiver from [`Bus::subscribe`] directly or
//! register [`Subscribe`](crate::subscribers::Subscribe) handlers through a
//! [`SubscriberSet`](crate::subscribers::SubscriberSet).

mod bus;
mod event;

pub use bus::Bus;
pub use event::{PollEvent, PollEventKind};
