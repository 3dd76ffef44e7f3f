//! Subscriber delivery: trait, fan-out set, and built-ins.
//!
//! Consumers who prefer registered handlers over holding a broadcast
//! receiver use this layer:
//! - [`Subscribe`] the handler contract;
//! - [`SubscriberSet`] bounded per-subscriber queues with worker tasks and
//!   a [`Bus`](crate::events::Bus) bridge ([`SubscriberSet::listen`]);
//! - [`LogSubscriber`] (feature `logging`) a demo/reference logger.

mod set;
mod subscribe;

pub use set::SubscriberSet;
pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogSubscriber;
