//! Polling core: cycle driver and task sources.
//!
//! This module contains the heart of the crate:
//! - [`cycle`]: the [`Poller`] long-poll loop (one in-flight call, cycle
//!   error surfacing, cooperative cancellation);
//! - [`source`]: the [`TaskSource`] strategy seam;
//! - [`decider`]: the [`Decider`] pagination-stitching source for decision
//!   tasks.
//!
//! See `lib.rs` for the system-level wiring diagram.

mod cycle;
mod decider;
mod source;

pub use cycle::Poller;
pub use decider::{Decider, DECISION_TASK_OPERATION};
pub use source::{SourceRef, TaskSource};
