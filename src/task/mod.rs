//! Delivered work: the assembled task and its responder.
//!
//! - [`DecisionTask`] the terminal artifact of a successful pagination
//!   chain (seed metadata + complete event history + service handle);
//! - [`ActivityResponder`] the stateless retry-wrapped answer path
//!   (complete / fail / heartbeat).

mod decision;
mod responder;

pub use decision::DecisionTask;
pub use responder::ActivityResponder;
