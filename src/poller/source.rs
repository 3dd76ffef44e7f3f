//! # Task source strategy.
//!
//! [`TaskSource`] is the extension seam of the polling loop: it names the
//! remote operation a [`Poller`](crate::Poller) invokes each cycle and
//! interprets each raw response. The loop stays generic; everything
//! task-kind-specific (pagination, assembly, emission) lives behind this
//! trait.
//!
//! The crate ships one implementation, [`Decider`](crate::Decider), which
//! stitches multi-page decision-task histories.

use async_trait::async_trait;
use std::sync::Arc;

use crate::client::TaskPage;
use crate::error::PollError;

/// Shared handle to a [`TaskSource`] implementation.
pub type SourceRef = Arc<dyn TaskSource>;

/// # Strategy consumed by the polling loop.
///
/// ### Contract
/// - [`selector`](TaskSource::selector) is stable for the lifetime of the
///   source; it is passed to every fetch and used in logs.
/// - [`on_response`](TaskSource::on_response) receives each non-empty poll
///   response, may issue further fetches of its own (pagination), and must
///   reach a terminal state before returning: either it published its
///   outcome or it returns the error to surface. The loop does not start a
///   new cycle until it returns.
#[async_trait]
pub trait TaskSource: Send + Sync + 'static {
    /// Name of the remote task-source operation to invoke each cycle.
    fn selector(&self) -> &str;

    /// Interprets one raw poll response.
    async fn on_response(&self, seed: TaskPage) -> Result<(), PollError>;
}
