//! Error types used by the polling runtime and the responder.
//!
//! This module defines the full error taxonomy:
//!
//! - [`ConfigError`] — invalid configuration, fatal at construction, never retried.
//! - [`TransportError`] — a single remote call failed (raised by [`WorkflowService`](crate::client::WorkflowService) implementations).
//! - [`PollError`] — a poll cycle or pagination chain failed; delivered as an `Error` event, never thrown past the event boundary.
//! - [`RespondError`] — a responder call exhausted its retry budget; returned to the responder's caller.
//!
//! All types provide `as_label` helpers for logging/metrics.

use thiserror::Error;

/// # Errors raised while validating a [`PollConfig`](crate::PollConfig).
///
/// These are fatal: constructors return them before any network activity,
/// and they are never retried.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The remote domain identifier is empty.
    #[error("domain must not be empty")]
    EmptyDomain,

    /// The task-list identifier is empty.
    #[error("task list must not be empty")]
    EmptyTaskList,
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::EmptyDomain => "config_empty_domain",
            ConfigError::EmptyTaskList => "config_empty_task_list",
        }
    }
}

/// # A single failed call against the remote service.
///
/// Raised by [`WorkflowService`](crate::client::WorkflowService) implementations.
/// The runtime treats every transport error as retryable at its own level
/// (cycle-level for seed fetches, bounded retry for continuation fetches and
/// responder calls); the split below exists for diagnostics only.
///
/// Cloneable so it can ride inside emitted events.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a service response (connect, I/O, timeout).
    #[error("connection failed: {0}")]
    Connection(String),

    /// The service answered with an error of its own.
    #[error("service error {code}: {message}")]
    Service {
        /// Service-defined error code.
        code: String,
        /// Human-readable description.
        message: String,
    },
}

impl TransportError {
    /// Shorthand for a connection-level failure.
    pub fn connection(message: impl Into<String>) -> Self {
        TransportError::Connection(message.into())
    }

    /// Shorthand for a service-reported failure.
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        TransportError::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            TransportError::Connection(_) => "transport_connection",
            TransportError::Service { .. } => "transport_service",
        }
    }
}

/// # Errors surfaced by the polling core.
///
/// Both variants are delivered to consumers as `Error` events; the loop
/// itself keeps running. A long-running consumer should treat them as
/// non-fatal and keep listening.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    /// The seed fetch of a cycle failed. The cycle is abandoned and the loop
    /// resumes on its normal cadence.
    #[error("poll cycle failed: {0}")]
    Fetch(#[from] TransportError),

    /// A continuation fetch kept failing until the retry budget ran out.
    /// The pagination chain is abandoned and no task is produced.
    #[error("gave up fetching history page after {attempts} attempts: {cause}")]
    PageRetriesExhausted {
        /// Consecutive failed attempts for the same continuation token.
        attempts: u32,
        /// The last transport failure observed.
        #[source]
        cause: TransportError,
    },
}

impl PollError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            PollError::Fetch(_) => "poll_fetch",
            PollError::PageRetriesExhausted { .. } => "poll_page_retries_exhausted",
        }
    }
}

/// # A responder call exhausted its retry budget.
///
/// Returned by [`ActivityResponder`](crate::ActivityResponder) methods after
/// the final attempt failed. Intermediate failures are not reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation} failed after {attempts} attempts: {cause}")]
pub struct RespondError {
    /// Name of the responder operation ("complete", "fail", "heartbeat").
    pub operation: &'static str,
    /// Total attempts made, including the first one.
    pub attempts: u32,
    /// The last transport failure observed.
    #[source]
    pub cause: TransportError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(ConfigError::EmptyDomain.as_label(), "config_empty_domain");
        assert_eq!(
            TransportError::connection("refused").as_label(),
            "transport_connection"
        );
        assert_eq!(
            PollError::Fetch(TransportError::connection("refused")).as_label(),
            "poll_fetch"
        );
    }

    #[test]
    fn test_page_retries_display_includes_budget_and_cause() {
        let err = PollError::PageRetriesExhausted {
            attempts: 5,
            cause: TransportError::service("ThrottlingException", "rate exceeded"),
        };
        let text = err.to_string();
        assert!(text.contains("5 attempts"), "missing budget: {text}");
        assert!(text.contains("ThrottlingException"), "missing cause: {text}");
    }

    #[test]
    fn test_respond_error_display() {
        let err = RespondError {
            operation: "heartbeat",
            attempts: 5,
            cause: TransportError::connection("reset by peer"),
        };
        assert_eq!(
            err.to_string(),
            "heartbeat failed after 5 attempts: connection failed: reset by peer"
        );
    }
}
