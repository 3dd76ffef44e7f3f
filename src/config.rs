//! # Poll configuration.
//!
//! Provides [`PollConfig`], the immutable per-instance settings shared by
//! [`Poller`](crate::Poller) and [`Decider`](crate::Decider): the remote
//! domain, the task list to poll, and an optional caller identity.
//!
//! Continuation state is never stored here. Each fetch derives a fresh
//! [`PollRequest`] (seed or continuation), so concurrent or sequential
//! pagination chains cannot share mutable cursor state.
//!
//! ## Rules
//! - `domain` and `task_list` are required; [`PollConfig::validate`] fails
//!   fast with a [`ConfigError`] before any network activity.
//! - `identity` is optional and passed through to the service verbatim.

use crate::client::PollRequest;
use crate::error::ConfigError;

/// Immutable settings for one poller instance.
///
/// Construct with [`PollConfig::new`], optionally chain
/// [`PollConfig::with_identity`], and let the poller validate at
/// construction time.
///
/// ## Example
/// ```rust
/// use taskpoll::PollConfig;
///
/// let config = PollConfig::new("orders", "order-deciders").with_identity("decider-1");
/// assert!(config.validate().is_ok());
///
/// let empty = PollConfig::new("", "order-deciders");
/// assert!(empty.validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollConfig {
    /// Remote domain identifier.
    pub domain: String,
    /// Task-list identifier to long-poll.
    pub task_list: String,
    /// Optional identity reported to the service with each request.
    pub identity: Option<String>,
}

impl PollConfig {
    /// Creates a configuration for the given domain and task list.
    pub fn new(domain: impl Into<String>, task_list: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            task_list: task_list.into(),
            identity: None,
        }
    }

    /// Sets the identity reported to the service.
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Checks that the required identifiers are present.
    ///
    /// Called by poller constructors; a violation is fatal and never retried.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domain.is_empty() {
            return Err(ConfigError::EmptyDomain);
        }
        if self.task_list.is_empty() {
            return Err(ConfigError::EmptyTaskList);
        }
        Ok(())
    }

    /// Derives the seed request of a pagination chain (no continuation token).
    pub fn seed_request(&self) -> PollRequest {
        PollRequest {
            domain: self.domain.clone(),
            task_list: self.task_list.clone(),
            identity: self.identity.clone(),
            next_page_token: None,
        }
    }

    /// Derives a continuation request carrying the given page token.
    ///
    /// Every call produces a fresh value; the configuration itself is never
    /// mutated, so retried fetches re-issue an identical request.
    pub fn continuation(&self, token: &str) -> PollRequest {
        PollRequest {
            domain: self.domain.clone(),
            task_list: self.task_list.clone(),
            identity: self.identity.clone(),
            next_page_token: Some(token.to_string()),
        }
    }
}
