//! # Fixed-delay retry policy.
//!
//! [`RetryPolicy`] bounds how often a fallible remote call is re-issued and
//! how long to wait between attempts. Delays are fixed: the polling layer
//! retries against a service that long-polls anyway, so growth factors and
//! jitter buy nothing here.
//!
//! Presets match the service conventions:
//! - [`RetryPolicy::page_fetch`] / [`RetryPolicy::respond`] — 5 attempts, 5 s apart;
//! - [`RetryPolicy::heartbeat`] — 5 attempts, 2 s apart.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use taskpoll::RetryPolicy;
//!
//! let policy = RetryPolicy::page_fetch();
//! assert_eq!(policy.attempts, 5);
//! assert_eq!(policy.delay, Duration::from_secs(5));
//! assert!(!policy.is_exhausted(4));
//! assert!(policy.is_exhausted(5));
//! ```

use std::time::Duration;

/// Bounded fixed-delay retry.
///
/// `attempts` counts every call, including the first one: a policy with
/// `attempts = 5` issues at most 5 calls and sleeps 4 times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum total attempts (≥ 1 expected).
    pub attempts: u32,
    /// Fixed delay between attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy with an explicit budget and delay.
    pub const fn new(attempts: u32, delay: Duration) -> Self {
        Self { attempts, delay }
    }

    /// Preset for history-page continuation fetches: 5 attempts, 5 s apart.
    pub const fn page_fetch() -> Self {
        Self::new(5, Duration::from_secs(5))
    }

    /// Preset for complete/fail responses: 5 attempts, 5 s apart.
    pub const fn respond() -> Self {
        Self::new(5, Duration::from_secs(5))
    }

    /// Preset for heartbeats: 5 attempts, 2 s apart.
    pub const fn heartbeat() -> Self {
        Self::new(5, Duration::from_secs(2))
    }

    /// True once `failures` consecutive failures have consumed the budget.
    #[inline]
    pub fn is_exhausted(&self, failures: u32) -> bool {
        failures >= self.attempts
    }
}

impl Default for RetryPolicy {
    /// Returns the page-fetch preset (5 attempts, 5 s apart).
    fn default() -> Self {
        Self::page_fetch()
    }
}
