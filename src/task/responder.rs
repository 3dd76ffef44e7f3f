//! # Stateless task responder.
//!
//! [`ActivityResponder`] answers the service for one unit of work:
//! [`complete`](ActivityResponder::complete),
//! [`fail`](ActivityResponder::fail) and
//! [`heartbeat`](ActivityResponder::heartbeat). Each method wraps a single
//! [`WorkflowService`](crate::client::WorkflowService) call in a fixed
//! [`RetryPolicy`] loop and reports only the final failure; intermediate
//! failures are logged and retried silently.
//!
//! There is no pagination or aggregation here; the responder holds nothing
//! but the task token and the shared service handle.
//!
//! ## Payload rendering
//! Free-form payloads are rendered to text before transmission: nulls become
//! empty strings, plain strings pass through unchanged, anything else is
//! rendered as its JSON text.

use std::future::Future;

use serde_json::Value;
use tokio::time;

use crate::client::ServiceRef;
use crate::error::{RespondError, TransportError};
use crate::policies::RetryPolicy;

/// Renders a free-form payload to the text form the service expects.
fn render_payload(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_opt(value: Option<&Value>) -> String {
    value.map(render_payload).unwrap_or_default()
}

/// Re-issues `call` under `policy`, sleeping the fixed delay between
/// attempts; the final failure becomes a [`RespondError`].
async fn call_with_retry<F, Fut>(
    policy: RetryPolicy,
    operation: &'static str,
    mut call: F,
) -> Result<(), RespondError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), TransportError>>,
{
    let mut failures = 0u32;
    loop {
        match call().await {
            Ok(()) => return Ok(()),
            Err(err) => {
                failures += 1;
                if policy.is_exhausted(failures) {
                    return Err(RespondError {
                        operation,
                        attempts: failures,
                        cause: err,
                    });
                }
                tracing::debug!(
                    operation,
                    attempt = failures,
                    delay_ms = policy.delay.as_millis() as u64,
                    error = %err,
                    "responder call failed, retrying"
                );
                time::sleep(policy.delay).await;
            }
        }
    }
}

/// Responder for one delivered unit of work.
///
/// ## Example
/// ```rust,no_run
/// use serde_json::json;
/// use taskpoll::{ActivityResponder, ServiceRef};
///
/// async fn finish(client: ServiceRef) -> Result<(), taskpoll::RespondError> {
///     let responder = ActivityResponder::new(client, "task-token");
///     responder.complete(Some(&json!({"shipped": true}))).await
/// }
/// ```
pub struct ActivityResponder {
    client: ServiceRef,
    task_token: String,
    respond_retry: RetryPolicy,
    heartbeat_retry: RetryPolicy,
}

impl ActivityResponder {
    /// Creates a responder for the given task token with the default retry
    /// presets (5 × 5 s for complete/fail, 5 × 2 s for heartbeats).
    pub fn new(client: ServiceRef, task_token: impl Into<String>) -> Self {
        Self {
            client,
            task_token: task_token.into(),
            respond_retry: RetryPolicy::respond(),
            heartbeat_retry: RetryPolicy::heartbeat(),
        }
    }

    /// Overrides the retry policy for `complete` and `fail`.
    pub fn with_respond_retry(mut self, policy: RetryPolicy) -> Self {
        self.respond_retry = policy;
        self
    }

    /// Overrides the retry policy for `heartbeat`.
    pub fn with_heartbeat_retry(mut self, policy: RetryPolicy) -> Self {
        self.heartbeat_retry = policy;
        self
    }

    /// The task token this responder answers for.
    pub fn task_token(&self) -> &str {
        &self.task_token
    }

    /// Reports the unit of work as completed.
    ///
    /// `result` is rendered to text (`None` transmits an empty result).
    pub async fn complete(&self, result: Option<&Value>) -> Result<(), RespondError> {
        let rendered = render_opt(result);
        call_with_retry(self.respond_retry, "complete", || {
            self.client.respond_completed(&self.task_token, &rendered)
        })
        .await
    }

    /// Reports the unit of work as failed.
    ///
    /// `reason` passes through verbatim; `details` is rendered to text and
    /// omitted entirely when `None`.
    pub async fn fail(
        &self,
        reason: Option<&str>,
        details: Option<&Value>,
    ) -> Result<(), RespondError> {
        let details = details.map(render_payload);
        call_with_retry(self.respond_retry, "fail", || {
            self.client
                .respond_failed(&self.task_token, reason, details.as_deref())
        })
        .await
    }

    /// Records a liveness heartbeat for a long-running unit of work.
    pub async fn heartbeat(&self, details: Option<&Value>) -> Result<(), RespondError> {
        let rendered = render_opt(details);
        call_with_retry(self.heartbeat_retry, "heartbeat", || {
            self.client.record_heartbeat(&self.task_token, &rendered)
        })
        .await
    }
}
