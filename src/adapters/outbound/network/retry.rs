use crate::shared::error::api_error_kind;
use crate::shared::Result;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

/// How the wait between attempts grows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backoff {
    /// `base_delay × attempt`
    Linear,
    /// `base_delay × 2^(attempt-1)`
    #[default]
    Exponential,
}

/// Retry settings shared by every backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff: Backoff,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(200);
    pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(5);

    /// A policy that makes exactly one attempt
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Wait before the attempt following `attempt` (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let delay = match self.backoff {
            Backoff::Linear => self.base_delay.saturating_mul(attempt),
            Backoff::Exponential => {
                let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
                self.base_delay.saturating_mul(factor)
            }
        };
        delay.min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            base_delay: Self::DEFAULT_BASE_DELAY,
            max_delay: Self::DEFAULT_MAX_DELAY,
            backoff: Backoff::default(),
        }
    }
}

/// Runs `operation` until it succeeds, fails with a non-retryable error,
/// or `policy.max_attempts` is exhausted
///
/// # Arguments
/// * `policy` - Attempt count and backoff settings
/// * `label` - Human-readable name of the call for logging (e.g., "GET /dependencies")
/// * `operation` - Async closure performing one attempt
///
/// # Returns
/// The first successful result, or the last error
pub async fn retry_api_call<T, F, Fut>(policy: &RetryPolicy, label: &str, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!("{} succeeded on attempt {}", label, attempt);
                }
                return Ok(value);
            }
            Err(e) => {
                let kind = api_error_kind(&e);
                if !kind.is_retryable() || attempt >= max_attempts {
                    tracing::debug!(
                        "{} failed after {} attempt(s) ({}): {:#}",
                        label,
                        attempt,
                        kind,
                        e
                    );
                    return Err(e);
                }

                let delay = policy.delay_after(attempt);
                tracing::warn!(
                    "{} failed (attempt {}/{}): {:#}. Retrying in {:?}...",
                    label,
                    attempt,
                    max_attempts,
                    e,
                    delay
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
