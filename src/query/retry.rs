// ABOUTME: Retry policies and exponential backoff for cached reads
// ABOUTME: Mutations never go through here; they are single-shot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::cache::MAX_RETRY_DELAY_MS;
use crate::errors::{AppError, AppResult};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// When a failed read is attempted again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Fail on the first error
    Never,
    /// Retry any error up to this many extra attempts
    Count(u32),
    /// Never retry an authorization failure; retry anything else up to this many extra attempts
    SkipUnauthorized(u32),
}

impl RetryPolicy {
    /// Decide whether to retry after `failure_count` earlier failures (0 on the first failure)
    #[must_use]
    pub fn should_retry(&self, failure_count: u32, error: &AppError) -> bool {
        match self {
            Self::Never => false,
            Self::Count(max) => failure_count < *max,
            Self::SkipUnauthorized(max) => !error.is_unauthorized() && failure_count < *max,
        }
    }
}

/// `base * 2^failure_count`, capped at 30 seconds
#[must_use]
pub fn backoff_delay(base: Duration, failure_count: u32) -> Duration {
    let cap = Duration::from_millis(MAX_RETRY_DELAY_MS);
    let factor = 2_u32.checked_pow(failure_count).unwrap_or(u32::MAX);
    base.checked_mul(factor).map_or(cap, |delay| delay.min(cap))
}

/// Run `attempt` until it succeeds or `policy` gives up
///
/// # Errors
///
/// Returns the last error once the policy declines to retry
pub async fn run_with_retry<T, F, Fut>(policy: RetryPolicy, base_delay: Duration, mut attempt: F) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut failure_count = 0;
    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(error) if policy.should_retry(failure_count, &error) => {
                let delay = backoff_delay(base_delay, failure_count);
                debug!(failure_count, delay_ms = delay.as_millis(), error = %error, "Retrying read");
                tokio::time::sleep(delay).await;
                failure_count += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
