// ABOUTME: Environment-based configuration for the cookbook client
// ABOUTME: Parses COOKBOOK_* variables into a typed ClientConfig with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Client configuration loaded from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `COOKBOOK_API_URL` | `http://localhost:8000/api/v1` |
//! | `COOKBOOK_HTTP_TIMEOUT_SECS` | `30` |
//! | `COOKBOOK_STALE_TIME_SECS` | `300` |
//! | `COOKBOOK_QUERY_RETRIES` | `3` |
//! | `COOKBOOK_RETRY_DELAY_MS` | `1000` |
//! | `COOKBOOK_CACHE_MAX_ENTRIES` | `1000` |
//! | `COOKBOOK_GC_TIME_SECS` | `300` |
//! | `COOKBOOK_CACHE_CLEANUP_INTERVAL_SECS` | `60` |

use crate::cache::CacheConfig;
use crate::constants::cache::{
    DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CLEANUP_INTERVAL_SECS, DEFAULT_GC_TIME_SECS,
    DEFAULT_QUERY_RETRIES, DEFAULT_RETRY_DELAY_MS, DEFAULT_STALE_TIME_SECS,
};
use crate::constants::{defaults, env_config};
use crate::query::QueryConfig;
use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Everything needed to talk to the recipe service and cache its answers
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every API path is appended to
    pub api_url: Url,
    /// Per-request timeout
    pub http_timeout: Duration,
    /// Freshness and retry settings for reads
    pub query: QueryConfig,
    /// Cache sizing and garbage collection
    pub cache: CacheConfig,
}

impl ClientConfig {
    /// Default settings against the given base URL
    #[must_use]
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            http_timeout: Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
            query: QueryConfig::default(),
            cache: CacheConfig::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// API URL is not an absolute http(s) URL
    pub fn from_env() -> Result<Self> {
        info!("Loading client configuration from environment variables");

        let api_url = parse_api_url(&env_var_or(env_config::API_URL, defaults::API_URL))?;

        let config = Self {
            api_url,
            http_timeout: Duration::from_secs(
                env_var_or(
                    env_config::HTTP_TIMEOUT_SECS,
                    &defaults::HTTP_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid COOKBOOK_HTTP_TIMEOUT_SECS value")?,
            ),
            query: QueryConfig {
                stale_time: Duration::from_secs(
                    env_var_or(
                        env_config::STALE_TIME_SECS,
                        &DEFAULT_STALE_TIME_SECS.to_string(),
                    )
                    .parse()
                    .context("Invalid COOKBOOK_STALE_TIME_SECS value")?,
                ),
                retries: env_var_or(env_config::QUERY_RETRIES, &DEFAULT_QUERY_RETRIES.to_string())
                    .parse()
                    .context("Invalid COOKBOOK_QUERY_RETRIES value")?,
                retry_delay: Duration::from_millis(
                    env_var_or(
                        env_config::RETRY_DELAY_MS,
                        &DEFAULT_RETRY_DELAY_MS.to_string(),
                    )
                    .parse()
                    .context("Invalid COOKBOOK_RETRY_DELAY_MS value")?,
                ),
            },
            cache: CacheConfig {
                max_entries: env_var_or(
                    env_config::CACHE_MAX_ENTRIES,
                    &DEFAULT_CACHE_MAX_ENTRIES.to_string(),
                )
                .parse()
                .context("Invalid COOKBOOK_CACHE_MAX_ENTRIES value")?,
                cleanup_interval: Duration::from_secs(
                    env_var_or(
                        env_config::CACHE_CLEANUP_INTERVAL_SECS,
                        &DEFAULT_CLEANUP_INTERVAL_SECS.to_string(),
                    )
                    .parse()
                    .context("Invalid COOKBOOK_CACHE_CLEANUP_INTERVAL_SECS value")?,
                ),
                gc_time: Duration::from_secs(
                    env_var_or(env_config::GC_TIME_SECS, &DEFAULT_GC_TIME_SECS.to_string())
                        .parse()
                        .context("Invalid COOKBOOK_GC_TIME_SECS value")?,
                ),
                enable_background_cleanup: true,
            },
        };

        config.validate()?;
        debug!(api_url = %config.api_url, "Client configuration loaded");
        Ok(config)
    }

    /// Reject values that would make the client unusable
    ///
    /// # Errors
    ///
    /// Returns an error for a zero HTTP timeout or zero cleanup interval
    pub fn validate(&self) -> Result<()> {
        if self.http_timeout.is_zero() {
            bail!("COOKBOOK_HTTP_TIMEOUT_SECS must be greater than zero");
        }
        if self.cache.cleanup_interval.is_zero() {
            bail!("COOKBOOK_CACHE_CLEANUP_INTERVAL_SECS must be greater than zero");
        }
        Ok(())
    }
}

/// Parse and check the API base URL
///
/// # Errors
///
/// Returns an error if the value is not an absolute http or https URL
pub fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid COOKBOOK_API_URL value: {raw}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("COOKBOOK_API_URL must use http or https, got {other}"),
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
