// ABOUTME: Query/mutation layer: freshness, retries, fetch deduplication, and invalidation
// ABOUTME: Sits between view models and the RecipeApi, backed by the shared QueryCache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Query Layer
//!
//! Reads are addressed by [`QueryKey`](crate::cache::QueryKey). A read
//! within the freshness window is served from the cache with no network
//! call. Outside it, [`QueryClient::fetch_query`] waits for a refetch while
//! [`QueryClient::query`] hands back the last value and refetches in the
//! background.
//!
//! Mutations run once, then invalidate the scopes that depend on them and
//! raise a notification.

/// The client itself
pub mod client;
/// Writes and their invalidation rules
pub mod mutations;
/// Typed read helpers
pub mod reads;
/// Retry policies and backoff
pub mod retry;

pub use client::QueryClient;
pub use mutations::Mutation;
pub use retry::RetryPolicy;

use crate::cache::QueryKey;
use crate::constants::cache::{
    CURRENT_USER_RETRIES, DEFAULT_QUERY_RETRIES, DEFAULT_RETRY_DELAY_MS, DEFAULT_STALE_TIME_SECS,
};
use crate::constants::messages::failure;
use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Freshness and retry settings shared by all reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// How long a successful fetch stays fresh
    pub stale_time: Duration,
    /// Extra attempts for ordinary reads
    pub retries: u32,
    /// First backoff delay; doubles per attempt
    pub retry_delay: Duration,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(DEFAULT_STALE_TIME_SECS),
            retries: DEFAULT_QUERY_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

/// Events that may trigger a refetch of a stale read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefetchTrigger {
    /// A view using the read was shown
    Mount,
    /// The application regained focus
    WindowFocus,
}

/// Per-key read behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Retry policy for failed fetches
    pub retry: RetryPolicy,
    /// Refetch a stale value when a view mounts
    pub refetch_on_mount: bool,
    /// Refetch a stale value when focus returns
    pub refetch_on_window_focus: bool,
    /// Notification text when the server gives no message
    pub error_message: &'static str,
}

impl QueryOptions {
    /// Options for `key` under `config`
    #[must_use]
    pub fn for_key(key: &QueryKey, config: &QueryConfig) -> Self {
        let ordinary = |error_message| Self {
            retry: RetryPolicy::Count(config.retries),
            refetch_on_mount: true,
            refetch_on_window_focus: true,
            error_message,
        };
        match key {
            QueryKey::Recipes { .. } => ordinary(failure::FETCH_RECIPES),
            QueryKey::UserRecipes => ordinary(failure::FETCH_USER_RECIPES),
            QueryKey::Recipe { .. } => ordinary(failure::FETCH_RECIPE),
            QueryKey::FavoriteRecipes => ordinary(failure::FETCH_FAVORITES),
            QueryKey::CurrentUser => Self {
                retry: RetryPolicy::SkipUnauthorized(CURRENT_USER_RETRIES),
                refetch_on_mount: true,
                refetch_on_window_focus: false,
                error_message: failure::FETCH_USER,
            },
        }
    }

    /// Whether `trigger` should refetch a stale value
    #[must_use]
    pub const fn refetches_on(&self, trigger: RefetchTrigger) -> bool {
        match trigger {
            RefetchTrigger::Mount => self.refetch_on_mount,
            RefetchTrigger::WindowFocus => self.refetch_on_window_focus,
        }
    }
}

/// Overall status of a read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// No value and no error yet
    Pending,
    /// A value is available
    Success,
    /// The latest fetch failed and no value was ever loaded
    Error,
}

/// Snapshot of a read as a view sees it
#[derive(Debug, Clone)]
pub struct QueryState<T> {
    /// Last known value
    pub data: Option<T>,
    /// Derived status
    pub status: QueryStatus,
    /// Error of the most recent failed fetch, kept even when `data` is present
    pub error: Option<AppError>,
    /// The value is outside its freshness window or was invalidated
    pub is_stale: bool,
    /// A fetch is in flight
    pub is_fetching: bool,
}

impl<T> QueryState<T> {
    pub(crate) fn new(data: Option<T>, error: Option<AppError>, is_stale: bool, is_fetching: bool) -> Self {
        let status = match (&data, &error) {
            (Some(_), _) => QueryStatus::Success,
            (None, Some(_)) => QueryStatus::Error,
            (None, None) => QueryStatus::Pending,
        };
        Self {
            data,
            status,
            error,
            is_stale,
            is_fetching,
        }
    }

    /// True while nothing has loaded and nothing has failed
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Pending
    }

    /// Value or a reference to the latest error
    ///
    /// # Errors
    ///
    /// Returns the recorded error when no value is available
    pub fn result(&self) -> AppResult<&T> {
        match (&self.data, &self.error) {
            (Some(data), _) => Ok(data),
            (None, Some(error)) => Err(error.clone()),
            (None, None) => Err(AppError::internal("Query has not loaded yet")),
        }
    }

    /// Transform the value, keeping flags and error
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        QueryState {
            data: self.data.map(f),
            status: self.status,
            error: self.error,
            is_stale: self.is_stale,
            is_fetching: self.is_fetching,
        }
    }
}

impl QueryState<Value> {
    /// Decode the cached JSON into `T`; a decode failure becomes the state's error
    #[must_use]
    pub fn decode<T: DeserializeOwned>(self) -> QueryState<T> {
        let Self {
            data,
            error,
            is_stale,
            is_fetching,
            ..
        } = self;
        match data.map(decode_value::<T>).transpose() {
            Ok(data) => QueryState::new(data, error, is_stale, is_fetching),
            Err(decode_error) => QueryState::new(None, Some(decode_error), is_stale, is_fetching),
        }
    }
}

/// Decode a cached JSON value
///
/// # Errors
///
/// Returns a serialization error if the value does not match `T`
pub fn decode_value<T: DeserializeOwned>(value: Value) -> AppResult<T> {
    Ok(serde_json::from_value(value)?)
}
