// ABOUTME: QueryClient: cached reads with staleness, deduplication, retries, and notifications
// ABOUTME: One instance per session, cloned cheaply into every view model that needs data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::retry::run_with_retry;
use super::{decode_value, QueryConfig, QueryOptions, QueryState, RefetchTrigger};
use crate::api::RecipeApi;
use crate::cache::{QueryCache, QueryKey, QueryScope};
use crate::config::ClientConfig;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::notifications::Notifier;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Serializes fetches of one key and counts completed fetches
#[derive(Default)]
struct FetchSlot {
    lock: tokio::sync::Mutex<()>,
    completed: AtomicU64,
}

struct QueryClientInner {
    api: Arc<dyn RecipeApi>,
    cache: QueryCache,
    notifier: Notifier,
    config: QueryConfig,
    fetches: DashMap<String, Arc<FetchSlot>>,
}

/// Session-scoped entry point for reads and writes
///
/// # Examples
///
/// ```rust,no_run
/// use cookbook_client::api::MockRecipeApi;
/// use cookbook_client::cache::{CacheConfig, QueryCache, QueryKey};
/// use cookbook_client::notifications::Notifier;
/// use cookbook_client::query::{QueryClient, QueryConfig};
/// use std::sync::Arc;
///
/// # async fn example() -> cookbook_client::errors::AppResult<()> {
/// let cache = QueryCache::new(&CacheConfig::default());
/// let client = QueryClient::new(
///     Arc::new(MockRecipeApi::new()),
///     cache,
///     Notifier::new(),
///     QueryConfig::default(),
/// );
/// let recipes = client.fetch_query(&QueryKey::recipes("")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<QueryClientInner>,
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("config", &self.inner.config)
            .field("in_flight", &self.inner.fetches.len())
            .finish_non_exhaustive()
    }
}

impl QueryClient {
    /// Assemble a client from its parts
    #[must_use]
    pub fn new(
        api: Arc<dyn RecipeApi>,
        cache: QueryCache,
        notifier: Notifier,
        config: QueryConfig,
    ) -> Self {
        Self {
            inner: Arc::new(QueryClientInner {
                api,
                cache,
                notifier,
                config,
                fetches: DashMap::new(),
            }),
        }
    }

    /// Client with a fresh cache and notifier built from `config`
    #[must_use]
    pub fn from_config(api: Arc<dyn RecipeApi>, config: &ClientConfig) -> Self {
        Self::new(
            api,
            QueryCache::new(&config.cache),
            Notifier::new(),
            config.query.clone(),
        )
    }

    /// Underlying API
    #[must_use]
    pub fn api(&self) -> &Arc<dyn RecipeApi> {
        &self.inner.api
    }

    /// Shared cache
    #[must_use]
    pub fn cache(&self) -> &QueryCache {
        &self.inner.cache
    }

    /// Notification channel
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.inner.notifier
    }

    /// Read settings
    #[must_use]
    pub fn config(&self) -> &QueryConfig {
        &self.inner.config
    }

    /// Behavior for `key`
    #[must_use]
    pub fn options(&self, key: &QueryKey) -> QueryOptions {
        QueryOptions::for_key(key, &self.inner.config)
    }

    /// Value for `key`, waiting for a refetch when the cached one is stale
    ///
    /// # Errors
    ///
    /// Returns the fetch error once retries are exhausted
    pub async fn fetch_query(&self, key: &QueryKey) -> AppResult<Value> {
        if let Some(entry) = self.inner.cache.get(key).await {
            if !entry.is_stale(self.inner.config.stale_time) {
                if let Some(data) = entry.data {
                    debug!(%key, "Serving fresh cached value");
                    return Ok(data);
                }
            }
        }
        self.refresh(key).await
    }

    /// Typed [`fetch_query`](Self::fetch_query)
    ///
    /// # Errors
    ///
    /// Returns the fetch error, or a serialization error if the cached value
    /// does not decode as `T`
    pub async fn fetch_query_as<T: DeserializeOwned>(&self, key: &QueryKey) -> AppResult<T> {
        decode_value(self.fetch_query(key).await?)
    }

    /// Stale-while-revalidate read.
    ///
    /// A cached value is returned immediately; when it is stale a background
    /// refetch is started. With nothing cached the call waits for the fetch.
    pub async fn query(&self, key: &QueryKey) -> QueryState<Value> {
        match self.inner.cache.get(key).await {
            Some(entry) if entry.data.is_some() => {
                let is_stale = entry.is_stale(self.inner.config.stale_time);
                let mut is_fetching = entry.is_fetching;
                if is_stale && !is_fetching {
                    drop(self.spawn_refresh(key.clone()));
                    is_fetching = true;
                }
                QueryState::new(entry.data, entry.error, is_stale, is_fetching)
            }
            _ => match self.refresh(key).await {
                Ok(data) => QueryState::new(Some(data), None, false, false),
                Err(error) => QueryState::new(None, Some(error), true, false),
            },
        }
    }

    /// Typed [`query`](Self::query)
    pub async fn query_as<T: DeserializeOwned>(&self, key: &QueryKey) -> QueryState<T> {
        self.query(key).await.decode()
    }

    /// Current state of `key` without fetching
    pub async fn peek(&self, key: &QueryKey) -> QueryState<Value> {
        self.inner.cache.peek(key).await.map_or_else(
            || QueryState::new(None, None, true, false),
            |entry| {
                let is_stale = entry.is_stale(self.inner.config.stale_time);
                QueryState::new(entry.data, entry.error, is_stale, entry.is_fetching)
            },
        )
    }

    /// Refetch `key` in the background if `trigger` applies to it and its value is stale
    pub async fn refetch_on(
        &self,
        key: &QueryKey,
        trigger: RefetchTrigger,
    ) -> Option<JoinHandle<AppResult<Value>>> {
        if !self.options(key).refetches_on(trigger) {
            return None;
        }
        let stale = self
            .inner
            .cache
            .peek(key)
            .await
            .map_or(true, |entry| !entry.is_fetching && entry.is_stale(self.inner.config.stale_time));
        stale.then(|| self.spawn_refresh(key.clone()))
    }

    /// Write a value directly, as if it had just been fetched
    pub async fn set_query_data(&self, key: &QueryKey, data: Value) {
        self.inner.cache.set_data(key, data).await;
    }

    /// Mark every key in `scope` stale; returns how many entries were marked
    pub async fn invalidate_scope(&self, scope: QueryScope) -> u64 {
        match self.inner.cache.invalidate_scope(scope).await {
            Ok(marked) => marked,
            Err(e) => {
                warn!(%scope, error = %e, "Failed to invalidate query scope");
                0
            }
        }
    }

    /// Mark one key stale
    pub async fn invalidate_key(&self, key: &QueryKey) -> bool {
        self.inner.cache.invalidate(key).await
    }

    fn spawn_refresh(&self, key: QueryKey) -> JoinHandle<AppResult<Value>> {
        let client = self.clone();
        tokio::spawn(async move { client.refresh(&key).await })
    }

    fn slot(&self, key: &QueryKey) -> Arc<FetchSlot> {
        self.inner
            .fetches
            .entry(key.to_string())
            .or_default()
            .value()
            .clone()
    }

    /// Fetch `key` from the API, sharing the outcome with concurrent callers
    async fn refresh(&self, key: &QueryKey) -> AppResult<Value> {
        let slot = self.slot(key);
        let seen = slot.completed.load(Ordering::Acquire);
        let _guard = slot.lock.lock().await;

        if slot.completed.load(Ordering::Acquire) != seen {
            if let Some(entry) = self.inner.cache.get(key).await {
                debug!(%key, "Reusing result of concurrent fetch");
                return entry
                    .error
                    .map_or_else(|| Ok(entry.data.unwrap_or(Value::Null)), Err);
            }
        }

        self.inner.cache.set_fetching(key, true).await;
        let options = self.options(key);
        let api = self.inner.api.as_ref();
        let result = run_with_retry(options.retry, self.inner.config.retry_delay, || {
            fetch_from_api(api, key)
        })
        .await;

        let outcome = match result {
            Ok(data) => {
                self.inner.cache.set_data(key, data.clone()).await;
                Ok(data)
            }
            Err(error) if *key == QueryKey::CurrentUser && error.is_unauthorized() => {
                debug!("No active session; current user resolves to none");
                self.inner.cache.set_data(key, Value::Null).await;
                Ok(Value::Null)
            }
            Err(error) => {
                warn!(%key, error = %error, "Query failed");
                self.inner.cache.set_error(key, error.clone()).await;
                self.inner
                    .notifier
                    .error(notification_message(&error, options.error_message));
                Err(error)
            }
        };
        slot.completed.fetch_add(1, Ordering::Release);
        outcome
    }
}

/// Text for an error toast: the server's message, a validation message, or the fallback
#[must_use]
pub fn notification_message(error: &AppError, fallback: &str) -> String {
    if let Some(message) = error.server_message() {
        return message.to_owned();
    }
    if error.code == ErrorCode::ValidationFailed {
        return error.message.clone();
    }
    fallback.to_owned()
}

/// Issue the API call behind `key`
async fn fetch_from_api(api: &dyn RecipeApi, key: &QueryKey) -> AppResult<Value> {
    let value = match key {
        QueryKey::Recipes { search } => serde_json::to_value(api.list_recipes(search).await?)?,
        QueryKey::UserRecipes => serde_json::to_value(api.user_recipes().await?)?,
        QueryKey::Recipe { id } => serde_json::to_value(api.recipe(id).await?)?,
        QueryKey::FavoriteRecipes => serde_json::to_value(api.favorites().await?)?,
        QueryKey::CurrentUser => serde_json::to_value(api.current_user().await?)?,
    };
    Ok(value)
}
