// ABOUTME: In-memory query cache with LRU eviction, staleness tracking, and glob invalidation
// ABOUTME: Includes background garbage collection of entries nobody has read recently
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{CacheConfig, QueryKey, QueryScope};
use crate::errors::{AppError, AppResult};
use lru::LruCache;
use serde_json::Value;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

type Store = Arc<RwLock<LruCache<String, QueryEntry>>>;

/// State of one cached read
#[derive(Debug, Clone)]
pub struct QueryEntry {
    /// Last successfully fetched value
    pub data: Option<Value>,
    /// When `data` was last written
    pub updated_at: Option<Instant>,
    /// Set by invalidation; cleared by the next successful write
    pub invalidated: bool,
    /// Error from the most recent failed fetch
    pub error: Option<AppError>,
    /// A fetch for this key is in flight
    pub is_fetching: bool,
    /// Last time anyone read or wrote this entry
    pub last_accessed: Instant,
}

impl QueryEntry {
    fn empty() -> Self {
        Self {
            data: None,
            updated_at: None,
            invalidated: false,
            error: None,
            is_fetching: false,
            last_accessed: Instant::now(),
        }
    }

    /// True when the entry has no value, was invalidated, or is older than `stale_time`
    #[must_use]
    pub fn is_stale(&self, stale_time: Duration) -> bool {
        if self.data.is_none() || self.invalidated {
            return true;
        }
        self.updated_at
            .map_or(true, |at| at.elapsed() >= stale_time)
    }

    fn is_collectable(&self, gc_time: Duration) -> bool {
        !self.is_fetching && self.last_accessed.elapsed() >= gc_time
    }
}

/// In-memory query cache with LRU eviction and background cleanup
///
/// Uses `Arc<RwLock<LruCache>>` so the garbage collection task can share the
/// store with readers. Invalidation never removes data: entries are only
/// flagged so the next read refetches while the last value stays visible.
#[derive(Clone)]
pub struct QueryCache {
    store: Store,
    gc_time: Duration,
    shutdown_tx: Option<Arc<tokio::sync::mpsc::Sender<()>>>,
}

impl QueryCache {
    /// Default cache capacity when config specifies zero entries
    const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache, spawning the garbage collector when enabled.
    ///
    /// Must be called inside a tokio runtime when background cleanup is on.
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        let capacity =
            NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CACHE_CAPACITY);
        let store: Store = Arc::new(RwLock::new(LruCache::new(capacity)));
        let gc_time = config.gc_time;

        let shutdown_tx = if config.enable_background_cleanup {
            let (shutdown_tx, mut shutdown_rx) = tokio::sync::mpsc::channel::<()>(1);
            let store_clone = store.clone();
            let cleanup_interval = config.cleanup_interval;

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(cleanup_interval);
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            Self::collect_from(&store_clone, gc_time).await;
                        }
                        _ = shutdown_rx.recv() => {
                            tracing::debug!("Query cache cleanup task received shutdown signal");
                            break;
                        }
                    }
                }
            });

            Some(Arc::new(shutdown_tx))
        } else {
            None
        };

        Self {
            store,
            gc_time,
            shutdown_tx,
        }
    }

    async fn collect_from(store: &Store, gc_time: Duration) -> usize {
        let mut store_guard = store.write().await;

        let unused_keys: Vec<String> = store_guard
            .iter()
            .filter(|(_, entry)| entry.is_collectable(gc_time))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &unused_keys {
            store_guard.pop(key);
        }
        drop(store_guard);

        let removed = unused_keys.len();
        if removed > 0 {
            tracing::debug!("Garbage collected {} unused query cache entries", removed);
        }
        removed
    }

    /// Drop every entry not accessed within the configured `gc_time`
    pub async fn collect_garbage(&self) -> usize {
        Self::collect_from(&self.store, self.gc_time).await
    }

    /// Copy of the entry for `key`, marking it as accessed
    pub async fn get(&self, key: &QueryKey) -> Option<QueryEntry> {
        let mut store = self.store.write().await;
        let entry = store.get_mut(&key.to_string())?;
        entry.last_accessed = Instant::now();
        Some(entry.clone())
    }

    /// Copy of the entry for `key` without touching LRU order or access time
    pub async fn peek(&self, key: &QueryKey) -> Option<QueryEntry> {
        self.store.read().await.peek(&key.to_string()).cloned()
    }

    /// Last value stored for `key`
    pub async fn data(&self, key: &QueryKey) -> Option<Value> {
        self.get(key).await.and_then(|entry| entry.data)
    }

    async fn update<F>(&self, key: &QueryKey, apply: F)
    where
        F: FnOnce(&mut QueryEntry),
    {
        let key = key.to_string();
        let mut store = self.store.write().await;
        if let Some(entry) = store.get_mut(&key) {
            apply(entry);
            entry.last_accessed = Instant::now();
        } else {
            let mut entry = QueryEntry::empty();
            apply(&mut entry);
            store.push(key, entry);
        }
    }

    /// Store a freshly fetched value, clearing error and invalidation
    pub async fn set_data(&self, key: &QueryKey, data: Value) {
        self.update(key, |entry| {
            entry.data = Some(data);
            entry.updated_at = Some(Instant::now());
            entry.invalidated = false;
            entry.error = None;
            entry.is_fetching = false;
        })
        .await;
    }

    /// Record a failed fetch; the last value is kept
    pub async fn set_error(&self, key: &QueryKey, error: AppError) {
        self.update(key, |entry| {
            entry.error = Some(error);
            entry.is_fetching = false;
        })
        .await;
    }

    /// Flag whether a fetch for `key` is in flight
    pub async fn set_fetching(&self, key: &QueryKey, fetching: bool) {
        self.update(key, |entry| entry.is_fetching = fetching).await;
    }

    /// Mark one entry stale. Returns false when the key is not cached.
    pub async fn invalidate(&self, key: &QueryKey) -> bool {
        let mut store = self.store.write().await;
        store.peek_mut(&key.to_string()).is_some_and(|entry| {
            entry.invalidated = true;
            true
        })
    }

    /// Mark every entry whose key matches the glob `pattern` stale
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob
    pub async fn invalidate_pattern(&self, pattern: &str) -> AppResult<u64> {
        let glob_pattern = glob::Pattern::new(pattern)
            .map_err(|e| AppError::internal(format!("Invalid glob pattern '{pattern}': {e}")))?;

        let mut store = self.store.write().await;
        let mut marked = 0_u64;
        for (key, entry) in store.iter_mut() {
            if glob_pattern.matches(key) {
                entry.invalidated = true;
                marked += 1;
            }
        }
        drop(store);

        tracing::debug!(pattern = %pattern, marked, "Invalidated query cache entries");
        Ok(marked)
    }

    /// Mark every entry of `scope` stale
    ///
    /// # Errors
    ///
    /// Returns an error if the scope pattern cannot be compiled
    pub async fn invalidate_scope(&self, scope: QueryScope) -> AppResult<u64> {
        self.invalidate_pattern(&scope.pattern()).await
    }

    /// Remove one entry entirely
    pub async fn remove(&self, key: &QueryKey) -> Option<QueryEntry> {
        self.store.write().await.pop(&key.to_string())
    }

    /// Remove everything
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    /// Number of cached entries
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// True when nothing is cached
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl Drop for QueryCache {
    fn drop(&mut self) {
        // Only the last clone holding the sender stops the task
        if let Some(tx) = &self.shutdown_tx {
            if Arc::strong_count(tx) == 1 {
                if let Err(e) = tx.try_send(()) {
                    tracing::debug!(error = ?e, "Cache shutdown signal send failed (channel likely closed)");
                }
            }
        }
    }
}
