// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for API paths, cache policy, messages, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Remote API paths
pub mod api;
/// Cache freshness, capacity and retry constants
pub mod cache;
/// Notification and validation messages
pub mod messages;

/// Service identity used in logs
pub mod service_names {
    /// Library/CLI service name
    pub const COOKBOOK_CLIENT: &str = "cookbook-client";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Base URL of the recipe API
    pub const API_URL: &str = "COOKBOOK_API_URL";
    /// HTTP request timeout
    pub const HTTP_TIMEOUT_SECS: &str = "COOKBOOK_HTTP_TIMEOUT_SECS";
    /// Query freshness window
    pub const STALE_TIME_SECS: &str = "COOKBOOK_STALE_TIME_SECS";
    /// Retries for ordinary reads
    pub const QUERY_RETRIES: &str = "COOKBOOK_QUERY_RETRIES";
    /// Base retry backoff
    pub const RETRY_DELAY_MS: &str = "COOKBOOK_RETRY_DELAY_MS";
    /// Cache capacity
    pub const CACHE_MAX_ENTRIES: &str = "COOKBOOK_CACHE_MAX_ENTRIES";
    /// Time before unused entries are collected
    pub const GC_TIME_SECS: &str = "COOKBOOK_GC_TIME_SECS";
    /// Interval of the cache cleanup task
    pub const CACHE_CLEANUP_INTERVAL_SECS: &str = "COOKBOOK_CACHE_CLEANUP_INTERVAL_SECS";
}

/// Default values
pub mod defaults {
    /// Default API base URL for local development
    pub const API_URL: &str = "http://localhost:8000/api/v1";
    /// Default HTTP timeout
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// How long a notification stays visible
    pub const NOTIFICATION_DURATION_MS: u64 = 3_000;
    /// Search input debounce
    pub const SEARCH_DEBOUNCE_MS: u64 = 350;
    /// Notification channel capacity
    pub const NOTIFICATION_CHANNEL_SIZE: usize = 64;
    /// Undo history depth of the instruction editor
    pub const EDITOR_HISTORY_DEPTH: usize = 100;
}

/// Recipe form limits
pub mod limits {
    /// Minimum recipe name length in characters
    pub const RECIPE_NAME_MIN_CHARS: usize = 3;
    /// Instructions value the editor produces for an empty document
    pub const EMPTY_EDITOR_HTML: &str = "<p></p>";
}
