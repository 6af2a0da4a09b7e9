// ABOUTME: Cache-related constants for freshness windows, capacity, and garbage collection
// ABOUTME: Defaults mirror the behavior the catalog UI relies on for list and detail reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Freshness window for recipe and user reads (5 minutes)
pub const DEFAULT_STALE_TIME_SECS: u64 = 300;

/// Unused entries are dropped after this long without access (5 minutes)
pub const DEFAULT_GC_TIME_SECS: u64 = 300;

/// Default cleanup interval in seconds for unused entries
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60;

/// Default maximum cache entries
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1_000;

/// Retries for ordinary reads before the error is surfaced
pub const DEFAULT_QUERY_RETRIES: u32 = 3;

/// Retries for the current-user read on non-authorization failures
pub const CURRENT_USER_RETRIES: u32 = 2;

/// Base delay for exponential retry backoff
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;

/// Upper bound for a single retry delay
pub const MAX_RETRY_DELAY_MS: u64 = 30_000;
