// ABOUTME: Configuration module for the cookbook client
// ABOUTME: Loads API endpoint, HTTP timeout, query freshness, and cache settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-driven client configuration
pub mod environment;

pub use environment::ClientConfig;
