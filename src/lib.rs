// ABOUTME: Main library entry point for the cookbook recipe catalog client
// ABOUTME: API client, query cache, rich-text editor, routing guard, and view models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Cookbook Client
//!
//! Client library for a recipe catalog service: authentication, recipe
//! browsing and search, recipe creation with rich-text instructions, and a
//! per-user favorites list.
//!
//! ## Architecture
//!
//! - **API**: one HTTP call per logical operation, behind the [`api::RecipeApi`] trait
//! - **Cache**: LRU-bounded query cache with glob invalidation and background GC
//! - **Query**: freshness, retries, fetch deduplication, mutation invalidation
//! - **Editor**: document model, formatting commands, undo/redo, HTML sync
//! - **Routing**: route table and authentication gating
//! - **Views**: presentation state for every page, without rendering
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cookbook_client::api::ApiClient;
//! use cookbook_client::config::ClientConfig;
//! use cookbook_client::query::QueryClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let api = ApiClient::new(&config)?;
//!     let client = QueryClient::from_config(Arc::new(api), &config);
//!
//!     let recipes = client.all_recipes("pasta").await;
//!     println!("{} recipes", recipes.data.map_or(0, |r| r.len()));
//!     Ok(())
//! }
//! ```

/// Recipe service API: trait, HTTP client, mock
pub mod api;

/// Query cache keys and in-memory store
pub mod cache;

/// Environment-driven configuration
pub mod config;

/// Application constants
pub mod constants;

/// Rich-text instruction editor
pub mod editor;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Domain models
pub mod models;

/// Success and error notifications
pub mod notifications;

/// Cached reads and invalidating writes
pub mod query;

/// Routes and authentication guard
pub mod routing;

/// Page view models
pub mod views;
