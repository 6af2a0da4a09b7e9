// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, sample users and recipes, and mock-backed query clients
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `cookbook_client`

use cookbook_client::api::MockRecipeApi;
use cookbook_client::cache::{CacheConfig, QueryCache};
use cookbook_client::models::{Author, AuthorRef, Ingredient, Recipe, RecipeId, Unit, User};
use cookbook_client::notifications::Notifier;
use cookbook_client::query::{QueryClient, QueryConfig};
use std::sync::{Arc, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Signed-in test user
pub fn test_user() -> User {
    User {
        id: "user-ada".to_owned(),
        full_name: Some("Ada Lovelace".to_owned()),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
    }
}

/// Recipe authored by [`test_user`]
pub fn sample_recipe(id: &str, name: &str) -> Recipe {
    let user = test_user();
    Recipe {
        id: RecipeId::from(id),
        name: name.to_owned(),
        instructions: "<p>Mix and cook</p>".to_owned(),
        ingredients: vec![Ingredient {
            name: "Flour".to_owned(),
            quantity: "2".to_owned(),
            unit: Unit::Cups,
        }],
        thumbnail_image: Some(format!("https://images.example.com/{id}.jpg")),
        posted_by: Some(AuthorRef::Profile(Author {
            id: Some(user.id.clone()),
            full_name: user.full_name.clone(),
            username: Some(user.username),
            ..Author::default()
        })),
        posted_at: None,
        created_at: None,
    }
}

/// Catalog used by most tests
pub fn sample_catalog() -> Vec<Recipe> {
    vec![
        sample_recipe("r1", "Tomato Soup"),
        sample_recipe("r2", "Pancakes"),
        sample_recipe("r3", "Mushroom Soup"),
    ]
}

/// Cache without the background collector
pub fn test_cache_config() -> CacheConfig {
    CacheConfig {
        max_entries: 100,
        cleanup_interval: Duration::from_secs(3600),
        enable_background_cleanup: false,
        ..CacheConfig::default()
    }
}

/// Query client over `api` with default freshness and retry settings
pub fn query_client(api: Arc<MockRecipeApi>) -> QueryClient {
    query_client_with(api, QueryConfig::default())
}

/// Query client over `api` with custom settings
pub fn query_client_with(api: Arc<MockRecipeApi>, config: QueryConfig) -> QueryClient {
    init_test_logging();
    QueryClient::new(
        api,
        QueryCache::new(&test_cache_config()),
        Notifier::new(),
        config,
    )
}

/// Signed-in mock with the sample catalog
pub fn signed_in_mock() -> Arc<MockRecipeApi> {
    Arc::new(MockRecipeApi::signed_in(test_user()).with_recipes(sample_catalog()))
}
