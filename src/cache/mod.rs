// ABOUTME: Query cache keys, invalidation scopes, and cache configuration
// ABOUTME: Logical keys map every read to a stable string so prefix invalidation can use glob patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory query cache with LRU eviction and background garbage collection
pub mod memory;

pub use memory::{QueryCache, QueryEntry};

use crate::constants::cache::{
    DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CLEANUP_INTERVAL_SECS, DEFAULT_GC_TIME_SECS,
};
use crate::models::RecipeId;
use std::fmt;
use std::time::Duration;

/// Logical key of a cached read.
///
/// The string form is `<scope>:<parameters>`, e.g. `recipes:pasta` or
/// `currentUser:`. Keys sharing a scope are invalidated together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// All recipes, optionally narrowed by a server-side search term
    Recipes {
        /// Search term sent to the server (empty lists everything)
        search: String,
    },
    /// Recipes authored by the current user
    UserRecipes,
    /// A single recipe
    Recipe {
        /// Recipe identifier
        id: RecipeId,
    },
    /// Favorites of the current user
    FavoriteRecipes,
    /// The authenticated user, or none
    CurrentUser,
}

impl QueryKey {
    /// Recipe list key for a search term
    pub fn recipes(search: impl Into<String>) -> Self {
        Self::Recipes {
            search: search.into(),
        }
    }

    /// Single recipe key
    pub fn recipe(id: impl Into<RecipeId>) -> Self {
        Self::Recipe { id: id.into() }
    }

    /// Scope this key belongs to
    #[must_use]
    pub const fn scope(&self) -> QueryScope {
        match self {
            Self::Recipes { .. } => QueryScope::Recipes,
            Self::UserRecipes => QueryScope::UserRecipes,
            Self::Recipe { .. } => QueryScope::Recipe,
            Self::FavoriteRecipes => QueryScope::FavoriteRecipes,
            Self::CurrentUser => QueryScope::CurrentUser,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recipes { search } => write!(f, "{}:{search}", self.scope()),
            Self::Recipe { id } => write!(f, "{}:{id}", self.scope()),
            Self::UserRecipes | Self::FavoriteRecipes | Self::CurrentUser => {
                write!(f, "{}:", self.scope())
            }
        }
    }
}

/// Resource family shared by a set of keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryScope {
    /// `recipes:*`
    Recipes,
    /// `userRecipes:*`
    UserRecipes,
    /// `recipe:*`
    Recipe,
    /// `favoriteRecipes:*`
    FavoriteRecipes,
    /// `currentUser:*`
    CurrentUser,
}

impl QueryScope {
    /// Scope name as it appears in key strings
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recipes => "recipes",
            Self::UserRecipes => "userRecipes",
            Self::Recipe => "recipe",
            Self::FavoriteRecipes => "favoriteRecipes",
            Self::CurrentUser => "currentUser",
        }
    }

    /// Glob pattern matching every key of this scope
    #[must_use]
    pub fn pattern(&self) -> String {
        format!("{}:*", glob::Pattern::escape(self.as_str()))
    }
}

impl fmt::Display for QueryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries kept before LRU eviction
    pub max_entries: usize,
    /// How often the garbage collector runs
    pub cleanup_interval: Duration,
    /// Entries not read for this long are dropped by the collector
    pub gc_time: Duration,
    /// Enable background cleanup task (should be false in tests to avoid runtime conflicts)
    pub enable_background_cleanup: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
            gc_time: Duration::from_secs(DEFAULT_GC_TIME_SECS),
            enable_background_cleanup: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_strings() {
        assert_eq!(QueryKey::recipes("").to_string(), "recipes:");
        assert_eq!(QueryKey::recipes("pasta").to_string(), "recipes:pasta");
        assert_eq!(QueryKey::UserRecipes.to_string(), "userRecipes:");
        assert_eq!(QueryKey::recipe("abc123").to_string(), "recipe:abc123");
        assert_eq!(QueryKey::FavoriteRecipes.to_string(), "favoriteRecipes:");
        assert_eq!(QueryKey::CurrentUser.to_string(), "currentUser:");
    }

    #[test]
    fn test_scope_patterns_do_not_overlap() {
        let recipe = glob::Pattern::new(&QueryScope::Recipe.pattern()).unwrap();
        let recipes = glob::Pattern::new(&QueryScope::Recipes.pattern()).unwrap();

        assert!(recipe.matches("recipe:abc"));
        assert!(!recipe.matches("recipes:abc"));
        assert!(recipes.matches("recipes:"));
        assert!(recipes.matches("recipes:chicken soup"));
        assert!(!recipes.matches("userRecipes:"));
    }
}
