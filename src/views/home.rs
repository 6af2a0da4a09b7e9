// ABOUTME: Home page view model: searchable recipe list with favorite flags
// ABOUTME: Debounces the search input and filters the server result by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::debounce::Debounced;
use super::{filter_by_name, format, recipe_ids, EmptyState, RecipeCard};
use crate::errors::AppResult;
use crate::query::QueryClient;
use tokio::time::Instant;

/// Shown while the list loads
pub const LOADING_RECIPES: &str = "Loading recipes...";
/// Shown when the list read fails
pub const ERROR_LOADING_RECIPES: &str = "Error loading recipes";

/// What the home page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeContent {
    /// First load in progress
    Loading,
    /// The recipe read failed
    Error(String),
    /// Recipes to show
    Recipes {
        /// Cards after local filtering
        cards: Vec<RecipeCard>,
        /// `Showing N of M recipes`
        summary: String,
        /// Set when no card matches
        empty: Option<EmptyState>,
    },
}

/// Rendered state of the home page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeSnapshot {
    /// `Welcome, <name>!`
    pub greeting: Option<String>,
    /// Settled search term
    pub search: String,
    /// Main content
    pub content: HomeContent,
}

/// Home page
#[derive(Debug)]
pub struct HomeView {
    client: QueryClient,
    search: Debounced<String>,
}

impl HomeView {
    /// Home page backed by `client`
    #[must_use]
    pub const fn new(client: QueryClient) -> Self {
        Self {
            client,
            search: Debounced::search(),
        }
    }

    /// Record a keystroke in the search box
    pub fn set_search(&mut self, term: impl Into<String>, now: Instant) {
        self.search.set(term.into(), now);
    }

    /// Current contents of the search box
    #[must_use]
    pub fn search_input(&self) -> &str {
        self.search.input()
    }

    /// Wait for the search box to settle
    pub async fn settle_search(&mut self) {
        self.search.settle().await;
    }

    /// Load the page as of `now`
    pub async fn load(&mut self, now: Instant) -> HomeSnapshot {
        let term = self.search.poll(now).clone();
        let recipes = self.client.all_recipes(&term).await;
        let favorites = self.client.favorite_recipes().await;
        let user = self.client.current_user().await;

        let content = match (recipes.data, recipes.error) {
            (Some(recipes), _) => {
                let favorite_ids = recipe_ids(favorites.data.as_deref().unwrap_or_default());
                let cards: Vec<RecipeCard> = filter_by_name(&recipes, &term)
                    .into_iter()
                    .map(|recipe| RecipeCard::new(recipe, &favorite_ids))
                    .collect();
                let summary = format!("Showing {} of {} recipes", cards.len(), recipes.len());
                let empty = cards.is_empty().then(|| empty_state(&term));
                HomeContent::Recipes {
                    cards,
                    summary,
                    empty,
                }
            }
            (None, Some(error)) => {
                tracing::debug!(error = %error, "Recipe list unavailable");
                HomeContent::Error(ERROR_LOADING_RECIPES.to_owned())
            }
            (None, None) => HomeContent::Loading,
        };

        HomeSnapshot {
            greeting: format::greeting(user.data.flatten().as_ref()),
            search: term,
            content,
        }
    }

    /// Add or remove a card from the favorites
    ///
    /// # Errors
    ///
    /// Returns the mutation error after it has been reported as a notification
    pub async fn toggle_favorite(&self, card: &RecipeCard) -> AppResult<bool> {
        self.client.toggle_favorite(&card.id, card.is_favorite).await
    }

    /// End the session
    ///
    /// # Errors
    ///
    /// Returns the logout error after it has been reported as a notification
    pub async fn logout(&self) -> AppResult<()> {
        self.client.logout().await
    }
}

fn empty_state(term: &str) -> EmptyState {
    if term.is_empty() {
        EmptyState::new(
            "No recipes yet",
            "Start building your personal recipe collection by adding your first recipe!",
        )
    } else {
        EmptyState::new(
            "No recipes found",
            format!("No recipes match \"{term}\". Try a different search term."),
        )
    }
}
