// ABOUTME: Favorites page view model
// ABOUTME: Filters the user's favorites locally and builds the summary line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{filter_by_name, recipe_ids, EmptyState, RecipeCard};
use crate::errors::AppResult;
use crate::query::QueryClient;

/// Shown while favorites load
pub const LOADING_FAVORITES: &str = "Loading your favorite recipes...";
/// Shown when the favorites read fails
pub const ERROR_LOADING_FAVORITES: &str = "Error loading favorite recipes";

/// Rendered state of the favorites page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesSnapshot {
    /// First load in progress
    Loading,
    /// The favorites read failed
    Error(String),
    /// Favorites to show
    Loaded {
        /// Cards after local filtering
        cards: Vec<RecipeCard>,
        /// Count line
        summary: String,
        /// Set when no card matches
        empty: Option<EmptyState>,
    },
}

/// Favorites page
#[derive(Debug)]
pub struct FavoritesView {
    client: QueryClient,
    search: String,
}

impl FavoritesView {
    /// Favorites page backed by `client`
    #[must_use]
    pub const fn new(client: QueryClient) -> Self {
        Self {
            client,
            search: String::new(),
        }
    }

    /// Update the local filter
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Empty the local filter
    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Load the page
    pub async fn load(&self) -> FavoritesSnapshot {
        let favorites = self.client.favorite_recipes().await;
        let recipes = match (favorites.data, favorites.error) {
            (Some(recipes), _) => recipes,
            (None, Some(_)) => {
                return FavoritesSnapshot::Error(ERROR_LOADING_FAVORITES.to_owned());
            }
            (None, None) => return FavoritesSnapshot::Loading,
        };

        let ids = recipe_ids(&recipes);
        let cards: Vec<RecipeCard> = filter_by_name(&recipes, &self.search)
            .into_iter()
            .map(|recipe| RecipeCard::new(recipe, &ids))
            .collect();
        let summary = summary(&self.search, cards.len(), recipes.len());
        let empty = if !cards.is_empty() {
            None
        } else if self.search.is_empty() {
            Some(EmptyState::new(
                "No favorite recipes yet",
                "Start exploring recipes and add them to your favorites by clicking the heart icon!",
            ))
        } else {
            Some(EmptyState::new(
                "No matching favorites found",
                format!(
                    "No favorite recipes match \"{}\". Try a different search term.",
                    self.search
                ),
            ))
        };
        FavoritesSnapshot::Loaded {
            cards,
            summary,
            empty,
        }
    }

    /// Remove a card from the favorites
    ///
    /// # Errors
    ///
    /// Returns the mutation error after it has been reported as a notification
    pub async fn remove(&self, card: &RecipeCard) -> AppResult<()> {
        self.client.remove_favorite(&card.id).await
    }
}

/// `Showing N of M favorite recipes` while filtering, else `You have N favorite recipe(s)`
#[must_use]
pub fn summary(search: &str, shown: usize, total: usize) -> String {
    if search.is_empty() {
        let plural = if total == 1 { "" } else { "s" };
        format!("You have {total} favorite recipe{plural}")
    } else {
        format!("Showing {shown} of {total} favorite recipes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_pluralization() {
        assert_eq!(summary("", 1, 1), "You have 1 favorite recipe");
        assert_eq!(summary("", 0, 0), "You have 0 favorite recipes");
        assert_eq!(summary("soup", 1, 4), "Showing 1 of 4 favorite recipes");
    }
}
