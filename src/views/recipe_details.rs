// ABOUTME: Recipe details page view model
// ABOUTME: Tabs, long-form dates, and the favorite toggle for one recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::format;
use crate::constants::messages::failure;
use crate::errors::AppResult;
use crate::models::{Recipe, RecipeId};
use crate::query::client::notification_message;
use crate::query::QueryClient;

/// Shown while the recipe loads
pub const LOADING_RECIPE: &str = "Loading recipe...";
/// Heading when the recipe does not exist
pub const RECIPE_NOT_FOUND: &str = "Recipe not found";

/// Detail tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    /// Ingredient list
    #[default]
    Ingredients,
    /// Instructions HTML
    Instructions,
}

/// Loaded recipe with its presentation fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetails {
    /// The recipe
    pub recipe: Recipe,
    /// Author display name
    pub author: String,
    /// Long posted date
    pub date: String,
    /// `N ingredients`
    pub ingredient_count: String,
    /// Whether the recipe is a favorite
    pub is_favorite: bool,
    /// Favorite button is shown only with a signed-in user
    pub can_favorite: bool,
    /// Favorite button tooltip
    pub favorite_title: &'static str,
    /// Selected tab
    pub tab: Tab,
}

/// Rendered state of the details page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsSnapshot {
    /// First load in progress
    Loading,
    /// The read failed
    Error(String),
    /// The service has no such recipe
    NotFound,
    /// Recipe to show
    Loaded(Box<RecipeDetails>),
}

/// Details page for one recipe
#[derive(Debug)]
pub struct RecipeDetailsView {
    client: QueryClient,
    id: RecipeId,
    tab: Tab,
}

impl RecipeDetailsView {
    /// Details page for `id`
    #[must_use]
    pub fn new(client: QueryClient, id: RecipeId) -> Self {
        Self {
            client,
            id,
            tab: Tab::default(),
        }
    }

    /// Switch tabs
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Selected tab
    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    /// Load the page
    pub async fn load(&self) -> DetailsSnapshot {
        let state = self.client.recipe_by_id(&self.id).await;
        let recipe = match (state.data, state.error) {
            (Some(recipe), _) => recipe,
            (None, Some(error)) if error.status == Some(404) => return DetailsSnapshot::NotFound,
            (None, Some(error)) => {
                return DetailsSnapshot::Error(notification_message(&error, failure::FETCH_RECIPE));
            }
            (None, None) => return DetailsSnapshot::Loading,
        };
        let is_favorite = self.is_favorite().await;
        let can_favorite = self.client.current_user().await.data.flatten().is_some();
        DetailsSnapshot::Loaded(Box::new(RecipeDetails {
            author: recipe.author_name().to_owned(),
            date: format::long_date(recipe.published_at()),
            ingredient_count: format::ingredient_count(&recipe),
            is_favorite,
            can_favorite,
            favorite_title: if is_favorite {
                "Remove from Favorites"
            } else {
                "Add to Favorites"
            },
            tab: self.tab,
            recipe,
        }))
    }

    /// Add or remove this recipe from the favorites; returns the new state
    ///
    /// # Errors
    ///
    /// Returns the mutation error after it has been reported as a notification
    pub async fn toggle_favorite(&self) -> AppResult<bool> {
        let is_favorite = self.is_favorite().await;
        self.client.toggle_favorite(&self.id, is_favorite).await
    }

    async fn is_favorite(&self) -> bool {
        self.client
            .favorite_recipes()
            .await
            .data
            .is_some_and(|favorites| favorites.iter().any(|recipe| recipe.id == self.id))
    }
}
