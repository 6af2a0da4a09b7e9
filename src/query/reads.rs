// ABOUTME: Typed read helpers over QueryClient for every cached resource
// ABOUTME: Each helper pairs a QueryKey with the model type it decodes to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{QueryClient, QueryState};
use crate::cache::QueryKey;
use crate::errors::AppResult;
use crate::models::{Recipe, RecipeId, User};

impl QueryClient {
    /// All recipes for a server-side search term
    pub async fn all_recipes(&self, search: &str) -> QueryState<Vec<Recipe>> {
        self.query_as(&QueryKey::recipes(search)).await
    }

    /// Recipes written by the signed-in user
    pub async fn user_recipes(&self) -> QueryState<Vec<Recipe>> {
        self.query_as(&QueryKey::UserRecipes).await
    }

    /// One recipe
    pub async fn recipe_by_id(&self, id: &RecipeId) -> QueryState<Recipe> {
        self.query_as(&QueryKey::recipe(id.clone())).await
    }

    /// Favorites of the signed-in user
    pub async fn favorite_recipes(&self) -> QueryState<Vec<Recipe>> {
        self.query_as(&QueryKey::FavoriteRecipes).await
    }

    /// The signed-in user; `Some(None)` once the service says nobody is signed in
    pub async fn current_user(&self) -> QueryState<Option<User>> {
        self.query_as(&QueryKey::CurrentUser).await
    }

    /// Awaited variant of [`current_user`](Self::current_user)
    ///
    /// # Errors
    ///
    /// Returns non-authorization failures once retries are exhausted
    pub async fn fetch_current_user(&self) -> AppResult<Option<User>> {
        self.fetch_query_as(&QueryKey::CurrentUser).await
    }
}
