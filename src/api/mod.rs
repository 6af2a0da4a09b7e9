// ABOUTME: Recipe service API surface: the RecipeApi trait and its HTTP and mock implementations
// ABOUTME: One method per logical operation, each mapped to exactly one HTTP call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe API
//!
//! [`RecipeApi`] is the seam between the query layer and the network.
//! [`ApiClient`] talks to the real service over `reqwest` with a cookie
//! session; [`MockRecipeApi`] keeps an in-memory catalog for tests and
//! offline development.
//!
//! No method retries. Retry policy belongs to the query layer.

/// HTTP implementation
pub mod client;
/// Response envelope decoding
pub mod envelope;
/// Multipart recipe form
pub mod forms;
/// In-memory implementation for tests
pub mod mock;

pub use client::ApiClient;
pub use forms::{RecipeForm, ThumbnailFile};
pub use mock::MockRecipeApi;

use crate::errors::AppResult;
use crate::models::{LoginRequest, Recipe, RecipeId, RegisterRequest, User};
use async_trait::async_trait;
use std::fmt;

/// Logical operations exposed by the recipe service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    /// `POST /auth/register`
    Register,
    /// `POST /auth/login`
    Login,
    /// `POST /auth/logout`
    Logout,
    /// `GET /auth/current-user`
    CurrentUser,
    /// `GET /recipes?search=`
    ListRecipes,
    /// `GET /recipes/user`
    UserRecipes,
    /// `GET /recipes/:id`
    GetRecipe,
    /// `POST /recipes/create`
    CreateRecipe,
    /// `PUT /recipes/:id`
    UpdateRecipe,
    /// `DELETE /recipes/:id`
    DeleteRecipe,
    /// `POST /recipes/:id/add-favorite`
    AddFavorite,
    /// `DELETE /recipes/:id/remove-favorite`
    RemoveFavorite,
    /// `GET /recipes/favorites`
    ListFavorites,
}

impl ApiOperation {
    /// Message used when the server gives no usable error body
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::Register => "Registration failed",
            Self::Login => "Login failed",
            Self::Logout => "Logout failed",
            Self::CurrentUser => "Fetch user failed",
            Self::ListRecipes => "Fetch recipes failed",
            Self::UserRecipes => "Fetch user recipes failed",
            Self::GetRecipe => "Fetch recipe failed",
            Self::CreateRecipe => "Create recipe failed",
            Self::UpdateRecipe => "Update recipe failed",
            Self::DeleteRecipe => "Delete recipe failed",
            Self::AddFavorite => "Add favorite failed",
            Self::RemoveFavorite => "Remove favorite failed",
            Self::ListFavorites => "Fetch favorite recipes failed",
        }
    }

    /// Stable identifier used in log fields
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Login => "login",
            Self::Logout => "logout",
            Self::CurrentUser => "current_user",
            Self::ListRecipes => "list_recipes",
            Self::UserRecipes => "user_recipes",
            Self::GetRecipe => "get_recipe",
            Self::CreateRecipe => "create_recipe",
            Self::UpdateRecipe => "update_recipe",
            Self::DeleteRecipe => "delete_recipe",
            Self::AddFavorite => "add_favorite",
            Self::RemoveFavorite => "remove_favorite",
            Self::ListFavorites => "list_favorites",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations offered by the recipe service
///
/// Every call carries the session established by `register`/`login`.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Create an account and start a session
    async fn register(&self, request: &RegisterRequest) -> AppResult<Option<User>>;

    /// Start a session.
    ///
    /// # Errors
    ///
    /// Fails with `ValidationFailed` before any network traffic when neither
    /// email nor username is given.
    async fn login(&self, request: &LoginRequest) -> AppResult<Option<User>>;

    /// End the session
    async fn logout(&self) -> AppResult<()>;

    /// The signed-in user; `None` when the service reports no user
    async fn current_user(&self) -> AppResult<Option<User>>;

    /// All recipes, narrowed server-side by `search` when non-empty
    async fn list_recipes(&self, search: &str) -> AppResult<Vec<Recipe>>;

    /// Recipes authored by the signed-in user
    async fn user_recipes(&self) -> AppResult<Vec<Recipe>>;

    /// One recipe
    async fn recipe(&self, id: &RecipeId) -> AppResult<Recipe>;

    /// Upload a new recipe
    async fn create_recipe(&self, form: &RecipeForm) -> AppResult<Recipe>;

    /// Replace an existing recipe
    async fn update_recipe(&self, id: &RecipeId, form: &RecipeForm) -> AppResult<Recipe>;

    /// Delete a recipe
    async fn delete_recipe(&self, id: &RecipeId) -> AppResult<()>;

    /// Add a recipe to the signed-in user's favorites
    async fn add_favorite(&self, id: &RecipeId) -> AppResult<()>;

    /// Remove a recipe from the signed-in user's favorites
    async fn remove_favorite(&self, id: &RecipeId) -> AppResult<()>;

    /// Favorites of the signed-in user
    async fn favorites(&self) -> AppResult<Vec<Recipe>>;
}
