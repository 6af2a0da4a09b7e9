// ABOUTME: Single-shot writes with their invalidation rules and notifications
// ABOUTME: A successful mutation marks dependent reads stale; a failed one leaves the cache alone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::client::notification_message;
use super::QueryClient;
use crate::api::RecipeForm;
use crate::cache::{QueryKey, QueryScope};
use crate::constants::messages::{failure, success};
use crate::errors::AppResult;
use crate::models::{LoginRequest, Recipe, RecipeId, RegisterRequest, User};
use serde_json::Value;
use tracing::{info, warn};

/// A write against the recipe service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Account creation
    Register,
    /// Session start
    Login,
    /// Session end
    Logout,
    /// New recipe
    CreateRecipe,
    /// Edit of an existing recipe
    UpdateRecipe(RecipeId),
    /// Removal of a recipe
    DeleteRecipe(RecipeId),
    /// Favorite added
    AddFavorite(RecipeId),
    /// Favorite removed
    RemoveFavorite(RecipeId),
}

/// What a successful mutation marks stale
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    /// Every key of a scope
    Scope(QueryScope),
    /// One key
    Key(QueryKey),
}

impl Mutation {
    /// Toast shown on success
    #[must_use]
    pub const fn success_message(&self) -> &'static str {
        match self {
            Self::Register => success::REGISTERED,
            Self::Login => success::LOGGED_IN,
            Self::Logout => success::LOGGED_OUT,
            Self::CreateRecipe => success::RECIPE_CREATED,
            Self::UpdateRecipe(_) => success::RECIPE_UPDATED,
            Self::DeleteRecipe(_) => success::RECIPE_DELETED,
            Self::AddFavorite(_) => success::FAVORITE_ADDED,
            Self::RemoveFavorite(_) => success::FAVORITE_REMOVED,
        }
    }

    /// Toast shown on failure when the server gives no message
    #[must_use]
    pub const fn failure_message(&self) -> &'static str {
        match self {
            Self::Register => failure::REGISTRATION,
            Self::Login => failure::LOGIN,
            Self::Logout => failure::LOGOUT,
            Self::CreateRecipe => failure::CREATE_RECIPE,
            Self::UpdateRecipe(_) => failure::UPDATE_RECIPE,
            Self::DeleteRecipe(_) => failure::DELETE_RECIPE,
            Self::AddFavorite(_) => failure::ADD_FAVORITE,
            Self::RemoveFavorite(_) => failure::REMOVE_FAVORITE,
        }
    }

    /// Reads made stale by this mutation succeeding
    #[must_use]
    pub fn invalidations(&self) -> Vec<Invalidation> {
        let recipe_lists = [
            Invalidation::Scope(QueryScope::Recipes),
            Invalidation::Scope(QueryScope::UserRecipes),
        ];
        match self {
            Self::Register | Self::Login | Self::Logout => {
                vec![Invalidation::Scope(QueryScope::CurrentUser)]
            }
            Self::CreateRecipe => recipe_lists.to_vec(),
            Self::UpdateRecipe(id) | Self::DeleteRecipe(id) => {
                let mut invalidations = recipe_lists.to_vec();
                invalidations.push(Invalidation::Key(QueryKey::recipe(id.clone())));
                invalidations
            }
            Self::AddFavorite(_) | Self::RemoveFavorite(_) => {
                vec![Invalidation::Scope(QueryScope::FavoriteRecipes)]
            }
        }
    }
}

impl QueryClient {
    /// Create an account
    ///
    /// # Errors
    ///
    /// Returns the API error; an error notification has already been raised
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<Option<User>> {
        let result = self.api().register(request).await;
        self.settle(Mutation::Register, result).await
    }

    /// Sign in with email and/or username
    ///
    /// # Errors
    ///
    /// Returns a validation error when neither identifier is given, or the API error
    pub async fn login(&self, request: &LoginRequest) -> AppResult<Option<User>> {
        let result = self.api().login(request).await;
        self.settle(Mutation::Login, result).await
    }

    /// Sign out; the current user is set to none before being invalidated
    ///
    /// # Errors
    ///
    /// Returns the API error
    pub async fn logout(&self) -> AppResult<()> {
        let result = self.api().logout().await;
        self.settle(Mutation::Logout, result).await
    }

    /// Upload a new recipe
    ///
    /// # Errors
    ///
    /// Returns the API error
    pub async fn create_recipe(&self, form: &RecipeForm) -> AppResult<Recipe> {
        let result = self.api().create_recipe(form).await;
        self.settle(Mutation::CreateRecipe, result).await
    }

    /// Replace a recipe
    ///
    /// # Errors
    ///
    /// Returns the API error
    pub async fn update_recipe(&self, id: &RecipeId, form: &RecipeForm) -> AppResult<Recipe> {
        let result = self.api().update_recipe(id, form).await;
        self.settle(Mutation::UpdateRecipe(id.clone()), result).await
    }

    /// Delete a recipe
    ///
    /// # Errors
    ///
    /// Returns the API error
    pub async fn delete_recipe(&self, id: &RecipeId) -> AppResult<()> {
        let result = self.api().delete_recipe(id).await;
        self.settle(Mutation::DeleteRecipe(id.clone()), result).await
    }

    /// Add to favorites
    ///
    /// # Errors
    ///
    /// Returns the API error
    pub async fn add_favorite(&self, id: &RecipeId) -> AppResult<()> {
        let result = self.api().add_favorite(id).await;
        self.settle(Mutation::AddFavorite(id.clone()), result).await
    }

    /// Remove from favorites
    ///
    /// # Errors
    ///
    /// Returns the API error
    pub async fn remove_favorite(&self, id: &RecipeId) -> AppResult<()> {
        let result = self.api().remove_favorite(id).await;
        self.settle(Mutation::RemoveFavorite(id.clone()), result).await
    }

    /// Add when not a favorite, remove when it is; returns the new state
    ///
    /// # Errors
    ///
    /// Returns the API error of whichever call was made
    pub async fn toggle_favorite(&self, id: &RecipeId, is_favorite: bool) -> AppResult<bool> {
        if is_favorite {
            self.remove_favorite(id).await?;
            Ok(false)
        } else {
            self.add_favorite(id).await?;
            Ok(true)
        }
    }

    async fn settle<T>(&self, mutation: Mutation, result: AppResult<T>) -> AppResult<T> {
        match result {
            Ok(value) => {
                if mutation == Mutation::Logout {
                    self.set_query_data(&QueryKey::CurrentUser, Value::Null).await;
                }
                for invalidation in mutation.invalidations() {
                    match invalidation {
                        Invalidation::Scope(scope) => {
                            self.invalidate_scope(scope).await;
                        }
                        Invalidation::Key(key) => {
                            self.invalidate_key(&key).await;
                        }
                    }
                }
                info!(?mutation, "Mutation succeeded");
                self.notifier().success(mutation.success_message());
                Ok(value)
            }
            Err(error) => {
                warn!(?mutation, error = %error, "Mutation failed");
                self.notifier()
                    .error(notification_message(&error, mutation.failure_message()));
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_edits_invalidate_lists_and_detail() {
        let id = RecipeId::from("r1");
        let invalidations = Mutation::DeleteRecipe(id.clone()).invalidations();
        assert!(invalidations.contains(&Invalidation::Scope(QueryScope::Recipes)));
        assert!(invalidations.contains(&Invalidation::Scope(QueryScope::UserRecipes)));
        assert!(invalidations.contains(&Invalidation::Key(QueryKey::recipe(id))));
    }

    #[test]
    fn test_favorites_only_touch_favorites() {
        assert_eq!(
            Mutation::AddFavorite(RecipeId::from("r1")).invalidations(),
            vec![Invalidation::Scope(QueryScope::FavoriteRecipes)]
        );
    }

    #[test]
    fn test_auth_mutations_touch_current_user() {
        for mutation in [Mutation::Register, Mutation::Login, Mutation::Logout] {
            assert_eq!(
                mutation.invalidations(),
                vec![Invalidation::Scope(QueryScope::CurrentUser)]
            );
        }
    }
}
