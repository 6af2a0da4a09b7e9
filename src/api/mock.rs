// ABOUTME: In-memory RecipeApi for tests and offline development
// ABOUTME: Counts calls per operation and can script failures and latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ApiOperation, RecipeApi, RecipeForm};
use crate::constants::messages::validation::LOGIN_IDENTIFIER_REQUIRED;
use crate::errors::{AppError, AppResult};
use crate::models::{Author, AuthorRef, LoginRequest, Recipe, RecipeId, RegisterRequest, User};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use serde_json::json;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
struct MockState {
    accounts: Vec<(User, String)>,
    session: Option<User>,
    recipes: Vec<Recipe>,
    favorites: BTreeSet<String>,
    failures: HashMap<ApiOperation, VecDeque<AppError>>,
    next_id: u64,
}

/// Mock recipe service (no network)
///
/// Recipe endpoints require a session, like the real service: calls made
/// while signed out fail with `Unauthorized`.
#[derive(Default)]
pub struct MockRecipeApi {
    state: Mutex<MockState>,
    calls: DashMap<ApiOperation, usize>,
    latency: Option<Duration>,
}

impl MockRecipeApi {
    /// Empty catalog, nobody signed in
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with `user` already signed in
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        let mock = Self::new();
        mock.with_state(|state| {
            state.accounts.push((user.clone(), String::new()));
            state.session = Some(user);
        });
        mock
    }

    /// Delay every response, to exercise concurrent fetches
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Seed the catalog
    #[must_use]
    pub fn with_recipes(self, recipes: Vec<Recipe>) -> Self {
        self.set_recipes(recipes);
        self
    }

    /// Replace the server-side catalog
    pub fn set_recipes(&self, recipes: Vec<Recipe>) {
        self.with_state(|state| state.recipes = recipes);
    }

    /// Make the next call of `operation` fail with `error`.
    ///
    /// Queued failures are consumed one per call, in order.
    pub fn fail_next(&self, operation: ApiOperation, error: AppError) {
        self.with_state(|state| {
            state
                .failures
                .entry(operation)
                .or_default()
                .push_back(error);
        });
    }

    /// End the session without a logout call, as an expired cookie would
    pub fn expire_session(&self) {
        self.with_state(|state| state.session = None);
    }

    /// Number of calls made to `operation`
    #[must_use]
    pub fn calls(&self, operation: ApiOperation) -> usize {
        self.calls.get(&operation).map_or(0, |count| *count)
    }

    /// Total calls across all operations
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.calls.iter().map(|entry| *entry.value()).sum()
    }

    /// Ids currently favorited
    #[must_use]
    pub fn favorite_ids(&self) -> Vec<String> {
        self.with_state(|state| state.favorites.iter().cloned().collect())
    }

    fn with_state<T>(&self, apply: impl FnOnce(&mut MockState) -> T) -> T {
        let mut guard = self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        apply(&mut guard)
    }

    /// Count the call, wait out the latency, then pop a scripted failure
    async fn enter(&self, operation: ApiOperation) -> AppResult<()> {
        *self.calls.entry(operation).or_insert(0) += 1;
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let scripted = self.with_state(|state| {
            state
                .failures
                .get_mut(&operation)
                .and_then(VecDeque::pop_front)
        });
        scripted.map_or(Ok(()), Err)
    }

    fn session_user(&self) -> AppResult<User> {
        self.with_state(|state| state.session.clone())
            .ok_or_else(|| AppError::unauthorized(Some(json!({ "message": "Not authenticated" }))))
    }

    fn not_found(operation: ApiOperation) -> AppError {
        AppError::from_response(404, Some(json!({ "message": "Recipe not found" })), operation.fallback_message())
    }

    fn recipe_from_form(&self, id: RecipeId, form: &RecipeForm, author: &User) -> Recipe {
        Recipe {
            id,
            name: form.name.clone(),
            instructions: form.instructions.clone(),
            ingredients: form.ingredients.clone(),
            thumbnail_image: form
                .thumbnail
                .as_ref()
                .map(|thumbnail| format!("https://images.example.com/{}", thumbnail.file_name)),
            posted_by: Some(AuthorRef::Profile(Author {
                id: Some(author.id.clone()),
                full_name: author.full_name.clone(),
                username: Some(author.username.clone()),
                ..Author::default()
            })),
            posted_at: Some(Utc::now()),
            created_at: Some(Utc::now()),
        }
    }
}

fn authored_by(recipe: &Recipe, user: &User) -> bool {
    matches!(&recipe.posted_by, Some(AuthorRef::Profile(author)) if author.id.as_deref() == Some(user.id.as_str()))
        || matches!(&recipe.posted_by, Some(AuthorRef::Id(id)) if *id == user.id)
}

#[async_trait]
impl RecipeApi for MockRecipeApi {
    async fn register(&self, request: &RegisterRequest) -> AppResult<Option<User>> {
        self.enter(ApiOperation::Register).await?;
        self.with_state(|state| {
            if state
                .accounts
                .iter()
                .any(|(user, _)| user.username == request.username || user.email == request.email)
            {
                return Err(AppError::from_response(
                    409,
                    Some(json!({ "message": "User already exists" })),
                    ApiOperation::Register.fallback_message(),
                ));
            }
            state.next_id += 1;
            let user = User {
                id: format!("user-{}", state.next_id),
                full_name: Some(request.full_name.clone()),
                username: request.username.clone(),
                email: request.email.clone(),
            };
            state.accounts.push((user.clone(), request.password.clone()));
            state.session = Some(user.clone());
            Ok(Some(user))
        })
    }

    async fn login(&self, request: &LoginRequest) -> AppResult<Option<User>> {
        if request.missing_identifier() {
            return Err(AppError::validation(LOGIN_IDENTIFIER_REQUIRED));
        }
        self.enter(ApiOperation::Login).await?;
        self.with_state(|state| {
            let found = state.accounts.iter().find(|(user, password)| {
                let identifier_matches = request.email.as_deref() == Some(user.email.as_str())
                    || request.username.as_deref() == Some(user.username.as_str());
                identifier_matches && (password.is_empty() || *password == request.password)
            });
            let Some((user, _)) = found else {
                return Err(AppError::from_response(
                    400,
                    Some(json!({ "message": "Invalid credentials" })),
                    ApiOperation::Login.fallback_message(),
                ));
            };
            let user = user.clone();
            state.session = Some(user.clone());
            Ok(Some(user))
        })
    }

    async fn logout(&self) -> AppResult<()> {
        self.enter(ApiOperation::Logout).await?;
        self.with_state(|state| state.session = None);
        Ok(())
    }

    async fn current_user(&self) -> AppResult<Option<User>> {
        self.enter(ApiOperation::CurrentUser).await?;
        self.session_user().map(Some)
    }

    async fn list_recipes(&self, search: &str) -> AppResult<Vec<Recipe>> {
        self.enter(ApiOperation::ListRecipes).await?;
        self.session_user()?;
        let needle = search.trim().to_lowercase();
        Ok(self.with_state(|state| {
            state
                .recipes
                .iter()
                .filter(|recipe| needle.is_empty() || recipe.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }))
    }

    async fn user_recipes(&self) -> AppResult<Vec<Recipe>> {
        self.enter(ApiOperation::UserRecipes).await?;
        let user = self.session_user()?;
        Ok(self.with_state(|state| {
            state
                .recipes
                .iter()
                .filter(|recipe| authored_by(recipe, &user))
                .cloned()
                .collect()
        }))
    }

    async fn recipe(&self, id: &RecipeId) -> AppResult<Recipe> {
        self.enter(ApiOperation::GetRecipe).await?;
        self.session_user()?;
        self.with_state(|state| state.recipes.iter().find(|r| r.id == *id).cloned())
            .ok_or_else(|| Self::not_found(ApiOperation::GetRecipe))
    }

    async fn create_recipe(&self, form: &RecipeForm) -> AppResult<Recipe> {
        self.enter(ApiOperation::CreateRecipe).await?;
        let user = self.session_user()?;
        let id = self.with_state(|state| {
            state.next_id += 1;
            RecipeId(format!("recipe-{}", state.next_id))
        });
        let recipe = self.recipe_from_form(id, form, &user);
        self.with_state(|state| state.recipes.push(recipe.clone()));
        Ok(recipe)
    }

    async fn update_recipe(&self, id: &RecipeId, form: &RecipeForm) -> AppResult<Recipe> {
        self.enter(ApiOperation::UpdateRecipe).await?;
        let user = self.session_user()?;
        let mut updated = self.recipe_from_form(id.clone(), form, &user);
        self.with_state(|state| {
            let existing = state
                .recipes
                .iter_mut()
                .find(|r| r.id == *id)
                .ok_or_else(|| Self::not_found(ApiOperation::UpdateRecipe))?;
            if updated.thumbnail_image.is_none() {
                updated.thumbnail_image = existing.thumbnail_image.clone();
            }
            updated.created_at = existing.created_at;
            *existing = updated.clone();
            Ok(updated)
        })
    }

    async fn delete_recipe(&self, id: &RecipeId) -> AppResult<()> {
        self.enter(ApiOperation::DeleteRecipe).await?;
        self.session_user()?;
        self.with_state(|state| {
            let before = state.recipes.len();
            state.recipes.retain(|r| r.id != *id);
            state.favorites.remove(id.as_str());
            if state.recipes.len() == before {
                Err(Self::not_found(ApiOperation::DeleteRecipe))
            } else {
                Ok(())
            }
        })
    }

    async fn add_favorite(&self, id: &RecipeId) -> AppResult<()> {
        self.enter(ApiOperation::AddFavorite).await?;
        self.session_user()?;
        self.with_state(|state| {
            if !state.recipes.iter().any(|r| r.id == *id) {
                return Err(Self::not_found(ApiOperation::AddFavorite));
            }
            state.favorites.insert(id.as_str().to_owned());
            Ok(())
        })
    }

    async fn remove_favorite(&self, id: &RecipeId) -> AppResult<()> {
        self.enter(ApiOperation::RemoveFavorite).await?;
        self.session_user()?;
        self.with_state(|state| {
            state.favorites.remove(id.as_str());
        });
        Ok(())
    }

    async fn favorites(&self) -> AppResult<Vec<Recipe>> {
        self.enter(ApiOperation::ListFavorites).await?;
        self.session_user()?;
        Ok(self.with_state(|state| {
            state
                .recipes
                .iter()
                .filter(|recipe| state.favorites.contains(recipe.id.as_str()))
                .cloned()
                .collect()
        }))
    }
}
