// ABOUTME: HTTP implementation of RecipeApi backed by reqwest with a cookie session
// ABOUTME: Maps transport failures, 401s, and error bodies onto the AppError taxonomy
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Recipe service HTTP client
//!
//! # Example
//! ```rust,no_run
//! use cookbook_client::api::{ApiClient, RecipeApi};
//! use cookbook_client::config::ClientConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config)?;
//! let recipes = client.list_recipes("soup").await?;
//! # Ok(())
//! # }
//! ```

use super::{envelope, ApiOperation, RecipeApi, RecipeForm};
use crate::config::ClientConfig;
use crate::constants::api;
use crate::constants::messages::validation::LOGIN_IDENTIFIER_REQUIRED;
use crate::errors::{AppError, AppResult};
use crate::models::{LoginRequest, Recipe, RecipeId, RegisterRequest, User};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Recipe service client
///
/// Cloning is cheap and clones share the cookie jar, so a session started
/// by one clone is visible to all of them.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Build a client for the configured base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")).with_source(e))?;

        Ok(Self {
            base_url: config.api_url.as_str().trim_end_matches('/').to_owned(),
            http_client,
        })
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, format!("{}{path}", self.base_url))
    }

    fn recipe_path(id: &RecipeId, to_path: fn(&str) -> String) -> String {
        to_path(&urlencoding::encode(id.as_str()))
    }

    /// Send one request and return the decoded body (`Null` when empty)
    async fn send(
        &self,
        operation: ApiOperation,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> AppResult<RequestBuilder> + Send,
    ) -> AppResult<Value> {
        let request = build(self.request(method.clone(), path))?;
        let fallback = operation.fallback_message();

        let response = request.send().await.map_err(|e| {
            warn!(%operation, http.method = %method, http.path = %path, error = %e, "Request did not reach the server");
            AppError::network(fallback).with_source(e)
        })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::network(fallback).with_source(e))?;
        let body: Option<Value> = if bytes.is_empty() {
            None
        } else {
            serde_json::from_slice(&bytes).ok()
        };

        debug!(
            %operation,
            http.method = %method,
            http.path = %path,
            http.status = status.as_u16(),
            "API call completed"
        );

        if status.is_success() {
            return Ok(body.unwrap_or(Value::Null));
        }

        let error = AppError::from_response(status.as_u16(), body, fallback);
        if error.is_unauthorized() {
            debug!(%operation, "Service reported no active session");
        } else {
            warn!(%operation, http.status = status.as_u16(), error = %error, "API call failed");
        }
        Err(error)
    }
}

#[async_trait]
impl RecipeApi for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> AppResult<Option<User>> {
        let body = self
            .send(ApiOperation::Register, Method::POST, api::AUTH_REGISTER, |r| {
                Ok(r.json(request))
            })
            .await?;
        Ok(envelope::optional_user(body))
    }

    async fn login(&self, request: &LoginRequest) -> AppResult<Option<User>> {
        if request.missing_identifier() {
            return Err(AppError::validation(LOGIN_IDENTIFIER_REQUIRED));
        }
        let body = self
            .send(ApiOperation::Login, Method::POST, api::AUTH_LOGIN, |r| {
                Ok(r.json(request))
            })
            .await?;
        Ok(envelope::optional_user(body))
    }

    async fn logout(&self) -> AppResult<()> {
        self.send(ApiOperation::Logout, Method::POST, api::AUTH_LOGOUT, |r| {
            Ok(r.json(&json!({})))
        })
        .await?;
        Ok(())
    }

    async fn current_user(&self) -> AppResult<Option<User>> {
        let body = self
            .send(ApiOperation::CurrentUser, Method::GET, api::AUTH_CURRENT_USER, Ok)
            .await?;
        envelope::current_user(body)
    }

    async fn list_recipes(&self, search: &str) -> AppResult<Vec<Recipe>> {
        let path = format!("{}?search={}", api::RECIPES, urlencoding::encode(search));
        let body = self
            .send(ApiOperation::ListRecipes, Method::GET, &path, Ok)
            .await?;
        envelope::recipe_list(body)
    }

    async fn user_recipes(&self) -> AppResult<Vec<Recipe>> {
        let body = self
            .send(ApiOperation::UserRecipes, Method::GET, api::RECIPES_USER, Ok)
            .await?;
        envelope::recipe_list(body)
    }

    async fn recipe(&self, id: &RecipeId) -> AppResult<Recipe> {
        let path = Self::recipe_path(id, api::recipe);
        let body = self
            .send(ApiOperation::GetRecipe, Method::GET, &path, Ok)
            .await?;
        envelope::recipe(body)
    }

    async fn create_recipe(&self, form: &RecipeForm) -> AppResult<Recipe> {
        let multipart = form.to_multipart()?;
        let body = self
            .send(ApiOperation::CreateRecipe, Method::POST, api::RECIPES_CREATE, |r| {
                Ok(r.multipart(multipart))
            })
            .await?;
        envelope::recipe(body)
    }

    async fn update_recipe(&self, id: &RecipeId, form: &RecipeForm) -> AppResult<Recipe> {
        let path = Self::recipe_path(id, api::recipe);
        let multipart = form.to_multipart()?;
        let body = self
            .send(ApiOperation::UpdateRecipe, Method::PUT, &path, |r| {
                Ok(r.multipart(multipart))
            })
            .await?;
        envelope::recipe(body)
    }

    async fn delete_recipe(&self, id: &RecipeId) -> AppResult<()> {
        let path = Self::recipe_path(id, api::recipe);
        self.send(ApiOperation::DeleteRecipe, Method::DELETE, &path, Ok)
            .await?;
        Ok(())
    }

    async fn add_favorite(&self, id: &RecipeId) -> AppResult<()> {
        let path = Self::recipe_path(id, api::add_favorite);
        self.send(ApiOperation::AddFavorite, Method::POST, &path, Ok)
            .await?;
        Ok(())
    }

    async fn remove_favorite(&self, id: &RecipeId) -> AppResult<()> {
        let path = Self::recipe_path(id, api::remove_favorite);
        self.send(ApiOperation::RemoveFavorite, Method::DELETE, &path, Ok)
            .await?;
        Ok(())
    }

    async fn favorites(&self) -> AppResult<Vec<Recipe>> {
        let body = self
            .send(ApiOperation::ListFavorites, Method::GET, api::RECIPES_FAVORITES, Ok)
            .await?;
        envelope::recipe_list(body)
    }
}
