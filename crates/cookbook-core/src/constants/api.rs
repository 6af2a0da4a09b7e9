// ABOUTME: Remote API paths consumed by the cookbook client
// ABOUTME: Static paths as constants, parameterized paths as small builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Endpoint paths relative to the configured base URL.

/// Register a new account
pub const AUTH_REGISTER: &str = "/auth/register";
/// Start a session
pub const AUTH_LOGIN: &str = "/auth/login";
/// End the session
pub const AUTH_LOGOUT: &str = "/auth/logout";
/// Current session's user
pub const AUTH_CURRENT_USER: &str = "/auth/current-user";
/// Recipe collection (accepts `search`)
pub const RECIPES: &str = "/recipes";
/// Recipes authored by the current user
pub const RECIPES_USER: &str = "/recipes/user";
/// Recipe creation (multipart)
pub const RECIPES_CREATE: &str = "/recipes/create";
/// Favorite recipes of the current user
pub const RECIPES_FAVORITES: &str = "/recipes/favorites";

/// Multipart field names for recipe create/update
pub mod form_fields {
    /// Recipe name
    pub const NAME: &str = "name";
    /// Instructions HTML
    pub const INSTRUCTIONS: &str = "instructions";
    /// JSON-encoded ingredient array
    pub const INGREDIENTS: &str = "ingredients";
    /// Thumbnail image file
    pub const THUMBNAIL_IMAGE: &str = "thumbnailImage";
}

/// `/recipes/:id`
#[must_use]
pub fn recipe(id: &str) -> String {
    format!("{RECIPES}/{id}")
}

/// `/recipes/:id/add-favorite`
#[must_use]
pub fn add_favorite(id: &str) -> String {
    format!("{RECIPES}/{id}/add-favorite")
}

/// `/recipes/:id/remove-favorite`
#[must_use]
pub fn remove_favorite(id: &str) -> String {
    format!("{RECIPES}/{id}/remove-favorite")
}
