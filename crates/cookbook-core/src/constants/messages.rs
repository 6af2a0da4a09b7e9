// ABOUTME: User-facing notification and validation messages
// ABOUTME: Success texts, per-operation failure fallbacks, and form field errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Success notifications emitted after a mutation completes
pub mod success {
    /// Registration
    pub const REGISTERED: &str = "Registered successfully!";
    /// Login
    pub const LOGGED_IN: &str = "Login successful!";
    /// Logout
    pub const LOGGED_OUT: &str = "Logged out successfully!";
    /// Recipe creation
    pub const RECIPE_CREATED: &str = "Recipe created successfully!";
    /// Recipe update
    pub const RECIPE_UPDATED: &str = "Recipe updated successfully!";
    /// Recipe deletion
    pub const RECIPE_DELETED: &str = "Recipe deleted successfully!";
    /// Favorite added
    pub const FAVORITE_ADDED: &str = "Recipe added to favorites!";
    /// Favorite removed
    pub const FAVORITE_REMOVED: &str = "Recipe removed from favorites!";
}

/// Fallback failure messages, used when the server sends no message
pub mod failure {
    /// Registration
    pub const REGISTRATION: &str = "Registration failed";
    /// Login
    pub const LOGIN: &str = "Login failed";
    /// Logout
    pub const LOGOUT: &str = "Logout failed";
    /// Current user read
    pub const FETCH_USER: &str = "Fetch user failed";
    /// Recipe list read
    pub const FETCH_RECIPES: &str = "Fetch recipes failed";
    /// Own recipes read
    pub const FETCH_USER_RECIPES: &str = "Fetch user recipes failed";
    /// Recipe detail read
    pub const FETCH_RECIPE: &str = "Could not load the recipe. Please try again.";
    /// Favorites read
    pub const FETCH_FAVORITES: &str = "Fetch favorite recipes failed";
    /// Recipe creation
    pub const CREATE_RECIPE: &str = "Failed to create recipe.";
    /// Recipe update
    pub const UPDATE_RECIPE: &str = "Failed to update recipe.";
    /// Recipe deletion
    pub const DELETE_RECIPE: &str = "Failed to delete recipe.";
    /// Favorite add
    pub const ADD_FAVORITE: &str = "Failed to add recipe to favorites.";
    /// Favorite removal
    pub const REMOVE_FAVORITE: &str = "Failed to remove recipe from favorites.";
}

/// Inline validation messages for the login and recipe forms
pub mod validation {
    /// Login without any identifier
    pub const LOGIN_IDENTIFIER_REQUIRED: &str = "Email or username is required";
    /// Empty recipe name
    pub const NAME_REQUIRED: &str = "Recipe name is required";
    /// Recipe name shorter than the minimum
    pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters";
    /// Empty ingredient name
    pub const INGREDIENT_NAME_REQUIRED: &str = "Ingredient name is required";
    /// Empty ingredient quantity
    pub const QUANTITY_REQUIRED: &str = "Quantity required";
    /// Empty ingredient unit
    pub const UNIT_REQUIRED: &str = "Unit required";
    /// Empty instructions
    pub const INSTRUCTIONS_REQUIRED: &str = "Instructions are required";
    /// Missing thumbnail
    pub const THUMBNAIL_REQUIRED: &str = "Please upload a recipe photo";
}
