// ABOUTME: Client route table for the recipe catalog
// ABOUTME: Parses paths into routes and marks which ones require a signed-in user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Routing
//!
//! Five routes exist. Any other path is treated as unknown and sent to
//! [`Route::Auth`] by [`guard::resolve`].

/// Authentication gating
pub mod guard;

pub use guard::{AuthState, GuardDecision};

use crate::models::RecipeId;
use std::fmt;

/// Client routes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/auth` login/register page
    Auth,
    /// `/` recipe list
    Home,
    /// `/create-recipe`
    CreateRecipe,
    /// `/favourite-recipes`
    FavouriteRecipes,
    /// `/recipe/:id`
    RecipeDetails(RecipeId),
}

impl Route {
    /// Parse a path; query string, fragment and a trailing slash are ignored
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" if path.starts_with('/') => Some(Self::Home),
            "/auth" => Some(Self::Auth),
            "/create-recipe" => Some(Self::CreateRecipe),
            "/favourite-recipes" => Some(Self::FavouriteRecipes),
            other => {
                let id = other.strip_prefix("/recipe/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                let decoded = urlencoding::decode(id).ok()?;
                Some(Self::RecipeDetails(RecipeId::from(decoded.into_owned())))
            }
        }
    }

    /// Path for this route
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Auth => "/auth".to_owned(),
            Self::Home => "/".to_owned(),
            Self::CreateRecipe => "/create-recipe".to_owned(),
            Self::FavouriteRecipes => "/favourite-recipes".to_owned(),
            Self::RecipeDetails(id) => format!("/recipe/{}", urlencoding::encode(id.as_str())),
        }
    }

    /// Whether the route renders only for a signed-in user
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        !matches!(self, Self::Auth)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/auth"), Some(Route::Auth));
        assert_eq!(Route::parse("/create-recipe/"), Some(Route::CreateRecipe));
        assert_eq!(
            Route::parse("/favourite-recipes?tab=1"),
            Some(Route::FavouriteRecipes)
        );
        assert_eq!(
            Route::parse("/recipe/abc123"),
            Some(Route::RecipeDetails(RecipeId::from("abc123")))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert_eq!(Route::parse("/home"), None);
        assert_eq!(Route::parse("/recipe/"), None);
        assert_eq!(Route::parse("/recipe/a/b"), None);
        assert_eq!(Route::parse("recipes"), None);
    }

    #[test]
    fn test_path_round_trips_recipe_ids() {
        let route = Route::RecipeDetails(RecipeId::from("a b"));
        assert_eq!(route.path(), "/recipe/a%20b");
        assert_eq!(Route::parse(&route.path()), Some(route));
    }
}
