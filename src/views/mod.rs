// ABOUTME: View models for the recipe catalog pages
// ABOUTME: Presentation state derived from the query layer, with no rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # View Models
//!
//! Each page is a struct holding a [`QueryClient`](crate::query::QueryClient)
//! plus its local input state. Loading a view runs the reads the page
//! needs and returns a plain snapshot a front end can draw.

/// Login/register form
pub mod auth_form;
/// Debounced inputs
pub mod debounce;
/// Favorites page
pub mod favorites;
/// Date and name formatting
pub mod format;
/// Recipe list page
pub mod home;
/// Recipe details page
pub mod recipe_details;
/// Recipe creation form
pub mod recipe_form;

use crate::models::{Recipe, RecipeId};
use crate::routing::Route;
use std::collections::HashSet;

/// One recipe tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    /// Recipe identifier
    pub id: RecipeId,
    /// Recipe name
    pub name: String,
    /// Thumbnail URL
    pub thumbnail: Option<String>,
    /// Author display name
    pub author: String,
    /// Short posted date
    pub date: String,
    /// Number of ingredients
    pub ingredient_count: usize,
    /// Whether the recipe is in the user's favorites
    pub is_favorite: bool,
}

impl RecipeCard {
    /// Card for `recipe`
    #[must_use]
    pub fn new(recipe: &Recipe, favorites: &HashSet<RecipeId>) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            thumbnail: recipe.thumbnail_image.clone(),
            author: recipe.author_name().to_owned(),
            date: format::card_date(recipe),
            ingredient_count: recipe.ingredient_count(),
            is_favorite: favorites.contains(&recipe.id),
        }
    }

    /// Details page of this recipe
    #[must_use]
    pub fn route(&self) -> Route {
        Route::RecipeDetails(self.id.clone())
    }
}

/// Ids of a recipe list
#[must_use]
pub fn recipe_ids(recipes: &[Recipe]) -> HashSet<RecipeId> {
    recipes.iter().map(|recipe| recipe.id.clone()).collect()
}

/// Recipes whose name contains `term`, ignoring case
#[must_use]
pub fn filter_by_name<'a>(recipes: &'a [Recipe], term: &str) -> Vec<&'a Recipe> {
    let needle = term.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| recipe.name.to_lowercase().contains(&needle))
        .collect()
}

/// Heading and hint for an empty list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Heading
    pub title: String,
    /// Explanation
    pub hint: String,
}

impl EmptyState {
    fn new(title: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            hint: hint.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, name: &str) -> Recipe {
        serde_json::from_value(serde_json::json!({ "_id": id, "name": name })).unwrap()
    }

    #[test]
    fn test_filter_by_name_ignores_case() {
        let recipes = vec![recipe("1", "Tomato Soup"), recipe("2", "Pancakes")];
        let matches = filter_by_name(&recipes, "SOUP");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Tomato Soup");
        assert_eq!(filter_by_name(&recipes, "").len(), 2);
    }

    #[test]
    fn test_card_marks_favorites() {
        let soup = recipe("1", "Tomato Soup");
        let favorites = recipe_ids(std::slice::from_ref(&soup));
        let card = RecipeCard::new(&soup, &favorites);
        assert!(card.is_favorite);
        assert_eq!(card.author, "Anonymous");
        assert_eq!(card.date, format::UNKNOWN_DATE);
        assert_eq!(card.route(), Route::RecipeDetails(RecipeId::from("1")));
    }
}
