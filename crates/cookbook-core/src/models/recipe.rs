// ABOUTME: Recipe, ingredient, and author reference models with lenient decoding
// ABOUTME: Handles optional and loosely populated fields returned by the recipe service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Name shown when a recipe's author cannot be resolved
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Server identifier of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl RecipeId {
    /// Borrow the raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for RecipeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Measurement unit of an ingredient
///
/// The creation form offers a fixed list; anything else the server returns
/// is kept verbatim in [`Unit::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    /// `cup`
    Cup,
    /// `cups`
    Cups,
    /// `tbsp`
    Tablespoon,
    /// `g`
    Gram,
    /// `kg`
    Kilogram,
    /// `ml`
    Milliliter,
    /// `l`
    Liter,
    /// `piece`
    Piece,
    /// `pieces`
    Pieces,
    /// `slice`
    Slice,
    /// `slices`
    Slices,
    /// `to taste`
    ToTaste,
    /// Free-text unit
    Other(String),
}

impl Unit {
    /// Units offered by the recipe creation form, in display order
    pub const COMMON: [Self; 12] = [
        Self::Cup,
        Self::Cups,
        Self::Tablespoon,
        Self::Gram,
        Self::Kilogram,
        Self::Milliliter,
        Self::Liter,
        Self::Piece,
        Self::Pieces,
        Self::Slice,
        Self::Slices,
        Self::ToTaste,
    ];

    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cup => "cup",
            Self::Cups => "cups",
            Self::Tablespoon => "tbsp",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Milliliter => "ml",
            Self::Liter => "l",
            Self::Piece => "piece",
            Self::Pieces => "pieces",
            Self::Slice => "slice",
            Self::Slices => "slices",
            Self::ToTaste => "to taste",
            Self::Other(value) => value,
        }
    }

    /// True for a free-text unit that is empty
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl From<String> for Unit {
    fn from(value: String) -> Self {
        match value.as_str() {
            "cup" => Self::Cup,
            "cups" => Self::Cups,
            "tbsp" => Self::Tablespoon,
            "g" => Self::Gram,
            "kg" => Self::Kilogram,
            "ml" => Self::Milliliter,
            "l" => Self::Liter,
            "piece" => Self::Piece,
            "pieces" => Self::Pieces,
            "slice" => Self::Slice,
            "slices" => Self::Slices,
            "to taste" => Self::ToTaste,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Unit {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// Missing and `null` both decode to the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One line of a recipe's ingredient list
///
/// Every field is optional on the wire; a partial row decodes with blanks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// What to add
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-text amount ("2", "1/2", "a pinch")
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: String,
    /// Measurement unit
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: Unit,
}

/// Populated author record embedded in a recipe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Server identifier
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Registration name, sent by some endpoints instead of `name`
    #[serde(rename = "fullName", default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Author {
    /// First non-blank of name, full name, then username
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        [
            self.name.as_deref(),
            self.full_name.as_deref(),
            self.username.as_deref(),
        ]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|candidate| !candidate.is_empty())
    }
}

/// `postedBy` is either populated or left as a bare identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    /// Populated author document
    Profile(Author),
    /// Unpopulated reference
    Id(String),
}

/// Display name for a recipe author: full name, then username, then "Anonymous"
#[must_use]
pub fn author_display_name(author: Option<&AuthorRef>) -> &str {
    match author {
        Some(AuthorRef::Profile(profile)) => profile.display_name().unwrap_or(ANONYMOUS_AUTHOR),
        Some(AuthorRef::Id(_)) | None => ANONYMOUS_AUTHOR,
    }
}

/// A recipe as returned by the catalog API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Server identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: RecipeId,
    /// Title
    pub name: String,
    /// Instructions as authored in the rich-text editor (HTML)
    #[serde(default)]
    pub instructions: String,
    /// Ordered ingredient list
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Public URL of the uploaded thumbnail
    #[serde(rename = "thumbnailImage", default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_image: Option<String>,
    /// Author reference
    #[serde(rename = "postedBy", default, skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<AuthorRef>,
    /// Explicit publication time
    #[serde(rename = "postedAt", default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
    /// Document creation time
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Author name with the standard fallback chain
    #[must_use]
    pub fn author_name(&self) -> &str {
        author_display_name(self.posted_by.as_ref())
    }

    /// Publication time, falling back to creation time
    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.posted_at.or(self.created_at)
    }

    /// Number of ingredients
    #[must_use]
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_author_fallback_chain() {
        let full = AuthorRef::Profile(Author {
            name: Some("Julia Child".into()),
            username: Some("julia".into()),
            ..Author::default()
        });
        let registered = AuthorRef::Profile(Author {
            full_name: Some("Jacques Pepin".into()),
            username: Some("jacques".into()),
            ..Author::default()
        });
        let handle_only = AuthorRef::Profile(Author {
            name: Some("   ".into()),
            username: Some("julia".into()),
            ..Author::default()
        });
        let empty = AuthorRef::Profile(Author::default());
        let bare = AuthorRef::Id("64f0c".into());

        assert_eq!(author_display_name(Some(&full)), "Julia Child");
        assert_eq!(author_display_name(Some(&registered)), "Jacques Pepin");
        assert_eq!(author_display_name(Some(&handle_only)), "julia");
        assert_eq!(author_display_name(Some(&empty)), ANONYMOUS_AUTHOR);
        assert_eq!(author_display_name(Some(&bare)), ANONYMOUS_AUTHOR);
        assert_eq!(author_display_name(None), ANONYMOUS_AUTHOR);
    }

    #[test]
    fn test_recipe_decodes_loose_payload() {
        let recipe: Recipe = serde_json::from_value(json!({
            "_id": "r1",
            "name": "Shakshuka",
            "instructions": "<p>Simmer.</p>",
            "ingredients": [
                { "name": "eggs", "quantity": "4", "unit": "pieces" },
                { "name": "cumin", "quantity": "1", "unit": "pinch" }
            ],
            "postedBy": "u42",
            "createdAt": "2025-01-05T10:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(recipe.id.as_str(), "r1");
        assert_eq!(recipe.ingredients[0].unit, Unit::Pieces);
        assert_eq!(recipe.ingredients[1].unit, Unit::Other("pinch".into()));
        assert_eq!(recipe.author_name(), ANONYMOUS_AUTHOR);
        assert!(recipe.posted_at.is_none());
        assert!(recipe.published_at().is_some());
    }

    #[test]
    fn test_partial_ingredients_do_not_fail_the_recipe() {
        let recipe: Recipe = serde_json::from_value(json!({
            "_id": "r2",
            "name": "Porridge",
            "ingredients": [
                { "name": "oats", "quantity": "1", "unit": "cup" },
                { "name": "salt" },
                { "quantity": "2", "unit": null }
            ]
        }))
        .unwrap();

        assert_eq!(recipe.ingredient_count(), 3);
        assert_eq!(recipe.ingredients[1].quantity, "");
        assert!(recipe.ingredients[1].unit.is_blank());
        assert_eq!(recipe.ingredients[2].name, "");
        assert_eq!(recipe.ingredients[2].unit, Unit::default());
    }

    #[test]
    fn test_unit_wire_format() {
        assert_eq!(
            serde_json::to_value(Unit::ToTaste).unwrap(),
            json!("to taste")
        );
        assert_eq!(String::from(Unit::Tablespoon), "tbsp");
    }
}
