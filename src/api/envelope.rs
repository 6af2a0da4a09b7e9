// ABOUTME: Decoding of the recipe service's `{ data, message }` response envelope
// ABOUTME: Tolerates the wrapped and bare shapes the service uses for recipes and users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, User};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Top-level response body
#[derive(Debug, Deserialize)]
pub struct Envelope {
    /// Payload, absent or null when there is nothing to return
    #[serde(default)]
    pub data: Value,
    /// Human-readable status message
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// Split a raw body into an envelope; a body without `data` or `message` is bare data
    ///
    /// # Errors
    ///
    /// Returns a serialization error when a wrapped body does not have the envelope shape
    pub fn from_body(body: Value) -> AppResult<Self> {
        if body.get("data").is_some() || body.get("message").is_some() {
            decode(body, "response envelope")
        } else {
            Ok(Self {
                data: body,
                message: None,
            })
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeListBody {
    Wrapped { recipes: Vec<Recipe> },
    Bare(Vec<Recipe>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeBody {
    Wrapped { recipe: Recipe },
    Bare(Recipe),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UserBody {
    Wrapped { user: User },
    Bare(User),
}

fn decode<T: DeserializeOwned>(data: Value, what: &str) -> AppResult<T> {
    serde_json::from_value(data)
        .map_err(|e| AppError::serialization(format!("Malformed {what} payload: {e}")).with_source(e))
}

/// `data.recipes`; a null payload is an empty list
///
/// # Errors
///
/// Returns a serialization error when the payload is not a recipe list
pub fn recipe_list(body: Value) -> AppResult<Vec<Recipe>> {
    let envelope = Envelope::from_body(body)?;
    if envelope.data.is_null() {
        return Ok(Vec::new());
    }
    Ok(match decode::<RecipeListBody>(envelope.data, "recipe list")? {
        RecipeListBody::Wrapped { recipes } | RecipeListBody::Bare(recipes) => recipes,
    })
}

/// `data.recipe`, or `data` itself
///
/// # Errors
///
/// Returns a serialization error when no recipe can be decoded
pub fn recipe(body: Value) -> AppResult<Recipe> {
    let envelope = Envelope::from_body(body)?;
    Ok(match decode::<RecipeBody>(envelope.data, "recipe")? {
        RecipeBody::Wrapped { recipe } | RecipeBody::Bare(recipe) => recipe,
    })
}

/// `data` as the current user; null or absent means no user
///
/// # Errors
///
/// Returns a serialization error when a non-null payload is not a user
pub fn current_user(body: Value) -> AppResult<Option<User>> {
    let envelope = Envelope::from_body(body)?;
    if envelope.data.is_null() {
        return Ok(None);
    }
    Ok(match decode::<UserBody>(envelope.data, "user")? {
        UserBody::Wrapped { user } | UserBody::Bare(user) => Some(user),
    })
}

/// User echoed back by register/login, if the service sent one
#[must_use]
pub fn optional_user(body: Value) -> Option<User> {
    current_user(body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Auth response did not include a user");
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_recipe_list_variants() {
        let wrapped = json!({ "data": { "recipes": [{ "_id": "r1", "name": "Soup" }] } });
        assert_eq!(recipe_list(wrapped).unwrap().len(), 1);

        let empty = json!({ "data": null, "message": "nothing" });
        assert!(recipe_list(empty).unwrap().is_empty());

        let bare = json!({ "data": [{ "_id": "r1", "name": "Soup" }, { "_id": "r2", "name": "Stew" }] });
        assert_eq!(recipe_list(bare).unwrap().len(), 2);
    }

    #[test]
    fn test_recipe_wrapped_or_bare() {
        let wrapped = json!({ "data": { "recipe": { "_id": "r1", "name": "Soup" } } });
        assert_eq!(recipe(wrapped).unwrap().name, "Soup");

        let bare = json!({ "data": { "_id": "r2", "name": "Stew" } });
        assert_eq!(recipe(bare).unwrap().id.as_str(), "r2");
    }

    #[test]
    fn test_current_user_null_is_none() {
        assert_eq!(current_user(json!({ "data": null })).unwrap(), None);
        assert_eq!(current_user(Value::Null).unwrap(), None);

        let user = current_user(json!({ "data": { "_id": "u1", "username": "ada" } }))
            .unwrap()
            .unwrap();
        assert_eq!(user.username, "ada");
    }

    #[test]
    fn test_malformed_envelope_is_serialization_error() {
        let body = json!({ "data": [{ "_id": "r1", "name": "Soup" }], "message": { "code": 7 } });

        let error = recipe_list(body.clone()).unwrap_err();
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(error.message.contains("response envelope"));
        assert!(Envelope::from_body(body).is_err());
    }

    #[test]
    fn test_malformed_recipe_is_serialization_error() {
        let error = recipe(json!({ "data": { "unexpected": true } })).unwrap_err();
        assert_eq!(error.code, ErrorCode::SerializationError);
    }
}
