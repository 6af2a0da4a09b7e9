// ABOUTME: User account model and authentication request payloads
// ABOUTME: User, RegisterRequest, and LoginRequest definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Account of the signed-in user as returned by `/auth/current-user`
///
/// # Examples
///
/// ```rust
/// use cookbook_core::models::User;
///
/// let user: User = serde_json::from_str(
///     r#"{"_id":"u1","fullName":"Ada Lovelace","username":"ada","email":"ada@example.com"}"#,
/// ).unwrap();
/// assert_eq!(user.greeting_name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name chosen at registration
    #[serde(rename = "fullName", default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Unique handle
    #[serde(default)]
    pub username: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Name used in the "Welcome, ...!" greeting: full name, else username
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Contact email
    pub email: String,
    /// Unique handle
    pub username: String,
    /// Plain-text password, sent over TLS only
    pub password: String,
}

/// Body of `POST /auth/login`
///
/// At least one of `email` or `username` must be present; blank strings
/// count as absent and are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Username identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Plain-text password
    pub password: String,
}

impl LoginRequest {
    /// Build a request, dropping blank identifiers
    pub fn new(email: Option<&str>, username: Option<&str>, password: impl Into<String>) -> Self {
        let non_blank = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };
        Self {
            email: non_blank(email),
            username: non_blank(username),
            password: password.into(),
        }
    }

    /// True when neither identifier is usable
    #[must_use]
    pub fn missing_identifier(&self) -> bool {
        let blank = |value: &Option<String>| value.as_deref().map_or(true, |v| v.trim().is_empty());
        blank(&self.email) && blank(&self.username)
    }
}
