// ABOUTME: Login/register form view model
// ABOUTME: Mode toggle resets the fields; submit dispatches login or register
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::query::QueryClient;

/// Which form is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Sign in
    #[default]
    Login,
    /// Sign up
    Register,
}

/// Login/register form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    mode: AuthMode,
    /// Full name, register only
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Username
    pub username: String,
    /// Password
    pub password: String,
    /// Password shown in clear text
    pub show_password: bool,
}

impl AuthForm {
    /// Empty login form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switch mode; switching clears every field
    pub fn set_mode(&mut self, mode: AuthMode) {
        if self.mode == mode {
            return;
        }
        *self = Self {
            mode,
            show_password: self.show_password,
            ..Self::default()
        };
    }

    /// Page subtitle for the mode
    #[must_use]
    pub const fn subtitle(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Welcome back, chef! 👨‍🍳",
            AuthMode::Register => "Join our culinary family 🍳",
        }
    }

    /// Login payload; blank identifiers are omitted
    #[must_use]
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest::new(Some(&self.email), Some(&self.username), self.password.clone())
    }

    /// Registration payload with all four fields
    #[must_use]
    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    /// Submit in the current mode
    ///
    /// # Errors
    ///
    /// Returns the validation or API error; it has already been reported as a notification
    pub async fn submit(&self, client: &QueryClient) -> AppResult<Option<User>> {
        match self.mode {
            AuthMode::Login => client.login(&self.login_request()).await,
            AuthMode::Register => client.register(&self.register_request()).await,
        }
    }
}
