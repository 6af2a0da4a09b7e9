// ABOUTME: Command modules for cookbook-cli and the shared session wrapper
// ABOUTME: Session signs in on demand and relays notifications to the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod auth;
pub mod favorites;
pub mod recipes;

use anyhow::bail;
use cookbook_client::models::{LoginRequest, User};
use cookbook_client::notifications::{drain, Notification};
use cookbook_client::query::QueryClient;
use tokio::sync::broadcast;
use tracing::info;

use crate::helpers::display::print_notifications;

/// Query client plus the credentials given on the command line
pub struct Session {
    pub client: QueryClient,
    email: Option<String>,
    username: Option<String>,
    password: Option<String>,
    notifications: broadcast::Receiver<Notification>,
    user: Option<User>,
}

impl Session {
    pub fn new(
        client: QueryClient,
        email: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        let notifications = client.notifier().subscribe();
        Self {
            client,
            email,
            username,
            password,
            notifications,
            user: None,
        }
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }

    /// Sign in with the command-line credentials unless already signed in
    pub async fn require_user(&mut self) -> anyhow::Result<User> {
        if let Some(user) = &self.user {
            return Ok(user.clone());
        }
        if self.password.is_none() {
            bail!("This command needs --password (or COOKBOOK_PASSWORD) with --email or --username");
        }
        let request = LoginRequest::new(
            self.email.as_deref(),
            self.username.as_deref(),
            self.password(),
        );
        self.client.login(&request).await?;
        let Some(user) = self.client.fetch_current_user().await? else {
            bail!("Signed in, but the service reports no current user");
        };
        info!(user_id = %user.id, "Signed in");
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Forget the cached user after logout
    pub fn forget_user(&mut self) {
        self.user = None;
    }

    /// Print toasts raised so far
    pub fn flush_notifications(&mut self) {
        print_notifications(&drain(&mut self.notifications));
    }
}
