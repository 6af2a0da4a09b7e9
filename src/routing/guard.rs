// ABOUTME: Authentication guard deciding whether a route renders, waits, or redirects
// ABOUTME: Derives the auth state from the current-user query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Route;
use crate::models::User;
use crate::query::{QueryClient, QueryState, QueryStatus};

/// Placeholder shown on protected routes while the session is resolved
pub const CHECKING_AUTHENTICATION: &str = "Checking authentication...";
/// Placeholder shown on the auth page while the session is resolved
pub const LOADING: &str = "Loading...";

/// Session state as seen by the guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// The current-user read has not settled
    Checking,
    /// A user is signed in
    Authenticated(User),
    /// No session, or the current-user read failed
    Unauthenticated,
}

impl AuthState {
    /// Derive from the current-user query state.
    ///
    /// A recorded error means unauthenticated even when an earlier user is
    /// still cached.
    #[must_use]
    pub fn from_query(state: &QueryState<Option<User>>) -> Self {
        match (&state.data, &state.error, state.status) {
            (_, Some(_), _) => Self::Unauthenticated,
            (Some(Some(user)), None, _) => Self::Authenticated(user.clone()),
            (None, None, QueryStatus::Pending) => Self::Checking,
            _ => Self::Unauthenticated,
        }
    }

    /// Signed-in user, if any
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Checking | Self::Unauthenticated => None,
        }
    }

    /// Resolve the session through the query layer
    pub async fn load(client: &QueryClient) -> Self {
        Self::from_query(&client.current_user().await)
    }
}

/// What to show for a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested page
    Render,
    /// Show a placeholder message
    Loading(&'static str),
    /// Navigate elsewhere
    Redirect(Route),
}

/// Gate for pages that need a signed-in user
#[must_use]
pub fn protected(auth: &AuthState) -> GuardDecision {
    match auth {
        AuthState::Checking => GuardDecision::Loading(CHECKING_AUTHENTICATION),
        AuthState::Authenticated(_) => GuardDecision::Render,
        AuthState::Unauthenticated => GuardDecision::Redirect(Route::Auth),
    }
}

/// Gate for the auth page
#[must_use]
pub fn public(auth: &AuthState) -> GuardDecision {
    match auth {
        AuthState::Checking => GuardDecision::Loading(LOADING),
        AuthState::Authenticated(_) => GuardDecision::Redirect(Route::Home),
        AuthState::Unauthenticated => GuardDecision::Render,
    }
}

/// Decide a navigation to `path`; unknown paths go to the auth page
#[must_use]
pub fn resolve(path: &str, auth: &AuthState) -> (Option<Route>, GuardDecision) {
    let Some(route) = Route::parse(path) else {
        tracing::debug!(path, "Unknown route, redirecting to auth");
        return (None, GuardDecision::Redirect(Route::Auth));
    };
    let decision = if route.is_protected() {
        protected(auth)
    } else {
        public(auth)
    };
    (Some(route), decision)
}
