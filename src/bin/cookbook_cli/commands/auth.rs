// ABOUTME: Account commands for cookbook-cli
// ABOUTME: Handles register, whoami, and logout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cookbook_client::views::auth_form::{AuthForm, AuthMode};

use super::Session;
use crate::helpers::display::print_user;

/// Create an account from the global credentials
pub async fn register(session: &mut Session, full_name: String) -> anyhow::Result<()> {
    let mut form = AuthForm::new();
    form.set_mode(AuthMode::Register);
    form.full_name = full_name;
    form.email = session.email().to_owned();
    form.username = session.username().to_owned();
    form.password = session.password().to_owned();

    form.submit(&session.client).await?;
    match session.client.fetch_current_user().await? {
        Some(user) => print_user(&user),
        None => println!("Registered. Sign in to continue."),
    }
    Ok(())
}

/// Show the signed-in user
pub async fn whoami(session: &mut Session) -> anyhow::Result<()> {
    let user = session.require_user().await?;
    print_user(&user);
    Ok(())
}

/// Sign in, then end the session
pub async fn logout(session: &mut Session) -> anyhow::Result<()> {
    session.require_user().await?;
    session.client.logout().await?;
    session.forget_user();
    Ok(())
}
