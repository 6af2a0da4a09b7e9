// ABOUTME: Favorite commands for cookbook-cli
// ABOUTME: Handles list, add, and remove
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cookbook_client::models::RecipeId;
use cookbook_client::views::favorites::summary;

use super::Session;
use crate::helpers::display::print_recipe_list;

/// List favorite recipes
pub async fn list(session: &mut Session) -> anyhow::Result<()> {
    session.require_user().await?;
    let state = session.client.favorite_recipes().await;
    let favorites = state.result()?;
    println!("{}", summary("", favorites.len(), favorites.len()));
    print_recipe_list(favorites, favorites);
    Ok(())
}

/// Add a recipe to the favorites
pub async fn add(session: &mut Session, id: String) -> anyhow::Result<()> {
    session.require_user().await?;
    session.client.add_favorite(&RecipeId::from(id)).await?;
    Ok(())
}

/// Remove a recipe from the favorites
pub async fn remove(session: &mut Session, id: String) -> anyhow::Result<()> {
    session.require_user().await?;
    session.client.remove_favorite(&RecipeId::from(id)).await?;
    Ok(())
}
