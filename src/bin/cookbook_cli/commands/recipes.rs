// ABOUTME: Recipe commands for cookbook-cli
// ABOUTME: Handles list, show, create, and delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, bail};
use cookbook_client::api::ThumbnailFile;
use cookbook_client::editor::document::{Block, BlockKind, Document, Style};
use cookbook_client::editor::html::to_html;
use cookbook_client::models::RecipeId;
use cookbook_client::views::recipe_details::{DetailsSnapshot, RecipeDetailsView};
use cookbook_client::views::recipe_form::{IngredientRow, RecipeDraft};
use std::path::PathBuf;

use super::Session;
use crate::helpers::display::{print_form_errors, print_recipe, print_recipe_list};

/// List all recipes, or only the user's own
pub async fn list(session: &mut Session, search: &str, mine: bool) -> anyhow::Result<()> {
    session.require_user().await?;
    let state = if mine {
        session.client.user_recipes().await
    } else {
        session.client.all_recipes(search).await
    };
    let recipes = state.result()?;
    let favorites = session.client.favorite_recipes().await;
    print_recipe_list(recipes, favorites.data.as_deref().unwrap_or_default());
    Ok(())
}

/// Show one recipe with ingredients and instructions
pub async fn show(session: &mut Session, id: String) -> anyhow::Result<()> {
    session.require_user().await?;
    let view = RecipeDetailsView::new(session.client.clone(), RecipeId::from(id));
    match view.load().await {
        DetailsSnapshot::Loaded(details) => {
            print_recipe(&details);
            Ok(())
        }
        DetailsSnapshot::NotFound => bail!("Recipe not found"),
        DetailsSnapshot::Error(message) => Err(anyhow!(message)),
        DetailsSnapshot::Loading => bail!("Recipe did not load"),
    }
}

/// Validate and upload a new recipe
pub async fn create(
    session: &mut Session,
    name: String,
    instructions: &str,
    ingredients: &[String],
    thumbnail: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut draft = RecipeDraft::new(name, instructions_html(instructions));
    for (index, raw) in ingredients.iter().enumerate() {
        let row = parse_ingredient(raw)?;
        let slot = if index == 0 { 0 } else { draft.add_ingredient() };
        if let Some(target) = draft.ingredient_mut(slot) {
            *target = row;
        }
    }
    if let Some(path) = thumbnail {
        draft.thumbnail = Some(ThumbnailFile::from_path(path).await?);
    }

    let form = match draft.validate() {
        Ok(form) => form,
        Err(errors) => {
            print_form_errors(&errors);
            bail!("Recipe was not submitted");
        }
    };

    session.require_user().await?;
    let recipe = session.client.create_recipe(&form).await?;
    println!("Created recipe {} ({})", recipe.name, recipe.id);
    Ok(())
}

/// Delete a recipe
pub async fn delete(session: &mut Session, id: String) -> anyhow::Result<()> {
    session.require_user().await?;
    session.client.delete_recipe(&RecipeId::from(id)).await?;
    Ok(())
}

/// HTML is passed through; plain text becomes one paragraph per line
fn instructions_html(raw: &str) -> String {
    if raw.trim_start().starts_with('<') {
        return raw.to_owned();
    }
    let blocks = raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Block::with_text(BlockKind::Paragraph, line.trim(), &Style::default()))
        .collect();
    to_html(&Document::from_blocks(blocks))
}

fn parse_ingredient(raw: &str) -> anyhow::Result<IngredientRow> {
    let mut parts = raw.splitn(3, ':').map(str::trim);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(quantity), Some(unit)) => Ok(IngredientRow::new(name, quantity, unit)),
        _ => bail!("Ingredient '{raw}' must look like name:quantity:unit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_instructions_become_paragraphs() {
        assert_eq!(
            instructions_html("Mix flour\n\nFry"),
            "<p>Mix flour</p><p>Fry</p>"
        );
        assert_eq!(instructions_html("<p>Keep</p>"), "<p>Keep</p>");
        assert_eq!(instructions_html("   "), "<p></p>");
    }

    #[test]
    fn test_parse_ingredient() {
        let row = parse_ingredient("flour: 2 :cups").unwrap();
        assert_eq!(row, IngredientRow::new("flour", "2", "cups"));
        assert!(parse_ingredient("flour:2").is_err());
    }
}
