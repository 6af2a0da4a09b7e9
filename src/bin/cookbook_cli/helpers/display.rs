// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for cookbook-cli
// ABOUTME: Provides consistent display functions for users, recipes, form errors, and toasts

use cookbook_client::editor::html::from_html;
use cookbook_client::models::{Recipe, User};
use cookbook_client::notifications::{Notification, NotificationKind};
use cookbook_client::views::format;
use cookbook_client::views::recipe_details::RecipeDetails;
use cookbook_client::views::recipe_form::FormErrors;
use cookbook_client::views::{recipe_ids, RecipeCard};

/// Display the signed-in user
pub fn print_user(user: &User) {
    println!("{}", format::greeting(Some(user)).unwrap_or_default());
    println!("   Username: {}", user.username);
    println!("   Email: {}", user.email);
    println!("   ID: {}", user.id);
}

/// Display recipe cards, marking favorites with a heart
pub fn print_recipe_list(recipes: &[Recipe], favorites: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found");
        return;
    }
    let favorite_ids = recipe_ids(favorites);
    println!("{}", "=".repeat(80));
    for recipe in recipes {
        let card = RecipeCard::new(recipe, &favorite_ids);
        println!(
            "{} {}  [{}]",
            if card.is_favorite { "♥" } else { " " },
            card.name,
            card.id
        );
        println!(
            "    by {} · {} · {} ingredients",
            card.author, card.date, card.ingredient_count
        );
    }
    println!("{}", "=".repeat(80));
    println!("Showing {} recipes", recipes.len());
}

/// Display one recipe in full
pub fn print_recipe(details: &RecipeDetails) {
    let recipe = &details.recipe;
    println!("\n{}", recipe.name);
    println!("{}", "=".repeat(recipe.name.chars().count().max(20)));
    println!("   By: {}", details.author);
    println!("   Posted: {}", details.date);
    if details.is_favorite {
        println!("   ♥ In your favorites");
    }

    println!("\nIngredients ({}):", recipe.ingredient_count());
    for ingredient in &recipe.ingredients {
        println!("• {} {} {}", ingredient.quantity, ingredient.unit, ingredient.name);
    }

    println!("\nInstructions:");
    for block in from_html(&recipe.instructions).blocks() {
        let text = block.text().replace('\u{a0}', " ");
        if !text.trim().is_empty() {
            println!("   {text}");
        }
    }
}

/// Display per-field validation messages
pub fn print_form_errors(errors: &FormErrors) {
    eprintln!("The recipe has problems:");
    for (field, message) in errors.iter() {
        eprintln!("• {field:?}: {message}");
    }
}

/// Display toasts raised by the query layer
pub fn print_notifications(notifications: &[Notification]) {
    for notification in notifications {
        match notification.kind {
            NotificationKind::Success => eprintln!("✔ {}", notification.message),
            NotificationKind::Error => eprintln!("✖ {}", notification.message),
        }
    }
}
