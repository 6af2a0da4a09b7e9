// ABOUTME: Benchmark fixtures for generating recipe catalogs and instruction documents
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic data generators for benchmarks.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use cookbook_client::models::{Author, AuthorRef, Ingredient, Recipe, RecipeId, Unit};

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// 10 recipes, one search page
    Small,
    /// 100 recipes, a typical catalog
    Medium,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "10_recipes",
            Self::Medium => "100_recipes",
        }
    }
}

const DISHES: [&str; 6] = ["Soup", "Pancakes", "Risotto", "Curry", "Salad", "Stew"];
const INGREDIENTS: [(&str, &str); 5] = [
    ("Flour", "cups"),
    ("Milk", "ml"),
    ("Butter", "g"),
    ("Eggs", "pieces"),
    ("Salt", "to taste"),
];

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Generate one recipe with a few ingredients and paragraph instructions
#[must_use]
pub fn generate_recipe(index: usize) -> Recipe {
    let dish = DISHES[index % DISHES.len()];
    let ingredients = INGREDIENTS
        .iter()
        .take(index % INGREDIENTS.len() + 1)
        .map(|(name, unit)| Ingredient {
            name: (*name).to_owned(),
            quantity: (index % 4 + 1).to_string(),
            unit: Unit::from(*unit),
        })
        .collect();

    Recipe {
        id: RecipeId::from(format!("recipe-{index:05}")),
        name: format!("{dish} No. {index}"),
        instructions: instructions_html(3),
        ingredients,
        thumbnail_image: Some(format!("https://images.example.com/{index}.jpg")),
        posted_by: Some(AuthorRef::Profile(Author {
            full_name: Some(format!("Cook {}", index % 7)),
            ..Author::default()
        })),
        posted_at: Some(base_date() - Duration::days(index as i64)),
        created_at: None,
    }
}

/// Generate a catalog of the requested size
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Vec<Recipe> {
    (0..size.count()).map(generate_recipe).collect()
}

/// Instruction HTML with `paragraphs` formatted paragraphs and a list
#[must_use]
pub fn instructions_html(paragraphs: usize) -> String {
    let mut html = String::new();
    for step in 1..=paragraphs {
        html.push_str(&format!(
            "<p>Step {step}: <strong>stir</strong> gently &nbsp;for <em>two</em> minutes</p>"
        ));
    }
    html.push_str("<ul><li><p>Serve warm</p></li><li><p>Garnish</p></li></ul>");
    html
}
