// ABOUTME: Core data models for the recipe catalog
// ABOUTME: Re-exports User, Recipe, Ingredient, Unit and author reference types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Typed records for the loosely shaped JSON the recipe service returns.
//! Optional fields are explicit and every display fallback is a pure function
//! so it can be tested in isolation.

mod recipe;
mod user;

pub use recipe::{
    author_display_name, Author, AuthorRef, Ingredient, Recipe, RecipeId, Unit, ANONYMOUS_AUTHOR,
};
pub use user::{LoginRequest, RegisterRequest, User};
