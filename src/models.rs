// ABOUTME: Domain models re-exported from cookbook-core
// ABOUTME: User, Recipe, Ingredient, Unit, and author references
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use cookbook_core::models::*;
