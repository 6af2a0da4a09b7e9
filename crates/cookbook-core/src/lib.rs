// ABOUTME: Core types and constants for the cookbook recipe catalog client
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cookbook Core
//!
//! Foundation crate providing shared types and constants for the cookbook
//! client. It changes rarely, so the main crate recompiles faster.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: API paths, cache policy, messages and defaults
//! - **models**: User, Recipe, Ingredient and related records

/// Unified error handling system with a small, stable taxonomy
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (User, Recipe, Ingredient, Unit)
pub mod models;
