// ABOUTME: Error types for the cookbook client, re-exported from cookbook-core
// ABOUTME: Keeps `crate::errors::AppError` paths stable for the rest of the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The taxonomy lives in `cookbook_core::errors` so it can be shared with
//! any other consumer of the domain types.

pub use cookbook_core::errors::*;
