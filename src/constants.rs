// ABOUTME: Client-wide constants re-exported from cookbook-core
// ABOUTME: API paths, cache windows, messages, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use cookbook_core::constants::*;
