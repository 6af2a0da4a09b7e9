// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment parsing, CLI verbosity levels, and format selection
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cookbook_client::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "cookbook-test");

    let config = LoggingConfig::from_env();

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "cookbook-test");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_default_logging_config() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "cookbook-client");
}

#[test]
fn test_cli_verbosity_levels() {
    let levels: Vec<String> = (0..=3).map(|v| LoggingConfig::for_cli(v).level).collect();
    assert_eq!(levels, ["warn", "info", "debug", "trace"]);
    assert_eq!(LoggingConfig::for_cli(9).format, LogFormat::Compact);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default(" compact "), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}
