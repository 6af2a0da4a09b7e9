// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Integration tests for the cookbook-cli binary
// ABOUTME: Tests command structure, help output, and error handling without a live service

//! Integration tests for the cookbook-cli binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::net::TcpListener;
use std::process::Command;

/// Run the CLI with a clean environment and capture its output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_cookbook-cli"))
        .args(args)
        .env_remove("COOKBOOK_API_URL")
        .env_remove("COOKBOOK_EMAIL")
        .env_remove("COOKBOOK_USERNAME")
        .env_remove("COOKBOOK_PASSWORD")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

/// Base URL on a local port nothing listens on
fn closed_api_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api/v1")
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["register", "whoami", "recipes", "favorites", "logout"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
    assert!(stdout.contains("Cookbook recipe catalog CLI"));
}

#[test]
fn test_cli_recipes_help() {
    let (exit_code, stdout, _stderr) = run_cli(&["recipes", "--help"]);

    assert_eq!(exit_code, 0);
    for command in ["list", "show", "create", "delete"] {
        assert!(stdout.contains(command), "Recipes help should mention '{command}'");
    }
}

#[test]
fn test_cli_create_help_documents_ingredient_format() {
    let (exit_code, stdout, _stderr) = run_cli(&["recipes", "create", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("NAME:QUANTITY:UNIT"));
    assert!(stdout.contains("--thumbnail"));
}

#[test]
fn test_cli_requires_a_subcommand() {
    let (exit_code, _stdout, stderr) = run_cli(&[]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_cli_rejects_non_http_api_url() {
    let (exit_code, _stdout, stderr) = run_cli(&["--api-url", "ftp://example.com", "whoami"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Invalid --api-url"));
}

#[test]
fn test_cli_requires_credentials_for_recipes() {
    let url = closed_api_url();
    let (exit_code, _stdout, stderr) = run_cli(&["--api-url", &url, "recipes", "list"]);

    assert_ne!(exit_code, 0);
    assert!(!stderr.is_empty());
}

#[test]
fn test_cli_reports_unreachable_service() {
    let url = closed_api_url();
    let (exit_code, _stdout, stderr) = run_cli(&[
        "--api-url",
        &url,
        "--email",
        "ada@example.com",
        "--password",
        "secret",
        "favorites",
        "list",
    ]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Login failed"), "stderr was: {stderr}");
}

#[test]
fn test_cli_create_reports_invalid_form_before_signing_in() {
    let url = closed_api_url();
    let (exit_code, _stdout, stderr) = run_cli(&[
        "--api-url",
        &url,
        "recipes",
        "create",
        "--name",
        "Soup",
        "--instructions",
        "Boil water",
    ]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("The recipe has problems"));
    assert!(stderr.contains("Recipe was not submitted"));
    assert!(!stderr.contains("Login failed"));
}

#[test]
fn test_cli_create_with_thumbnail_reaches_sign_in() {
    let thumbnail = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
    std::fs::write(thumbnail.path(), [0xFF_u8, 0xD8, 0xFF]).unwrap();
    let thumbnail_path = thumbnail.path().to_string_lossy().into_owned();

    let url = closed_api_url();
    let (exit_code, _stdout, stderr) = run_cli(&[
        "--api-url",
        &url,
        "--username",
        "ada",
        "--password",
        "secret",
        "recipes",
        "create",
        "--name",
        "Tomato Soup",
        "--instructions",
        "Simmer for an hour",
        "--ingredient",
        "Tomatoes:4:pieces",
        "--thumbnail",
        &thumbnail_path,
    ]);

    assert_ne!(exit_code, 0);
    assert!(!stderr.contains("The recipe has problems"));
    assert!(stderr.contains("Login failed"), "stderr was: {stderr}");
}
