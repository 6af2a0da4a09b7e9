// ABOUTME: HTTP-level tests for ApiClient against an in-process axum stub of the recipe service
// ABOUTME: Covers cookie sessions, envelopes, multipart uploads, path encoding, and error mapping
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use axum::extract::{Multipart, Path, Query};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use common::init_test_logging;
use cookbook_client::api::{ApiClient, RecipeApi, RecipeForm, ThumbnailFile};
use cookbook_client::config::ClientConfig;
use cookbook_client::errors::ErrorCode;
use cookbook_client::models::{Ingredient, LoginRequest, RecipeId, Unit};
use cookbook_client::query::QueryClient;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use url::Url;

const SESSION_COOKIE: &str = "session=abc123";

fn user_json() -> Value {
    json!({ "_id": "u1", "fullName": "Ada Lovelace", "username": "ada", "email": "ada@example.com" })
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|cookies| cookies.contains(SESSION_COOKIE))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "message": "Not authenticated" })),
    )
        .into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body.get("password") != Some(&json!("secret")) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "message": "Invalid credentials" })),
        )
            .into_response();
    }
    (
        [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/; HttpOnly"))],
        Json(json!({ "message": "Logged in", "data": { "user": user_json() } })),
    )
        .into_response()
}

async fn logout() -> Response {
    (
        [(header::SET_COOKIE, "session=; Path=/; Max-Age=0")],
        Json(json!({ "message": "Logged out" })),
    )
        .into_response()
}

async fn current_user(headers: HeaderMap) -> Response {
    if !has_session(&headers) {
        return unauthorized();
    }
    Json(json!({ "data": user_json() })).into_response()
}

async fn list_recipes(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    if !has_session(&headers) {
        return unauthorized();
    }
    let search = params.get("search").cloned().unwrap_or_default();
    Json(json!({
        "data": {
            "recipes": [{ "_id": "r1", "name": format!("Result for {search}"), "postedBy": "u1" }]
        }
    }))
    .into_response()
}

async fn get_recipe(Path(id): Path<String>) -> Response {
    if id == "soup/1" || id == "r1" {
        return Json(json!({
            "data": {
                "recipe": {
                    "_id": id,
                    "name": "Soup",
                    "ingredients": [{ "name": "Water", "quantity": "1", "unit": "l" }],
                    "postedBy": { "_id": "u1", "fullName": "Ada Lovelace" },
                    "createdAt": "2025-03-04T10:00:00Z"
                }
            }
        }))
        .into_response();
    }
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "message": "Recipe not found" })),
    )
        .into_response()
}

async fn create_recipe(mut multipart: Multipart) -> Response {
    let mut fields = HashMap::new();
    let mut thumbnail = None;
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_owned();
        if name == "thumbnailImage" {
            thumbnail = field.file_name().map(str::to_owned);
            field.bytes().await.unwrap();
        } else {
            fields.insert(name, field.text().await.unwrap());
        }
    }
    let ingredients: Value = serde_json::from_str(&fields["ingredients"]).unwrap();
    Json(json!({
        "message": "Recipe created",
        "data": {
            "recipe": {
                "_id": "new1",
                "name": fields["name"],
                "instructions": fields["instructions"],
                "ingredients": ingredients,
                "thumbnailImage": thumbnail.map(|file| format!("https://images.example.com/{file}")),
            }
        }
    }))
    .into_response()
}

async fn remove_favorite(Path(_id): Path<String>) -> Response {
    Json(json!({ "message": "Removed" })).into_response()
}

async fn favorites_unavailable() -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, "<html>maintenance</html>").into_response()
}

fn stub_router() -> Router {
    Router::new()
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/auth/current-user", get(current_user))
        .route("/api/v1/recipes", get(list_recipes))
        .route("/api/v1/recipes/create", post(create_recipe))
        .route("/api/v1/recipes/favorites", get(favorites_unavailable))
        .route("/api/v1/recipes/:id", get(get_recipe))
        .route("/api/v1/recipes/:id/remove-favorite", delete(remove_favorite))
}

async fn spawn_stub() -> Result<SocketAddr> {
    init_test_logging();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, stub_router()).await.unwrap();
    });
    Ok(addr)
}

fn config_for(addr: SocketAddr) -> Result<ClientConfig> {
    Ok(ClientConfig::new(Url::parse(&format!("http://{addr}/api/v1/"))?))
}

async fn signed_in_client(addr: SocketAddr) -> Result<ApiClient> {
    let client = ApiClient::new(&config_for(addr)?)?;
    client
        .login(&LoginRequest::new(Some("ada@example.com"), None, "secret"))
        .await?;
    Ok(client)
}

#[tokio::test]
async fn test_login_establishes_cookie_session() -> Result<()> {
    let addr = spawn_stub().await?;
    let client = ApiClient::new(&config_for(addr)?)?;
    assert_eq!(client.base_url(), format!("http://{addr}/api/v1"));

    let before = client.current_user().await.unwrap_err();
    assert!(before.is_unauthorized());
    assert_eq!(before.message, "Not authenticated");

    let user = client
        .login(&LoginRequest::new(Some("ada@example.com"), None, "secret"))
        .await?
        .expect("login echoes the user");
    assert_eq!(user.username, "ada");

    let current = client.current_user().await?.expect("session is active");
    assert_eq!(current.greeting_name(), "Ada Lovelace");
    Ok(())
}

#[tokio::test]
async fn test_bad_credentials_surface_server_message() -> Result<()> {
    let addr = spawn_stub().await?;
    let client = ApiClient::new(&config_for(addr)?)?;

    let error = client
        .login(&LoginRequest::new(None, Some("ada"), "wrong"))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ServerError);
    assert_eq!(error.status, Some(400));
    assert_eq!(error.server_message(), Some("Invalid credentials"));
    Ok(())
}

#[tokio::test]
async fn test_login_requires_an_identifier() -> Result<()> {
    let addr = spawn_stub().await?;
    let client = ApiClient::new(&config_for(addr)?)?;

    let error = client
        .login(&LoginRequest::new(None, Some(""), "secret"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValidationFailed);
    Ok(())
}

#[tokio::test]
async fn test_search_term_is_url_encoded() -> Result<()> {
    let addr = spawn_stub().await?;
    let client = signed_in_client(addr).await?;

    let recipes = client.list_recipes("mac & cheese").await?;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Result for mac & cheese");
    assert_eq!(recipes[0].author_name(), "Anonymous");
    Ok(())
}

#[tokio::test]
async fn test_recipe_id_is_path_encoded() -> Result<()> {
    let addr = spawn_stub().await?;
    let client = signed_in_client(addr).await?;

    let recipe = client.recipe(&RecipeId::from("soup/1")).await?;
    assert_eq!(recipe.id.as_str(), "soup/1");
    assert_eq!(recipe.author_name(), "Ada Lovelace");
    assert_eq!(recipe.ingredients[0].unit, Unit::Liter);
    Ok(())
}

#[tokio::test]
async fn test_missing_recipe_is_404_with_message() -> Result<()> {
    let addr = spawn_stub().await?;
    let client = signed_in_client(addr).await?;

    let error = client.recipe(&RecipeId::from("nope")).await.unwrap_err();
    assert_eq!(error.status, Some(404));
    assert_eq!(error.message, "Recipe not found");
    Ok(())
}

#[tokio::test]
async fn test_create_recipe_sends_multipart() -> Result<()> {
    let addr = spawn_stub().await?;
    let client = signed_in_client(addr).await?;
    let form = RecipeForm {
        name: "Bread".to_owned(),
        instructions: "<p>Knead</p>".to_owned(),
        ingredients: vec![Ingredient {
            name: "Flour".to_owned(),
            quantity: "500".to_owned(),
            unit: Unit::Gram,
        }],
        thumbnail: Some(ThumbnailFile::new("bread.png", "image/png", vec![1, 2, 3])),
    };

    let created = client.create_recipe(&form).await?;
    assert_eq!(created.id.as_str(), "new1");
    assert_eq!(created.instructions, "<p>Knead</p>");
    assert_eq!(created.ingredients, form.ingredients);
    assert_eq!(
        created.thumbnail_image.as_deref(),
        Some("https://images.example.com/bread.png")
    );
    Ok(())
}

#[tokio::test]
async fn test_non_json_error_body_uses_fallback() -> Result<()> {
    let addr = spawn_stub().await?;
    let client = signed_in_client(addr).await?;

    let error = client.favorites().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::Unknown);
    assert_eq!(error.status, Some(503));
    assert_eq!(error.message, "Fetch favorite recipes failed");
    Ok(())
}

#[tokio::test]
async fn test_empty_success_body_is_accepted() -> Result<()> {
    let addr = spawn_stub().await?;
    let client = signed_in_client(addr).await?;

    client.remove_favorite(&RecipeId::from("r1")).await?;
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() -> Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = ApiClient::new(&config_for(addr)?)?;
    let error = client.list_recipes("").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::NetworkError);
    assert_eq!(error.message, "Fetch recipes failed");
    Ok(())
}

#[tokio::test]
async fn test_logout_ends_session_through_query_client() -> Result<()> {
    let addr = spawn_stub().await?;
    let config = config_for(addr)?;
    let api = ApiClient::new(&config)?;
    let client = QueryClient::from_config(Arc::new(api), &config);

    client
        .login(&LoginRequest::new(None, Some("ada"), "secret"))
        .await?;
    assert!(client.fetch_current_user().await?.is_some());

    client.logout().await?;
    assert_eq!(client.fetch_current_user().await?, None);
    Ok(())
}
