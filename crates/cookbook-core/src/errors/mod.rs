// ABOUTME: Unified error handling for the cookbook client with a small, stable error taxonomy
// ABOUTME: Defines ErrorCode, AppError, and helpers for extracting server-provided error payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the client returns [`AppResult`]. Errors carry a
//! stable [`ErrorCode`], a human-readable message suitable for a notification,
//! the HTTP status when one was received, and the raw server payload when the
//! service answered with a structured body.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Standard error codes used throughout the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The request never reached the server (DNS, connect, timeout, TLS)
    #[serde(rename = "NETWORK_ERROR")]
    NetworkError,
    /// The server answered 401
    #[serde(rename = "UNAUTHORIZED")]
    Unauthorized,
    /// A required field was missing or malformed before any request was made
    #[serde(rename = "VALIDATION_FAILED")]
    ValidationFailed,
    /// Non-2xx response with a structured error payload
    #[serde(rename = "SERVER_ERROR")]
    ServerError,
    /// Non-2xx response without a usable payload
    #[serde(rename = "UNKNOWN_ERROR")]
    Unknown,
    /// Client configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// A payload could not be serialized or deserialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NetworkError => "The server could not be reached",
            Self::Unauthorized => "Authentication is required",
            Self::ValidationFailed => "The provided input is invalid",
            Self::ServerError => "The server rejected the request",
            Self::Unknown => "The request failed",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the client
#[derive(Debug, Clone, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// HTTP status code when the server answered
    pub status: Option<u16>,
    /// Raw error body returned by the server
    pub payload: Option<Value>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
            payload: None,
            source: None,
        }
    }

    /// Attach the HTTP status code
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the raw server payload
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// True when the server answered 401
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.code == ErrorCode::Unauthorized
    }

    /// Message extracted from the server payload, if there is one
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        self.payload.as_ref().and_then(payload_message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Pull the human message out of a server error body.
///
/// The service reports failures as `{ "message": "..." }`; some middleware
/// uses `{ "error": "..." }` instead.
#[must_use]
pub fn payload_message(payload: &Value) -> Option<&str> {
    payload
        .get("message")
        .or_else(|| payload.get("error"))
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
}

/// Convenience functions for creating common errors
impl AppError {
    /// Request failed before reaching the server
    pub fn network(operation_fallback: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkError, operation_fallback)
    }

    /// Server answered 401; the payload message wins when present
    #[must_use]
    pub fn unauthorized(payload: Option<Value>) -> Self {
        let message = payload
            .as_ref()
            .and_then(payload_message)
            .unwrap_or("Unauthorized request")
            .to_owned();
        let mut error = Self::new(ErrorCode::Unauthorized, message).with_status(401);
        error.payload = payload;
        error
    }

    /// Client-side validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Non-2xx response.
    ///
    /// With a structured payload the error is a `ServerError` carrying the
    /// server's message; otherwise it is an `Unknown` error with the
    /// per-operation fallback message.
    pub fn from_response(status: u16, payload: Option<Value>, fallback: impl Into<String>) -> Self {
        if status == 401 {
            return Self::unauthorized(payload);
        }
        match payload {
            Some(body) if body.is_object() => {
                let message = payload_message(&body)
                    .map_or_else(|| fallback.into(), str::to_owned);
                Self::new(ErrorCode::ServerError, message)
                    .with_status(status)
                    .with_payload(body)
            }
            _ => Self::new(ErrorCode::Unknown, fallback).with_status(status),
        }
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

#[cfg(feature = "http-errors")]
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        let code = if error.is_decode() {
            ErrorCode::SerializationError
        } else if error.is_builder() {
            ErrorCode::InternalError
        } else {
            ErrorCode::NetworkError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
