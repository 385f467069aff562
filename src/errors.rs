// ABOUTME: Unified error handling for the CleberFit server
// ABOUTME: Discriminated error kinds with constructors and axum HTTP response mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

//! Application error type shared by stores, services, and routes.
//!
//! Error kinds are a closed set so callers can match on them instead of
//! comparing message strings. Store-level constraint violations are
//! translated into [`AppError::DuplicateEntry`] / [`AppError::NotFound`] at
//! the store layer; raw database error text is logged but never returned to
//! the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Application error kinds
#[derive(Debug, Error)]
pub enum AppError {
    /// Request is missing required fields or carries malformed values
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Login failed: unknown email or wrong secret
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Unique-constraint violation (e.g. email already registered)
    #[error("duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Referenced user/routine/exercise does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Underlying store or connection pool failure
    #[error("database error: {0}")]
    Database(String),

    /// Unexpected internal failure (hashing, task join, ...)
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an invalid-credentials error
    pub fn invalid_credentials(msg: impl Into<String>) -> Self {
        Self::InvalidCredentials(msg.into())
    }

    /// Create a duplicate-entry error
    pub fn duplicate_entry(msg: impl Into<String>) -> Self {
        Self::DuplicateEntry(msg.into())
    }

    /// Create a not-found error; `what` names the missing entity
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status code for this error kind
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            Self::DuplicateEntry(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Store and internal failures are logged with their full text and
        // surfaced as a generic message, never exposing internal error text.
        let message = match &self {
            Self::Database(msg) | Self::Internal(msg) => {
                error!(error = %msg, "request failed with server error");
                "internal server error".to_owned()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_map_to_expected_status_codes() {
        assert_eq!(
            AppError::invalid_input("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::invalid_credentials("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::duplicate_entry("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::database("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_names_the_entity() {
        let err = AppError::not_found("user with email: a@x.com");
        assert_eq!(err.to_string(), "user with email: a@x.com not found");
    }
}
