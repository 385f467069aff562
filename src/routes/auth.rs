// ABOUTME: Authentication route handlers for registration, login, and logout
// ABOUTME: Validates credentials at the boundary and manages the session cookie
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

//! Authentication routes.
//!
//! Registration and login validate their input before touching the store.
//! Login establishes a session bound to the authenticated user id and sets
//! the session cookie; logout destroys the session and always succeeds,
//! even when no session existed.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::auth::{hash_password, verify_password};
use crate::errors::{AppError, AppResult};
use crate::models::UserId;
use crate::resources::ServerResources;
use crate::security::cookies::{clear_session_cookie, get_cookie_value, set_session_cookie, SESSION_COOKIE};

/// User registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    pub nome: Option<String>,
    /// Email address (globally unique)
    pub email: Option<String>,
    /// Plain-text secret, hashed before storage
    pub senha: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: Option<String>,
    /// Plain-text secret
    pub senha: Option<String>,
}

/// Authenticated user info returned on login
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// Display name
    pub nome: String,
    /// Email address
    pub email: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Always true on success
    pub success: bool,
    /// Authenticated user
    pub user: UserInfo,
    /// Human-readable status message
    pub message: String,
}

/// Authentication service for business logic
#[derive(Clone)]
pub struct AuthService {
    resources: Arc<ServerResources>,
}

impl AuthService {
    /// Create the service over the shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` on missing fields, `DuplicateEntry` if the
    /// email is already registered, or a database error.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserId> {
        let name = required_field(request.nome, "nome")?;
        let email = required_field(request.email, "email")?;
        let secret = required_field(request.senha, "senha")?;

        if !is_valid_email(&email) {
            return Err(AppError::invalid_input("invalid email format"));
        }

        let password_hash = hash_password(&secret).await?;
        let user_id = self
            .resources
            .database
            .create_user(&name, &email, &password_hash)
            .await?;

        info!(user_id, "user registered successfully");
        Ok(user_id)
    }

    /// Authenticate a user and open a session for them
    ///
    /// Returns the session token and user info; the HTTP handler turns the
    /// token into a cookie.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` on unknown email or digest mismatch.
    pub async fn login(&self, request: LoginRequest) -> AppResult<(String, UserInfo)> {
        let email = required_field(request.email, "email")?;
        let secret = required_field(request.senha, "senha")?;

        let user = self
            .resources
            .database
            .get_user_by_email(&email)
            .await?
            .ok_or_else(|| {
                debug!(email = %email, "login failed: unknown email");
                AppError::invalid_credentials("invalid email or password")
            })?;

        if !verify_password(&secret, &user.password_hash).await? {
            warn!(user_id = user.id, "login failed: password mismatch");
            return Err(AppError::invalid_credentials("invalid email or password"));
        }

        let token = self.resources.sessions.create(user.id);
        info!(user_id = user.id, "user logged in successfully");

        Ok((
            token,
            UserInfo {
                nome: user.name,
                email: user.email,
            },
        ))
    }
}

/// Authentication routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/login", post(Self::handle_login))
            .route("/api/cadastro", post(Self::handle_register))
            .route("/api/logout", get(Self::handle_logout).post(Self::handle_logout))
            .with_state(resources)
    }

    /// Handle user login: verify credentials and set the session cookie
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let ttl_secs = resources.sessions.ttl_seconds();
        let service = AuthService::new(resources);
        let (token, user) = service.login(request).await?;

        let mut headers = HeaderMap::new();
        set_session_cookie(&mut headers, &token, ttl_secs);

        let body = Json(LoginResponse {
            success: true,
            user,
            message: "logged in".to_owned(),
        });
        Ok((headers, body).into_response())
    }

    /// Handle user registration
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let service = AuthService::new(resources);
        let user_id = service.register(request).await?;

        Ok(Json(json!({ "success": true, "id": user_id })).into_response())
    }

    /// Handle logout: destroy the session (idempotent) and clear the cookie
    async fn handle_logout(
        State(resources): State<Arc<ServerResources>>,
        request_headers: HeaderMap,
    ) -> Response {
        if let Some(token) = get_cookie_value(&request_headers, SESSION_COOKIE) {
            resources.sessions.destroy(&token);
        }

        let mut headers = HeaderMap::new();
        clear_session_cookie(&mut headers);

        (headers, Json(json!({ "success": true }))).into_response()
    }
}

/// Reject missing or blank required fields at the boundary
fn required_field(value: Option<String>, name: &str) -> AppResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::invalid_input(format!("missing field: {name}"))),
    }
}

/// Minimal email shape check; real validation happens at delivery time
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("ana@exemplo.com.br"));
        assert!(!is_valid_email("sem-arroba"));
        assert!(!is_valid_email("@dominio.com"));
        assert!(!is_valid_email("ana@dominio"));
    }

    #[test]
    fn required_field_rejects_blank_values() {
        assert!(required_field(Some("  ".to_owned()), "nome").is_err());
        assert!(required_field(None, "nome").is_err());
        assert_eq!(required_field(Some("Ana".to_owned()), "nome").unwrap(), "Ana");
    }
}
