// ABOUTME: Route module organization for the CleberFit HTTP endpoints
// ABOUTME: One router per domain merged into the full API with tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

//! Route modules for the diary API.
//!
//! Each domain module defines a `XxxRoutes` struct whose `routes()` builds
//! an axum router over the shared [`ServerResources`]. Handlers are thin:
//! they resolve identity, call one store operation, and map the result into
//! the wire DTOs defined next to each route.

/// Authentication routes (login, registration, logout)
pub mod auth;

/// Routine-exercise routes
pub mod exercises;

/// Health probe route
pub mod health;

/// Training history routes
pub mod history;

/// Exercise library routes
pub mod library;

/// Routine ("ficha") routes
pub mod routines;

/// Body-weight log routes
pub mod weight;

use std::sync::Arc;

use axum::http::HeaderMap;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::models::UserId;
use crate::resources::ServerResources;
use crate::security::cookies::{get_cookie_value, SESSION_COOKIE};

pub use auth::AuthRoutes;
pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use history::HistoryRoutes;
pub use library::LibraryRoutes;
pub use routines::RoutineRoutes;
pub use weight::WeightRoutes;

/// Build the full API router with tracing and CORS layers
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(RoutineRoutes::routes(resources.clone()))
        .merge(ExerciseRoutes::routes(resources.clone()))
        .merge(HistoryRoutes::routes(resources.clone()))
        .merge(WeightRoutes::routes(resources.clone()))
        .merge(LibraryRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Extract the session-derived user id from the request cookie, if any
pub(crate) fn session_user(headers: &HeaderMap, resources: &ServerResources) -> Option<UserId> {
    let token = get_cookie_value(headers, SESSION_COOKIE)?;
    resources.sessions.get(&token)
}
