// ABOUTME: Health check route
// ABOUTME: Liveness probe for deployment tooling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Health check routes
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health route
    pub fn routes() -> Router {
        Router::new().route("/api/health", get(Self::handle_health))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({ "status": "ok" }))
    }
}
