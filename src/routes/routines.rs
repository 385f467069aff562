// ABOUTME: Routine ("ficha") route handlers
// ABOUTME: List, create, and delete workout routines scoped to the resolved user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

//! Routine routes.
//!
//! Listing resolves the caller via session or `?email` fallback and
//! degrades to an empty list when neither resolves; creation requires a
//! resolved owner and fails with 404 otherwise.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::session_user;
use crate::errors::{AppError, AppResult};
use crate::models::Routine;
use crate::resources::ServerResources;

/// Query parameters for routine listing
#[derive(Debug, Deserialize)]
pub struct ListRoutinesQuery {
    /// Email fallback when no session cookie is present
    pub email: Option<String>,
}

/// Routine creation request
#[derive(Debug, Deserialize)]
pub struct CreateRoutineRequest {
    /// Owner email fallback (session wins when both are present)
    pub user_email: Option<String>,
    /// Routine name
    pub nome: Option<String>,
    /// Weekday label
    pub dia: Option<String>,
}

/// Wire shape of a routine
///
/// The front end historically reads both `dia_semana` and its shorthand
/// `dia`, so the boundary mapping emits both for the same value.
#[derive(Debug, Serialize)]
pub struct RoutineDto {
    /// Routine id
    pub id: i64,
    /// Routine name
    pub nome: String,
    /// Weekday label (canonical field)
    pub dia_semana: String,
    /// Weekday label (legacy shorthand)
    pub dia: String,
}

impl From<Routine> for RoutineDto {
    fn from(routine: Routine) -> Self {
        Self {
            id: routine.id,
            nome: routine.name,
            dia_semana: routine.weekday.clone(),
            dia: routine.weekday,
        }
    }
}

/// Routine routes
pub struct RoutineRoutes;

impl RoutineRoutes {
    /// Create all routine routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/fichas", get(Self::handle_list).post(Self::handle_create))
            .route("/api/fichas/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// List the caller's routines; unresolved identity yields an empty list
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ListRoutinesQuery>,
    ) -> AppResult<Json<Vec<RoutineDto>>> {
        let session = session_user(&headers, &resources);
        let Some(owner) = resources
            .identity
            .resolve(session, query.email.as_deref())
            .await?
        else {
            return Ok(Json(Vec::new()));
        };

        let routines = resources.database.list_routines(owner).await?;
        Ok(Json(routines.into_iter().map(RoutineDto::from).collect()))
    }

    /// Create a routine for the resolved owner
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateRoutineRequest>,
    ) -> AppResult<Json<serde_json::Value>> {
        let nome = request
            .nome
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| AppError::invalid_input("missing field: nome"))?;
        let dia = request.dia.unwrap_or_default();

        let session = session_user(&headers, &resources);
        let owner = resources
            .identity
            .resolve_required(session, request.user_email.as_deref())
            .await?;

        let id = resources
            .database
            .create_routine(owner, &nome, &dia)
            .await?;
        info!(routine_id = id, user_id = owner, "routine created");

        Ok(Json(json!({ "success": true, "id": id })))
    }

    /// Delete a routine; cascades to its exercises and their history
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> AppResult<Json<serde_json::Value>> {
        resources.database.delete_routine(id).await?;
        info!(routine_id = id, "routine deleted");

        Ok(Json(json!({ "success": true })))
    }
}
