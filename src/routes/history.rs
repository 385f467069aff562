// ABOUTME: Training history route handlers
// ABOUTME: Per-exercise and per-user history listings plus append-only set recording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

//! Training history routes.
//!
//! `GET /api/historico` serves two callers: with `?exercicio_id` it returns
//! the set history of one exercise (progress chart), with `?email` or a
//! session it returns the user's full history joined with exercise names
//! (calendar/heatmap). With neither it degrades to an empty list.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::session_user;
use crate::errors::{AppError, AppResult};
use crate::models::{HistoryEntry, SetType, UserHistoryEntry};
use crate::resources::ServerResources;

/// Query parameters for history listing
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Exercise whose history to list (progress-chart mode)
    pub exercicio_id: Option<i64>,
    /// Email fallback for the per-user listing (heatmap mode)
    pub email: Option<String>,
}

/// Set recording request
#[derive(Debug, Deserialize)]
pub struct AppendHistoryRequest {
    /// Exercise the set belongs to
    pub ficha_exercicio_id: Option<i64>,
    /// Load in kilograms
    pub peso: Option<f64>,
    /// Repetitions performed
    pub reps: Option<i64>,
    /// Kind of set tag (working / warmup / dropset)
    pub tipo: Option<String>,
    /// Training date (YYYY-MM-DD)
    pub data_registro: Option<NaiveDate>,
}

/// Wire shape of one recorded set
#[derive(Debug, Serialize)]
pub struct HistoryEntryDto {
    /// Entry id
    pub id: i64,
    /// Exercise the set belongs to
    pub ficha_exercicio_id: i64,
    /// Load in kilograms
    pub peso: f64,
    /// Repetitions performed
    pub repeticoes: i64,
    /// Kind of set
    pub tipo_serie: String,
    /// Training date
    pub data_registro: NaiveDate,
}

impl From<HistoryEntry> for HistoryEntryDto {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id,
            ficha_exercicio_id: entry.routine_exercise_id,
            peso: entry.weight,
            repeticoes: entry.reps,
            tipo_serie: entry.set_type.as_str().to_owned(),
            data_registro: entry.recorded_at,
        }
    }
}

/// Wire shape of one recorded set joined with its exercise name
#[derive(Debug, Serialize)]
pub struct UserHistoryEntryDto {
    /// The recorded set
    #[serde(flatten)]
    pub entry: HistoryEntryDto,
    /// Exercise name for display
    pub nome_exercicio: String,
}

impl From<UserHistoryEntry> for UserHistoryEntryDto {
    fn from(joined: UserHistoryEntry) -> Self {
        Self {
            entry: HistoryEntryDto::from(joined.entry),
            nome_exercicio: joined.exercise_name,
        }
    }
}

/// Training history routes
pub struct HistoryRoutes;

impl HistoryRoutes {
    /// Create all history routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/historico",
                get(Self::handle_list).post(Self::handle_append),
            )
            .with_state(resources)
    }

    /// List history per exercise or per user depending on the query
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<HistoryQuery>,
    ) -> AppResult<Response> {
        if let Some(exercise_id) = query.exercicio_id {
            let entries = resources
                .database
                .list_history_for_exercise(exercise_id)
                .await?;
            let dtos: Vec<HistoryEntryDto> =
                entries.into_iter().map(HistoryEntryDto::from).collect();
            return Ok(Json(dtos).into_response());
        }

        let session = session_user(&headers, &resources);
        let Some(owner) = resources
            .identity
            .resolve(session, query.email.as_deref())
            .await?
        else {
            return Ok(Json(Vec::<UserHistoryEntryDto>::new()).into_response());
        };

        let entries = resources.database.list_history_for_user(owner).await?;
        let dtos: Vec<UserHistoryEntryDto> = entries
            .into_iter()
            .map(UserHistoryEntryDto::from)
            .collect();
        Ok(Json(dtos).into_response())
    }

    /// Record one set for an exercise
    async fn handle_append(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<AppendHistoryRequest>,
    ) -> AppResult<Json<serde_json::Value>> {
        let exercise_id = request
            .ficha_exercicio_id
            .ok_or_else(|| AppError::invalid_input("missing field: ficha_exercicio_id"))?;
        let weight = request
            .peso
            .ok_or_else(|| AppError::invalid_input("missing field: peso"))?;
        let reps = request
            .reps
            .ok_or_else(|| AppError::invalid_input("missing field: reps"))?;
        let recorded_at = request
            .data_registro
            .ok_or_else(|| AppError::invalid_input("missing field: data_registro"))?;
        let set_type = SetType::from_str_lossy(request.tipo.as_deref().unwrap_or_default());

        let id = resources
            .database
            .append_history_entry(exercise_id, weight, reps, set_type, recorded_at)
            .await?;

        Ok(Json(json!({ "success": true, "id": id })))
    }
}
