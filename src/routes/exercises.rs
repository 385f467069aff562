// ABOUTME: Routine-exercise route handlers
// ABOUTME: List, create, update notes/superset, and delete exercises within a routine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::RoutineExercise;
use crate::resources::ServerResources;

/// Query parameters for exercise listing
#[derive(Debug, Deserialize)]
pub struct ListExercisesQuery {
    /// Routine whose exercises to list
    pub ficha_id: i64,
}

/// Exercise creation request
#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    /// Owning routine
    pub ficha_id: Option<i64>,
    /// Exercise name
    pub nome: Option<String>,
    /// Muscle group worked
    pub grupo: Option<String>,
    /// Optional explicit display position; omitted entries append
    pub ordem: Option<i64>,
}

/// Partial update of setup notes and the superset flag
#[derive(Debug, Deserialize)]
pub struct UpdateExerciseRequest {
    /// New setup notes (null clears them)
    pub notes: Option<String>,
    /// New superset flag
    #[serde(default)]
    pub is_biset: bool,
}

/// Wire shape of a routine exercise
#[derive(Debug, Serialize)]
pub struct ExerciseDto {
    /// Exercise id
    pub id: i64,
    /// Owning routine
    pub ficha_id: i64,
    /// Exercise name
    pub nome_exercicio: String,
    /// Muscle group worked
    pub grupo_muscular: String,
    /// Machine/setup notes
    pub setup_notes: Option<String>,
    /// Superset flag
    pub is_biset: bool,
}

impl From<RoutineExercise> for ExerciseDto {
    fn from(exercise: RoutineExercise) -> Self {
        Self {
            id: exercise.id,
            ficha_id: exercise.routine_id,
            nome_exercicio: exercise.exercise_name,
            grupo_muscular: exercise.muscle_group,
            setup_notes: exercise.setup_notes,
            is_biset: exercise.is_superset,
        }
    }
}

/// Routine-exercise routes
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all routine-exercise routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/exercicios",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/exercicios/:id",
                put(Self::handle_update).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// List the exercises of a routine in display order
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListExercisesQuery>,
    ) -> AppResult<Json<Vec<ExerciseDto>>> {
        let exercises = resources
            .database
            .list_routine_exercises(query.ficha_id)
            .await?;

        Ok(Json(exercises.into_iter().map(ExerciseDto::from).collect()))
    }

    /// Add an exercise to a routine
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateExerciseRequest>,
    ) -> AppResult<Json<serde_json::Value>> {
        let ficha_id = request
            .ficha_id
            .ok_or_else(|| AppError::invalid_input("missing field: ficha_id"))?;
        let nome = request
            .nome
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| AppError::invalid_input("missing field: nome"))?;
        let grupo = request.grupo.unwrap_or_default();

        let id = resources
            .database
            .create_routine_exercise(ficha_id, &nome, &grupo, request.ordem)
            .await?;
        info!(exercise_id = id, routine_id = ficha_id, "routine exercise created");

        Ok(Json(json!({ "success": true, "id": id })))
    }

    /// Update the setup notes and superset flag of an exercise
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Json(request): Json<UpdateExerciseRequest>,
    ) -> AppResult<Json<serde_json::Value>> {
        resources
            .database
            .update_routine_exercise_notes(id, request.notes.as_deref(), request.is_biset)
            .await?;

        Ok(Json(json!({ "success": true })))
    }

    /// Delete an exercise; cascades to its history
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> AppResult<Json<serde_json::Value>> {
        resources.database.delete_routine_exercise(id).await?;
        info!(exercise_id = id, "routine exercise deleted");

        Ok(Json(json!({ "success": true })))
    }
}
