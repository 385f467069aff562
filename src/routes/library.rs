// ABOUTME: Exercise library route handlers
// ABOUTME: Read-only listing of the shared exercise-suggestion catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::errors::AppResult;
use crate::models::LibraryExercise;
use crate::resources::ServerResources;

/// Wire shape of a library suggestion
#[derive(Debug, Serialize)]
pub struct LibraryExerciseDto {
    /// Suggestion id
    pub id: i64,
    /// Exercise name
    pub nome: String,
    /// Muscle group worked
    pub grupo_muscular: String,
    /// Equipment needed, if any
    pub equipamento: Option<String>,
    /// Short how-to description
    pub descricao: Option<String>,
}

impl From<LibraryExercise> for LibraryExerciseDto {
    fn from(exercise: LibraryExercise) -> Self {
        Self {
            id: exercise.id,
            nome: exercise.name,
            grupo_muscular: exercise.muscle_group,
            equipamento: exercise.equipment,
            descricao: exercise.description,
        }
    }
}

/// Exercise library routes (not user-scoped, no authentication required)
pub struct LibraryRoutes;

impl LibraryRoutes {
    /// Create all library routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/biblioteca", get(Self::handle_list))
            .with_state(resources)
    }

    /// List the whole suggestion catalog
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Vec<LibraryExerciseDto>>> {
        let exercises = resources.database.list_library_exercises().await?;
        Ok(Json(
            exercises.into_iter().map(LibraryExerciseDto::from).collect(),
        ))
    }
}
