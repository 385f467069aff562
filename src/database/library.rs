// ABOUTME: Shared exercise library database operations
// ABOUTME: Read-only suggestion catalog, seeded externally by the seed-library binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::LibraryExercise;

impl Database {
    /// List the whole exercise-suggestion library
    ///
    /// Unscoped and read-only; no pagination at this scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_library_exercises(&self) -> AppResult<Vec<LibraryExercise>> {
        let rows = sqlx::query("SELECT * FROM library_exercises ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list library exercises: {e}")))?;

        rows.iter().map(Self::row_to_library_exercise).collect()
    }

    /// Count library entries (used by the seeding binary to stay idempotent)
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn library_exercise_count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM library_exercises")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count library exercises: {e}")))
    }

    /// Insert one library suggestion (seeding only; the API never writes here)
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn insert_library_exercise(
        &self,
        name: &str,
        muscle_group: &str,
        equipment: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO library_exercises (name, muscle_group, equipment, description)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(name)
        .bind(muscle_group)
        .bind(equipment)
        .bind(description)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert library exercise: {e}")))?;

        Ok(result.last_insert_rowid())
    }

    /// Convert a database row to a `LibraryExercise`
    fn row_to_library_exercise(row: &SqliteRow) -> AppResult<LibraryExercise> {
        Ok(LibraryExercise {
            id: row.get("id"),
            name: row.get("name"),
            muscle_group: row.get("muscle_group"),
            equipment: row.get("equipment"),
            description: row.get("description"),
        })
    }
}
