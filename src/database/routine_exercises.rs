// ABOUTME: Routine-exercise database operations
// ABOUTME: CRUD for exercises within a routine with stable display ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::RoutineExercise;

impl Database {
    /// List the exercises of a routine in display order
    ///
    /// Ordered by explicit `position` ascending; entries without a position
    /// come last, and ties fall back to ascending id so the order is total
    /// and stable.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_routine_exercises(&self, routine_id: i64) -> AppResult<Vec<RoutineExercise>> {
        let rows = sqlx::query(
            r"
            SELECT * FROM routine_exercises
            WHERE routine_id = ?1
            ORDER BY position IS NULL, position ASC, id ASC
            ",
        )
        .bind(routine_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list routine exercises: {e}")))?;

        rows.iter().map(Self::row_to_routine_exercise).collect()
    }

    /// Add an exercise to a routine
    ///
    /// New exercises default to `is_superset = false` and empty setup notes.
    /// Passing `position = None` appends the exercise after all positioned
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the routine does not exist, or a database error
    /// if the insert fails.
    pub async fn create_routine_exercise(
        &self,
        routine_id: i64,
        exercise_name: &str,
        muscle_group: &str,
        position: Option<i64>,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO routine_exercises (routine_id, exercise_name, muscle_group, is_superset, position)
            VALUES (?1, ?2, ?3, 0, ?4)
            ",
        )
        .bind(routine_id)
        .bind(exercise_name)
        .bind(muscle_group)
        .bind(position)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_foreign_key_violation())
            {
                AppError::not_found(format!("routine {routine_id}"))
            } else {
                AppError::database(format!("Failed to create routine exercise: {e}"))
            }
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Update the setup notes and superset flag of an exercise
    ///
    /// Partial update of exactly these two fields; all other columns are
    /// untouched. Repeating the call with identical arguments leaves the row
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the exercise does not exist, or an error if the
    /// database operation fails.
    pub async fn update_routine_exercise_notes(
        &self,
        exercise_id: i64,
        setup_notes: Option<&str>,
        is_superset: bool,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE routine_exercises
            SET setup_notes = ?1, is_superset = ?2
            WHERE id = ?3
            ",
        )
        .bind(setup_notes)
        .bind(is_superset)
        .bind(exercise_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update routine exercise: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("routine exercise {exercise_id}")));
        }

        Ok(())
    }

    /// Delete an exercise by id
    ///
    /// Dependent history rows are removed by the `ON DELETE CASCADE`
    /// foreign key in the same statement.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the exercise does not exist, or an error if the
    /// database operation fails.
    pub async fn delete_routine_exercise(&self, exercise_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM routine_exercises WHERE id = ?1")
            .bind(exercise_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete routine exercise: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("routine exercise {exercise_id}")));
        }

        Ok(())
    }

    /// Convert a database row to a `RoutineExercise`
    fn row_to_routine_exercise(row: &SqliteRow) -> AppResult<RoutineExercise> {
        Ok(RoutineExercise {
            id: row.get("id"),
            routine_id: row.get("routine_id"),
            exercise_name: row.get("exercise_name"),
            muscle_group: row.get("muscle_group"),
            setup_notes: row.get("setup_notes"),
            is_superset: row.get("is_superset"),
            position: row.get("position"),
        })
    }
}
