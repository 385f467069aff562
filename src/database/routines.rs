// ABOUTME: Routine ("ficha") database operations
// ABOUTME: CRUD for workout routines scoped to their owning user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Routine, UserId};

impl Database {
    /// List all routines owned by a user, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_routines(&self, owner: UserId) -> AppResult<Vec<Routine>> {
        let rows = sqlx::query("SELECT * FROM routines WHERE user_id = ?1 ORDER BY id ASC")
            .bind(owner)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list routines: {e}")))?;

        rows.iter().map(Self::row_to_routine).collect()
    }

    /// Create a routine for a user
    ///
    /// The owner must be a resolved canonical id; a dangling owner is
    /// rejected by the foreign key and surfaced as `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the owner does not exist, or a database error
    /// if the insert fails.
    pub async fn create_routine(
        &self,
        owner: UserId,
        name: &str,
        weekday: &str,
    ) -> AppResult<i64> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO routines (user_id, name, weekday, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(owner)
        .bind(name)
        .bind(weekday)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_foreign_key_violation())
            {
                AppError::not_found(format!("user {owner}"))
            } else {
                AppError::database(format!("Failed to create routine: {e}"))
            }
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Delete a routine by id
    ///
    /// Dependent routine-exercise and history rows are removed by the
    /// `ON DELETE CASCADE` foreign keys in the same statement.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the routine does not exist, or an error if the
    /// database operation fails.
    pub async fn delete_routine(&self, routine_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM routines WHERE id = ?1")
            .bind(routine_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete routine: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("routine {routine_id}")));
        }

        Ok(())
    }

    /// Convert a database row to a `Routine`
    fn row_to_routine(row: &SqliteRow) -> AppResult<Routine> {
        Ok(Routine {
            id: row.get("id"),
            user_id: row.get("user_id"),
            name: row.get("name"),
            weekday: row.get("weekday"),
            created_at: row.get("created_at"),
        })
    }
}
