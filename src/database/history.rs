// ABOUTME: Training history database operations
// ABOUTME: Append-only per-set log queried per exercise or per user via the ownership chain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{HistoryEntry, SetType, UserHistoryEntry, UserId};

impl Database {
    /// List the recorded sets of one exercise, most recent first
    ///
    /// Ties on the training date are broken newest-inserted first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_history_for_exercise(
        &self,
        routine_exercise_id: i64,
    ) -> AppResult<Vec<HistoryEntry>> {
        let rows = sqlx::query(
            r"
            SELECT * FROM history_entries
            WHERE routine_exercise_id = ?1
            ORDER BY recorded_at DESC, id DESC
            ",
        )
        .bind(routine_exercise_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list exercise history: {e}")))?;

        rows.iter().map(Self::row_to_history_entry).collect()
    }

    /// List every recorded set of a user, joined with the exercise name
    ///
    /// The routine -> routine-exercise ownership chain is the sole path for
    /// this aggregate, so rows of other users can never leak in. Used by the
    /// caller for calendar/heatmap aggregation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_history_for_user(&self, owner: UserId) -> AppResult<Vec<UserHistoryEntry>> {
        let rows = sqlx::query(
            r"
            SELECT h.*, re.exercise_name
            FROM history_entries h
            JOIN routine_exercises re ON h.routine_exercise_id = re.id
            JOIN routines r ON re.routine_id = r.id
            WHERE r.user_id = ?1
            ORDER BY h.recorded_at DESC, h.id DESC
            ",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list user history: {e}")))?;

        rows.iter()
            .map(|row| {
                Ok(UserHistoryEntry {
                    entry: Self::row_to_history_entry(row)?,
                    exercise_name: row.get("exercise_name"),
                })
            })
            .collect()
    }

    /// Append one recorded set to the history
    ///
    /// Pure insert; the only validation is referential existence of the
    /// exercise. Entries are never mutated or deleted afterwards.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the exercise does not exist, or a database
    /// error if the insert fails.
    pub async fn append_history_entry(
        &self,
        routine_exercise_id: i64,
        weight: f64,
        reps: i64,
        set_type: SetType,
        recorded_at: NaiveDate,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO history_entries (routine_exercise_id, weight, reps, set_type, recorded_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(routine_exercise_id)
        .bind(weight)
        .bind(reps)
        .bind(set_type.as_str())
        .bind(recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_foreign_key_violation())
            {
                AppError::not_found(format!("routine exercise {routine_exercise_id}"))
            } else {
                AppError::database(format!("Failed to append history entry: {e}"))
            }
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Convert a database row to a `HistoryEntry`
    fn row_to_history_entry(row: &SqliteRow) -> AppResult<HistoryEntry> {
        let set_type: String = row.get("set_type");

        Ok(HistoryEntry {
            id: row.get("id"),
            routine_exercise_id: row.get("routine_exercise_id"),
            weight: row.get("weight"),
            reps: row.get("reps"),
            set_type: SetType::from_str_lossy(&set_type),
            recorded_at: row.get("recorded_at"),
        })
    }
}
