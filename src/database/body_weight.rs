// ABOUTME: Body-weight log database operations
// ABOUTME: Append-only chronological weight series per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{UserId, WeightEntry};

impl Database {
    /// List a user's weight measurements in chronological order (for charting)
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_weight_entries(&self, owner: UserId) -> AppResult<Vec<WeightEntry>> {
        let rows = sqlx::query(
            r"
            SELECT * FROM weight_entries
            WHERE user_id = ?1
            ORDER BY recorded_at ASC, id ASC
            ",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list weight entries: {e}")))?;

        rows.iter().map(Self::row_to_weight_entry).collect()
    }

    /// Append one body-weight measurement
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the owner does not exist, or a database error
    /// if the insert fails.
    pub async fn append_weight_entry(
        &self,
        owner: UserId,
        weight: f64,
        recorded_at: NaiveDate,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO weight_entries (user_id, weight, recorded_at)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(owner)
        .bind(weight)
        .bind(recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_foreign_key_violation())
            {
                AppError::not_found(format!("user {owner}"))
            } else {
                AppError::database(format!("Failed to append weight entry: {e}"))
            }
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Convert a database row to a `WeightEntry`
    fn row_to_weight_entry(row: &SqliteRow) -> AppResult<WeightEntry> {
        Ok(WeightEntry {
            id: row.get("id"),
            user_id: row.get("user_id"),
            weight: row.get("weight"),
            recorded_at: row.get("recorded_at"),
        })
    }
}
