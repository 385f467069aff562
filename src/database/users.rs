// ABOUTME: User account database operations
// ABOUTME: Handles user creation and lookup by id or email with duplicate detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{User, UserId};

impl Database {
    /// Create a new user with a pre-hashed credential digest
    ///
    /// Emails are globally unique; the database unique index is the sole
    /// mechanism preventing duplicate registration races.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEntry` if the email is already registered, or a
    /// database error if the insert fails.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<UserId> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO users (name, email, password_hash, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                AppError::duplicate_entry(format!("email already registered: {email}"))
            } else {
                AppError::database(format!("Failed to create user: {e}"))
            }
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Get a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        row.map(|r| Self::row_to_user(&r)).transpose()
    }

    /// Get a user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get user by email: {e}")))?;

        row.map(|r| Self::row_to_user(&r)).transpose()
    }

    /// Get a user by email, returning an error if not found
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no user has this email, or an error if the
    /// database query fails.
    pub async fn get_user_by_email_required(&self, email: &str) -> AppResult<User> {
        self.get_user_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("user with email: {email}")))
    }

    /// Get total user count
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get user count: {e}")))
    }

    /// Convert a database row to a `User`
    fn row_to_user(row: &SqliteRow) -> AppResult<User> {
        Ok(User {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
        })
    }
}
