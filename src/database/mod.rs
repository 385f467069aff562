// ABOUTME: Core database management with embedded migrations for SQLite
// ABOUTME: Owns the bounded connection pool shared by all diary stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

//! Database connection pool and store modules.
//!
//! One module per table. Every store operation acquires a connection from
//! the shared bounded pool, performs a single logical statement, and
//! releases it. Referential integrity between tables is enforced by foreign
//! keys declared in the migrations (`ON DELETE CASCADE`), so deletes never
//! need multi-statement transactions.

/// Body-weight log operations
pub mod body_weight;
/// Training history operations
pub mod history;
/// Shared exercise library operations
pub mod library;
/// Routine-exercise operations
pub mod routine_exercises;
/// Routine ("ficha") operations
pub mod routines;
/// User account operations
pub mod users;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use tracing::info;

use crate::errors::{AppError, AppResult};

/// Database connection pool shared by all stores
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection pool and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database URL is invalid or malformed
    /// - The connection fails
    /// - The migration process fails
    pub async fn new(database_url: &str, max_connections: u32) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
            && !database_url.contains('?')
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        // An in-memory database is private to its connection; a single
        // connection keeps state shared across the pool.
        let max_connections = if database_url.contains(":memory:") {
            1
        } else {
            max_connections
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run all pending migrations embedded at compile-time from ./migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any migration fails or the connection is lost.
    pub async fn migrate(&self) -> AppResult<()> {
        info!("Running database migrations...");

        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;

        info!("Database migrations completed successfully");
        Ok(())
    }
}
