// ABOUTME: Environment-based server configuration
// ABOUTME: Reads port, database URL, pool size, and session TTL from env variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

//! Server configuration loaded from the environment.
//!
//! Configuration is environment-only: there is no config file. Every value
//! has a default suitable for local development.

use std::env;

use crate::errors::{AppError, AppResult};

/// Default HTTP port (matches the front end's expectation)
const DEFAULT_HTTP_PORT: u16 = 5000;

/// Default bounded connection pool size
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default session lifetime in hours
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port (`PORT`)
    pub http_port: u16,
    /// SQLite database URL (`DATABASE_URL`)
    pub database_url: String,
    /// Maximum connections in the shared pool (`DATABASE_MAX_CONNECTIONS`)
    pub max_connections: u32,
    /// Session cookie lifetime in hours (`SESSION_TTL_HOURS`)
    pub session_ttl_hours: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be parsed (an unset
    /// variable falls back to its default).
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            http_port: parse_env("PORT", DEFAULT_HTTP_PORT)?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:cleberfit.db".to_owned()),
            max_connections: parse_env("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            session_ttl_hours: parse_env("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            database_url: "sqlite:cleberfit.db".to_owned(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
        }
    }
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::invalid_input(format!("invalid value for {name}: {raw}"))),
        Err(_) => Ok(default),
    }
}
