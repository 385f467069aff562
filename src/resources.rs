// ABOUTME: Shared per-process resources injected into request handlers
// ABOUTME: Bundles the database pool, session store, identity resolver, and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

//! Shared server resources.
//!
//! One [`ServerResources`] is built at startup and handed to every router
//! as axum state. Handlers receive explicit handles instead of reaching for
//! process-wide globals, so tests can build isolated resources around an
//! in-memory database.

use std::sync::Arc;

use crate::auth::SessionStore;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::identity::IdentityResolver;

/// Shared resources for request handling
pub struct ServerResources {
    /// Database connection pool
    pub database: Database,
    /// Opaque session capability
    pub sessions: SessionStore,
    /// Identity resolver over the same database handle
    pub identity: IdentityResolver,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle resources for injection into the routers
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let sessions = SessionStore::new(config.session_ttl_hours);
        let identity = IdentityResolver::new(database.clone());
        Self {
            database,
            sessions,
            identity,
            config,
        }
    }
}
