// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, resource, and test-server helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code)]

//! Shared test utilities for `cleberfit_server`
//!
//! Common setup functions to reduce duplication across integration tests.

use std::sync::{Arc, Once};

use anyhow::Result;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use cleberfit_server::config::ServerConfig;
use cleberfit_server::database::Database;
use cleberfit_server::resources::ServerResources;
use cleberfit_server::routes;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup (isolated in-memory SQLite)
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:", 1).await?;
    Ok(database)
}

/// Create a test user with a placeholder digest (store-level tests only)
pub async fn create_test_user(database: &Database, name: &str, email: &str) -> Result<i64> {
    let user_id = database.create_user(name, email, "test-digest").await?;
    Ok(user_id)
}

/// Build test server resources around an isolated in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    let config = Arc::new(ServerConfig {
        database_url: "sqlite::memory:".to_owned(),
        ..ServerConfig::default()
    });
    Ok(Arc::new(ServerResources::new(database, config)))
}

/// Handle for a spawned HTTP test server, aborted automatically on drop
pub struct TestServerHandle {
    task_handle: JoinHandle<()>,
    port: u16,
}

impl TestServerHandle {
    /// Base URL for requests against this server
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

impl Drop for TestServerHandle {
    fn drop(&mut self) {
        self.task_handle.abort();
    }
}

/// Spawn the full API router on an ephemeral port
pub async fn spawn_test_server(resources: Arc<ServerResources>) -> Result<TestServerHandle> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();

    let app = routes::router(resources);
    let task_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed to run");
    });

    Ok(TestServerHandle { task_handle, port })
}
