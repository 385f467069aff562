// ABOUTME: CleberFit server binary
// ABOUTME: Loads environment configuration, connects the database, and serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cleberfit_server::config::ServerConfig;
use cleberfit_server::database::Database;
use cleberfit_server::errors::{AppError, AppResult};
use cleberfit_server::resources::ServerResources;
use cleberfit_server::routes;

/// CleberFit fitness diary API server
#[derive(Debug, Parser)]
#[command(name = "cleberfit-server", version, about)]
struct Args {
    /// HTTP listen port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// SQLite database URL (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    let database = Database::new(&config.database_url, config.max_connections).await?;
    info!(database_url = %config.database_url, "database ready");

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
    let app = routes::router(resources);

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind port {port}: {e}")))?;
    info!(port, "CleberFit server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server failed: {e}")))
}
