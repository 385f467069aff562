// ABOUTME: Body-weight log route handlers
// ABOUTME: Chronological weight listing for charting and append-only recording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::session_user;
use crate::errors::{AppError, AppResult};
use crate::models::WeightEntry;
use crate::resources::ServerResources;

/// Query parameters for weight-log listing
#[derive(Debug, Deserialize)]
pub struct ListWeightQuery {
    /// Email fallback when no session cookie is present
    pub email: Option<String>,
}

/// Weight recording request
#[derive(Debug, Deserialize)]
pub struct AppendWeightRequest {
    /// Owner email fallback (session wins when both are present)
    pub user_email: Option<String>,
    /// Body weight in kilograms
    pub weight: Option<f64>,
    /// Measurement date (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
}

/// Wire shape of one weight measurement (chart format)
#[derive(Debug, Serialize)]
pub struct WeightDto {
    /// Body weight in kilograms
    pub weight: f64,
    /// Measurement date
    pub date: NaiveDate,
}

impl From<WeightEntry> for WeightDto {
    fn from(entry: WeightEntry) -> Self {
        Self {
            weight: entry.weight,
            date: entry.recorded_at,
        }
    }
}

/// Body-weight log routes
pub struct WeightRoutes;

impl WeightRoutes {
    /// Create all weight-log routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/peso", get(Self::handle_list).post(Self::handle_append))
            .with_state(resources)
    }

    /// List the caller's weight log; unresolved identity yields an empty list
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ListWeightQuery>,
    ) -> AppResult<Json<Vec<WeightDto>>> {
        let session = session_user(&headers, &resources);
        let Some(owner) = resources
            .identity
            .resolve(session, query.email.as_deref())
            .await?
        else {
            return Ok(Json(Vec::new()));
        };

        let entries = resources.database.list_weight_entries(owner).await?;
        Ok(Json(entries.into_iter().map(WeightDto::from).collect()))
    }

    /// Record one weight measurement for the resolved owner
    async fn handle_append(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<AppendWeightRequest>,
    ) -> AppResult<Json<serde_json::Value>> {
        let weight = request
            .weight
            .ok_or_else(|| AppError::invalid_input("missing field: weight"))?;
        let date = request
            .date
            .ok_or_else(|| AppError::invalid_input("missing field: date"))?;

        let session = session_user(&headers, &resources);
        let owner = resources
            .identity
            .resolve_required(session, request.user_email.as_deref())
            .await?;

        let id = resources
            .database
            .append_weight_entry(owner, weight, date)
            .await?;

        Ok(Json(json!({ "success": true, "id": id })))
    }
}
