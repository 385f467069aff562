// ABOUTME: Common data models for the fitness diary entities
// ABOUTME: Defines users, routines, routine exercises, history, weight log, and library types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

//! Entity models persisted by the database layer.
//!
//! All identifiers are server-generated, monotonically assigned 64-bit
//! integers. Wire-format renames (e.g. `weekday` -> `dia`) happen in the
//! route DTOs, never here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Canonical user identifier
pub type UserId = i64;

/// A registered user
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Globally unique email address
    pub email: String,
    /// Bcrypt credential digest (never serialized to clients)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

/// A workout routine ("ficha"), owned by exactly one user
#[derive(Debug, Clone, Serialize)]
pub struct Routine {
    /// Unique identifier
    pub id: i64,
    /// Owning user
    pub user_id: UserId,
    /// Routine name (e.g. "Treino A")
    pub name: String,
    /// Weekday label the routine is planned for
    pub weekday: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// One exercise entry within a routine
#[derive(Debug, Clone, Serialize)]
pub struct RoutineExercise {
    /// Unique identifier
    pub id: i64,
    /// Owning routine
    pub routine_id: i64,
    /// Exercise name
    pub exercise_name: String,
    /// Muscle group worked
    pub muscle_group: String,
    /// Free-form machine/setup notes
    pub setup_notes: Option<String>,
    /// Whether the exercise is performed back-to-back with the next one
    pub is_superset: bool,
    /// Explicit display position; unset entries sort after positioned ones
    pub position: Option<i64>,
}

/// Kind of set recorded in the training history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetType {
    /// Regular working set
    Working,
    /// Warm-up set
    Warmup,
    /// Drop set
    Dropset,
}

impl SetType {
    /// Stable string form used for storage
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::Warmup => "warmup",
            Self::Dropset => "dropset",
        }
    }

    /// Parse a stored or client-provided tag, defaulting to a working set
    #[must_use]
    pub fn from_str_lossy(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "warmup" | "warm-up" | "aquecimento" => Self::Warmup,
            "dropset" | "drop-set" | "drop" => Self::Dropset,
            _ => Self::Working,
        }
    }
}

/// One recorded set (weight x reps) for a routine exercise on a given date
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    /// Unique identifier
    pub id: i64,
    /// Exercise the set belongs to
    pub routine_exercise_id: i64,
    /// Load in kilograms
    pub weight: f64,
    /// Repetitions performed
    pub reps: i64,
    /// Kind of set
    pub set_type: SetType,
    /// Training date
    pub recorded_at: NaiveDate,
}

/// A history entry joined with its exercise name, for per-user listings
#[derive(Debug, Clone, Serialize)]
pub struct UserHistoryEntry {
    /// The recorded set
    #[serde(flatten)]
    pub entry: HistoryEntry,
    /// Name of the exercise the set was recorded for
    pub exercise_name: String,
}

/// One body-weight measurement
#[derive(Debug, Clone, Serialize)]
pub struct WeightEntry {
    /// Unique identifier
    pub id: i64,
    /// Owning user
    pub user_id: UserId,
    /// Body weight in kilograms
    pub weight: f64,
    /// Measurement date
    pub recorded_at: NaiveDate,
}

/// A shared exercise suggestion from the library (not user-scoped)
#[derive(Debug, Clone, Serialize)]
pub struct LibraryExercise {
    /// Unique identifier
    pub id: i64,
    /// Exercise name
    pub name: String,
    /// Muscle group worked
    pub muscle_group: String,
    /// Equipment needed, if any
    pub equipment: Option<String>,
    /// Short how-to description
    pub description: Option<String>,
}
