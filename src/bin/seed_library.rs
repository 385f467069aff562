// ABOUTME: Seeds the shared exercise-suggestion library
// ABOUTME: Idempotent: skips seeding when the library already has entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

use tracing::info;
use tracing_subscriber::EnvFilter;

use cleberfit_server::config::ServerConfig;
use cleberfit_server::database::Database;
use cleberfit_server::errors::AppResult;

/// Default suggestion catalog: (name, muscle group, equipment, description)
const LIBRARY_SEED: &[(&str, &str, Option<&str>, Option<&str>)] = &[
    (
        "Supino reto",
        "Peito",
        Some("Barra"),
        Some("Flat barbell press; keep shoulder blades retracted."),
    ),
    (
        "Supino inclinado com halteres",
        "Peito",
        Some("Halteres"),
        Some("Incline dumbbell press at 30 degrees."),
    ),
    ("Crucifixo na polia", "Peito", Some("Polia"), None),
    (
        "Agachamento livre",
        "Pernas",
        Some("Barra"),
        Some("High-bar back squat to parallel or below."),
    ),
    ("Leg press 45", "Pernas", Some("Máquina"), None),
    (
        "Stiff",
        "Posterior",
        Some("Barra"),
        Some("Romanian deadlift; hinge at the hips, soft knees."),
    ),
    ("Cadeira extensora", "Pernas", Some("Máquina"), None),
    (
        "Puxada frontal",
        "Costas",
        Some("Polia"),
        Some("Lat pulldown to the upper chest."),
    ),
    ("Remada curvada", "Costas", Some("Barra"), None),
    ("Remada baixa", "Costas", Some("Polia"), None),
    (
        "Desenvolvimento militar",
        "Ombros",
        Some("Barra"),
        Some("Standing overhead press."),
    ),
    ("Elevação lateral", "Ombros", Some("Halteres"), None),
    ("Rosca direta", "Bíceps", Some("Barra"), None),
    ("Tríceps corda", "Tríceps", Some("Polia"), None),
    (
        "Prancha",
        "Core",
        None,
        Some("Hold a straight line from shoulders to ankles."),
    ),
];

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env()?;
    let database = Database::new(&config.database_url, config.max_connections).await?;

    let existing = database.library_exercise_count().await?;
    if existing > 0 {
        info!(existing, "library already seeded, nothing to do");
        return Ok(());
    }

    for (name, muscle_group, equipment, description) in LIBRARY_SEED {
        database
            .insert_library_exercise(name, muscle_group, *equipment, *description)
            .await?;
    }

    info!(count = LIBRARY_SEED.len(), "library seeded");
    Ok(())
}
