// ABOUTME: End-to-end HTTP tests against a spawned API server
// ABOUTME: Exercises registration, login, session cookies, and the diary endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TestServerHandle;

async fn spawn_server() -> Result<TestServerHandle> {
    let resources = common::create_test_resources().await?;
    common::spawn_test_server(resources).await
}

async fn register(client: &reqwest::Client, base: &str, name: &str, email: &str, senha: &str) {
    let response = client
        .post(format!("{base}/api/cadastro"))
        .json(&json!({ "nome": name, "email": email, "senha": senha }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn test_register_login_and_wrong_password() {
    let server = spawn_server().await.unwrap();
    let base = server.base_url();
    let client = reqwest::Client::new();

    register(&client, &base, "Ana", "ana@x.com", "s1").await;

    // Correct secret logs in and returns the user info
    let response = client
        .post(format!("{base}/api/login"))
        .json(&json!({ "email": "ana@x.com", "senha": "s1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["nome"], json!("Ana"));
    assert_eq!(body["user"]["email"], json!("ana@x.com"));

    // Wrong secret is a 401 with success=false
    let response = client
        .post(format!("{base}/api/login"))
        .json(&json!({ "email": "ana@x.com", "senha": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let server = spawn_server().await.unwrap();
    let base = server.base_url();
    let client = reqwest::Client::new();

    register(&client, &base, "Ana", "dup@x.com", "s1").await;

    let response = client
        .post(format!("{base}/api/cadastro"))
        .json(&json!({ "nome": "Other", "email": "dup@x.com", "senha": "s2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_registration_with_missing_fields_is_rejected() {
    let server = spawn_server().await.unwrap();
    let base = server.base_url();
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/cadastro"))
        .json(&json!({ "email": "semnome@x.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_routines_via_email_fallback() {
    let server = spawn_server().await.unwrap();
    let base = server.base_url();
    let client = reqwest::Client::new();

    register(&client, &base, "Ana", "ana@x.com", "s1").await;

    // Listing with no session and no email degrades to an empty list
    let empty: Vec<Value> = client
        .get(format!("{base}/api/fichas"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(empty.is_empty());

    // Creation resolves the owner through the email in the body
    let response = client
        .post(format!("{base}/api/fichas"))
        .json(&json!({ "user_email": "ana@x.com", "nome": "Treino A", "dia": "segunda" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["success"], json!(true));
    let routine_id = created["id"].as_i64().unwrap();

    // Listing with the email fallback sees it, with both weekday spellings
    let listed: Vec<Value> = client
        .get(format!("{base}/api/fichas?email=ana@x.com"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"].as_i64(), Some(routine_id));
    assert_eq!(listed[0]["nome"], json!("Treino A"));
    assert_eq!(listed[0]["dia_semana"], json!("segunda"));
    assert_eq!(listed[0]["dia"], json!("segunda"));

    // An unknown email on the write side is a 404
    let response = client
        .post(format!("{base}/api/fichas"))
        .json(&json!({ "user_email": "ghost@x.com", "nome": "Treino X", "dia": "terça" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting removes it from the listing
    let response = client
        .delete(format!("{base}/api/fichas/{routine_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Value> = client
        .get(format!("{base}/api/fichas?email=ana@x.com"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_session_cookie_scopes_requests_without_email() {
    let server = spawn_server().await.unwrap();
    let base = server.base_url();
    // Cookie-aware client: login stores the session cookie, later calls send it
    let client = reqwest::Client::builder().cookie_store(true).build().unwrap();

    register(&client, &base, "Ana", "ana@x.com", "s1").await;
    let response = client
        .post(format!("{base}/api/login"))
        .json(&json!({ "email": "ana@x.com", "senha": "s1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    client
        .post(format!("{base}/api/fichas"))
        .json(&json!({ "user_email": "ana@x.com", "nome": "Treino A", "dia": "segunda" }))
        .send()
        .await
        .unwrap();

    // No ?email needed: the session cookie resolves the identity
    let listed: Vec<Value> = client
        .get(format!("{base}/api/fichas"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);

    // After logout the same request degrades to an empty list
    let response = client
        .post(format!("{base}/api/logout"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Value> = client
        .get(format!("{base}/api/fichas"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.is_empty());

    // Logout is idempotent even with no session left
    let response = client
        .get(format!("{base}/api/logout"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn test_exercise_and_history_flow() {
    let server = spawn_server().await.unwrap();
    let base = server.base_url();
    let client = reqwest::Client::new();

    register(&client, &base, "Ana", "ana@x.com", "s1").await;
    let created: Value = client
        .post(format!("{base}/api/fichas"))
        .json(&json!({ "user_email": "ana@x.com", "nome": "Treino A", "dia": "segunda" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let routine_id = created["id"].as_i64().unwrap();

    // Add an exercise to the routine
    let created: Value = client
        .post(format!("{base}/api/exercicios"))
        .json(&json!({ "ficha_id": routine_id, "nome": "Supino reto", "grupo": "Peito" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["success"], json!(true));
    let exercise_id = created["id"].as_i64().unwrap();

    // Update its notes and superset flag
    let response = client
        .put(format!("{base}/api/exercicios/{exercise_id}"))
        .json(&json!({ "notes": "banco no furo 4", "is_biset": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Value> = client
        .get(format!("{base}/api/exercicios?ficha_id={routine_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["nome_exercicio"], json!("Supino reto"));
    assert_eq!(listed[0]["grupo_muscular"], json!("Peito"));
    assert_eq!(listed[0]["setup_notes"], json!("banco no furo 4"));
    assert_eq!(listed[0]["is_biset"], json!(true));

    // Record two sets and read them back per exercise, newest date first
    for (peso, reps, data) in [(60.0, 10, "2025-03-10"), (62.5, 8, "2025-03-12")] {
        let response = client
            .post(format!("{base}/api/historico"))
            .json(&json!({
                "ficha_exercicio_id": exercise_id,
                "peso": peso,
                "reps": reps,
                "tipo": "working",
                "data_registro": data,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let history: Vec<Value> = client
        .get(format!("{base}/api/historico?exercicio_id={exercise_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["data_registro"], json!("2025-03-12"));
    assert_eq!(history[0]["peso"].as_f64(), Some(62.5));
    assert_eq!(history[0]["repeticoes"].as_i64(), Some(8));
    assert_eq!(history[0]["tipo_serie"], json!("working"));

    // Per-user history carries the exercise name for the heatmap
    let history: Vec<Value> = client
        .get(format!("{base}/api/historico?email=ana@x.com"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["nome_exercicio"], json!("Supino reto"));

    // No identity at all degrades to an empty history
    let history: Vec<Value> = client
        .get(format!("{base}/api/historico"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(history.is_empty());

    // Deleting the exercise removes it from the listing
    let response = client
        .delete(format!("{base}/api/exercicios/{exercise_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Value> = client
        .get(format!("{base}/api/exercicios?ficha_id={routine_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_weight_log_round_trip() {
    let server = spawn_server().await.unwrap();
    let base = server.base_url();
    let client = reqwest::Client::new();

    register(&client, &base, "Ana", "ana@x.com", "s1").await;

    for (weight, data) in [(71.2, "2025-02-01"), (70.4, "2025-03-01")] {
        let response = client
            .post(format!("{base}/api/peso"))
            .json(&json!({ "user_email": "ana@x.com", "weight": weight, "date": data }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Chart format: chronological {weight, date} pairs
    let entries: Vec<Value> = client
        .get(format!("{base}/api/peso?email=ana@x.com"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["date"], json!("2025-02-01"));
    assert_eq!(entries[0]["weight"].as_f64(), Some(71.2));
    assert_eq!(entries[1]["date"], json!("2025-03-01"));

    // Unknown email degrades to an empty list on the read side
    let entries: Vec<Value> = client
        .get(format!("{base}/api/peso?email=ghost@x.com"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(entries.is_empty());

    // But is a 404 on the write side
    let response = client
        .post(format!("{base}/api/peso"))
        .json(&json!({ "user_email": "ghost@x.com", "weight": 70.0, "date": "2025-03-02" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_library_and_health_endpoints() {
    let server = spawn_server().await.unwrap();
    let base = server.base_url();
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/api/biblioteca"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let library: Vec<Value> = response.json().await.unwrap();
    assert!(library.is_empty());

    let response = client.get(format!("{base}/api/health")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], json!("ok"));
}
