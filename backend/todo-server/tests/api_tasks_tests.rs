//! Integration tests for the task endpoints and the auth gate in front
//! of them
mod common;

use crate::common::{TEST_SECRET, create_test_app, send, signup};

use axum::http::StatusCode;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::json;
use todo_auth::Claims;

fn tasks_uri(user_id: &str) -> String {
    format!("/api/{}/tasks", user_id)
}

#[tokio::test]
async fn create_and_list_round_trip() {
    let (app, _state) = create_test_app().await;
    let (token, user_id) = signup(&app, "a@x.com", "longenough1").await;

    let (status, body) = send(
        &app,
        "POST",
        &tasks_uri(&user_id),
        Some(&token),
        Some(json!({ "title": "  Buy milk  ", "description": " 2 liters " })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    // Stored trimmed
    assert_eq!(body["task"]["title"], "Buy milk");
    assert_eq!(body["task"]["description"], "2 liters");
    assert_eq!(body["task"]["is_complete"], false);
    assert_eq!(body["task"]["user_id"], user_id);

    let (status, body) = send(&app, "GET", &tasks_uri(&user_id), Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["tasks"][0]["title"], "Buy milk");
}

#[tokio::test]
async fn whitespace_only_title_is_rejected() {
    let (app, _state) = create_test_app().await;
    let (token, user_id) = signup(&app, "a@x.com", "longenough1").await;

    let (status, body) = send(
        &app,
        "POST",
        &tasks_uri(&user_id),
        Some(&token),
        Some(json!({ "title": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn list_is_newest_first() {
    let (app, _state) = create_test_app().await;
    let (token, user_id) = signup(&app, "a@x.com", "longenough1").await;

    for title in ["First", "Second", "Third"] {
        let (status, _) = send(
            &app,
            "POST",
            &tasks_uri(&user_id),
            Some(&token),
            Some(json!({ "title": title })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, "GET", &tasks_uri(&user_id), Some(&token), None).await;

    assert_eq!(body["count"], 3);
    assert_eq!(body["tasks"][0]["title"], "Third");
    assert_eq!(body["tasks"][2]["title"], "First");
}

#[tokio::test]
async fn other_owners_path_is_forbidden() {
    let (app, _state) = create_test_app().await;
    let (alice_token, _alice_id) = signup(&app, "alice@x.com", "longenough1").await;
    let (_bob_token, bob_id) = signup(&app, "bob@x.com", "longenough1").await;

    // Real other account
    let (status, body) = send(&app, "GET", &tasks_uri(&bob_id), Some(&alice_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");

    // Nonexistent account: same outcome, no information leak
    let ghost = uuid::Uuid::new_v4().to_string();
    let (status, _) = send(&app, "GET", &tasks_uri(&ghost), Some(&alice_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn missing_or_malformed_tokens_are_unauthenticated() {
    let (app, _state) = create_test_app().await;
    let (_token, user_id) = signup(&app, "a@x.com", "longenough1").await;

    let (status, _) = send(&app, "GET", &tasks_uri(&user_id), None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        "GET",
        &tasks_uri(&user_id),
        Some("not-a-jwt"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn tampered_and_expired_tokens_are_unauthenticated() {
    let (app, _state) = create_test_app().await;
    let (_token, user_id) = signup(&app, "a@x.com", "longenough1").await;
    let now = chrono::Utc::now().timestamp();

    // Signed with the wrong secret
    let forged = encode(
        &Header::new(Algorithm::HS256),
        &Claims {
            sub: user_id.clone(),
            email: "a@x.com".to_string(),
            iat: now,
            exp: now + 3600,
        },
        &EncodingKey::from_secret(b"wrong-secret-but-also-32-bytes-long"),
    )
    .unwrap();

    let (status, _) = send(&app, "GET", &tasks_uri(&user_id), Some(&forged), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Correct secret, already expired
    let expired = encode(
        &Header::new(Algorithm::HS256),
        &Claims {
            sub: user_id.clone(),
            email: "a@x.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        },
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let (status, body) = send(&app, "GET", &tasks_uri(&user_id), Some(&expired), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn token_for_deleted_account_is_unauthenticated() {
    let (app, state) = create_test_app().await;
    let (token, user_id) = signup(&app, "a@x.com", "longenough1").await;

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(&user_id)
        .execute(&state.pool)
        .await
        .unwrap();

    // Valid signature, live expiry, but the subject is gone; must look
    // exactly like any other bad token.
    let (status, body) = send(&app, "GET", &tasks_uri(&user_id), Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn update_changes_title_and_completion() {
    let (app, _state) = create_test_app().await;
    let (token, user_id) = signup(&app, "a@x.com", "longenough1").await;

    let (_, body) = send(
        &app,
        "POST",
        &tasks_uri(&user_id),
        Some(&token),
        Some(json!({ "title": "Buy milk" })),
    )
    .await;
    let task_id = body["task"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/{}/tasks/{}", user_id, task_id),
        Some(&token),
        Some(json!({ "title": "Buy oat milk", "is_complete": true })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["title"], "Buy oat milk");
    assert_eq!(body["task"]["is_complete"], true);
    assert!(body["task"]["description"].is_null());
}

#[tokio::test]
async fn get_and_update_unknown_task_is_not_found() {
    let (app, _state) = create_test_app().await;
    let (token, user_id) = signup(&app, "a@x.com", "longenough1").await;
    let uri = format!("/api/{}/tasks/9999", user_id);

    let (status, body) = send(&app, "GET", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = send(
        &app,
        "PUT",
        &uri,
        Some(&token),
        Some(json!({ "title": "Anything" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_task() {
    let (app, _state) = create_test_app().await;
    let (token, user_id) = signup(&app, "a@x.com", "longenough1").await;

    let (_, body) = send(
        &app,
        "POST",
        &tasks_uri(&user_id),
        Some(&token),
        Some(json!({ "title": "Ephemeral" })),
    )
    .await;
    let task_id = body["task"]["id"].as_i64().unwrap();
    let task_uri = format!("/api/{}/tasks/{}", user_id, task_id);

    let (status, body) = send(&app, "DELETE", &task_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);

    let (status, _) = send(&app, "DELETE", &task_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", &tasks_uri(&user_id), Some(&token), None).await;
    assert_eq!(body["count"], 0);
}
