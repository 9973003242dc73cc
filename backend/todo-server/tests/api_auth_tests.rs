//! Integration tests for signup and login
mod common;

use crate::common::{create_test_app, send, signup};

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn signup_returns_token_and_public_user_view() {
    let (app, _state) = create_test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({ "email": "a@x.com", "password": "longenough1", "name": "Ada" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["name"], "Ada");
    assert!(body["user"]["created_at"].is_string());
    // The public view must never carry the credential hash
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn signup_with_taken_email_conflicts_and_creates_nothing() {
    let (app, _state) = create_test_app().await;
    signup(&app, "a@x.com", "originalpass1").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({ "email": "a@x.com", "password": "attackerpass1" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "EMAIL_TAKEN");

    // The original credentials still work and the attacker's do not,
    // so the failed signup left no trace.
    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "a@x.com", "password": "originalpass1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "a@x.com", "password": "attackerpass1" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn signup_rejects_short_password() {
    let (app, _state) = create_test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({ "email": "a@x.com", "password": "short" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "password");
}

#[tokio::test]
async fn signup_rejects_malformed_email() {
    let (app, _state) = create_test_app().await;

    for email in ["", "no-at-sign", "@nodomain", "user@nodot"] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/auth/signup",
            None,
            Some(json!({ "email": email, "password": "longenough1" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "email: {:?}", email);
        assert_eq!(body["error"]["field"], "email");
    }
}

#[tokio::test]
async fn login_succeeds_with_correct_credentials() {
    let (app, _state) = create_test_app().await;
    signup(&app, "a@x.com", "longenough1").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "a@x.com", "password": "longenough1" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "a@x.com");
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let (app, _state) = create_test_app().await;
    signup(&app, "real@x.com", "longenough1").await;

    let (wrong_pw_status, wrong_pw_body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "real@x.com", "password": "wrongpassword" })),
    )
    .await;

    let (no_user_status, no_user_body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ghost@x.com", "password": "wrongpassword" })),
    )
    .await;

    assert_eq!(wrong_pw_status, StatusCode::UNAUTHORIZED);
    assert_eq!(no_user_status, StatusCode::UNAUTHORIZED);
    // Byte-identical bodies: nothing reveals whether the email exists.
    assert_eq!(wrong_pw_body, no_user_body);
    assert_eq!(wrong_pw_body["error"]["code"], "INVALID_CREDENTIALS");
}
