//! Signup and login handlers.
//!
//! Bcrypt hashing and verification are CPU-heavy by design, so both run
//! on the blocking pool instead of the async runtime.

use crate::api::auth::auth_response::AuthResponse;
use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::signup_request::SignupRequest;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;

use todo_auth::password;
use todo_core::User;
use todo_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;

const MIN_PASSWORD_LEN: usize = 8;

/// POST /api/auth/signup
///
/// Create a new account and log it in. Fully succeeds (record persisted,
/// token issued) or has no observable effect.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let email = validate_email(&req.email)?;
    validate_password(&req.password)?;
    let name = req.name.as_deref().map(str::trim).filter(|n| !n.is_empty());

    let repo = UserRepository::new(state.pool.clone());

    // Check first for a friendly error; the UNIQUE index below is the
    // backstop against a concurrent signup with the same email.
    if repo.find_by_email(&email).await?.is_some() {
        return Err(ApiError::EmailTaken {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let password_to_hash = req.password.clone();
    let password_hash =
        tokio::task::spawn_blocking(move || password::hash(&password_to_hash)).await??;

    let user = User::new(email, name.map(String::from), password_hash);

    if let Err(e) = repo.create(&user).await {
        if e.is_unique_violation() {
            return Err(ApiError::EmailTaken {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        return Err(e.into());
    }

    let token = state.token_service.issue(user.id, &user.email)?;

    log::info!("New account created: {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
            message: "Account created successfully. You are now logged in.".to_string(),
        }),
    ))
}

/// POST /api/auth/login
///
/// Authenticate and issue a 7-day token. Unknown email and wrong
/// password produce the identical error so accounts cannot be
/// enumerated.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .find_by_email(req.email.trim())
        .await?
        .ok_or_else(|| ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let password = req.password;
    let stored_hash = user.password_hash.clone();
    let verified =
        tokio::task::spawn_blocking(move || password::verify(&password, &stored_hash)).await?;

    if !verified {
        return Err(ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let token = state.token_service.issue(user.id, &user.email)?;

    log::info!("User {} logged in", user.id);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
        message: "Login successful. Welcome back!".to_string(),
    }))
}

#[track_caller]
fn validate_email(raw: &str) -> ApiResult<String> {
    let email = raw.trim();

    // Just enough shape checking to catch obvious mistakes; uniqueness
    // is what actually matters.
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));

    if email.is_empty() || !well_formed || email.len() > 255 {
        return Err(ApiError::Validation {
            message: "Invalid email address".to_string(),
            field: Some("email".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(email.to_string())
}

#[track_caller]
fn validate_password(password: &str) -> ApiResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation {
            message: format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            field: Some("password".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
