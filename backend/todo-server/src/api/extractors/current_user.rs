//! Axum extractor for the authenticated user.

use crate::api::error::ApiError;
use crate::api::identity_store::SqlIdentityStore;
use crate::state::AppState;

use todo_auth::AuthError;
use todo_core::User;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use http::header::AUTHORIZATION;

/// Extracts and resolves the bearer token from the Authorization header.
///
/// Every request carrying this extractor is independently re-verified:
/// token signature and expiry first, then a live user lookup. No session
/// state is carried between requests besides the token itself.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = bearer_token(parts)?;

            let store = SqlIdentityStore::new(state.pool.clone());
            let user = state.resolver.resolve(token, &store).await?;

            log::debug!("Authenticated request from user {}", user.id);
            Ok(CurrentUser(user))
        }
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let value = header.to_str().map_err(|_| AuthError::InvalidScheme {
        location: ErrorLocation::from(Location::caller()),
    })?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })
}
