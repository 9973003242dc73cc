//! One-way password hashing and verification (bcrypt).
//!
//! Cost 12 gives a 2^12 work factor: slow enough to resist offline brute
//! force, fast enough for interactive login. Both functions are pure and
//! CPU-heavy; callers on an async runtime must run them on a blocking
//! pool (the server uses `tokio::task::spawn_blocking`).

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Bcrypt work factor (2^12 iterations).
pub const HASH_COST: u32 = 12;

/// Hash a password with a fresh random salt. Two calls on the same
/// password yield different strings; both verify.
#[track_caller]
pub fn hash(password: &str) -> AuthErrorResult<String> {
    bcrypt::hash(password, HASH_COST).map_err(|e| AuthError::Hashing {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Verify a password against a stored hash using bcrypt's own
/// constant-time comparison. A malformed hash is not an error; it simply
/// does not verify.
pub fn verify(password: &str, credential_hash: &str) -> bool {
    bcrypt::verify(password, credential_hash).unwrap_or(false)
}
