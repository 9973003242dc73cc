//! User entity - an authenticated account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user account.
///
/// `password_hash` is the stored bcrypt hash, never the password itself,
/// and must never appear in an API response (the public view DTO lives in
/// the server crate and simply has no such field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Unique, case-preserved; used only for lookup and login.
    pub email: String,
    /// Optional display name, no uniqueness constraint.
    pub name: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id and creation timestamp.
    pub fn new(email: String, name: Option<String>, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
