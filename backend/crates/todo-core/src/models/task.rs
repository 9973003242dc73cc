//! Task entity - a single todo item owned by one user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Database-assigned row id; 0 until the task is persisted.
    pub id: i64,
    /// Owning user. Access control compares this against the
    /// authenticated identity.
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new incomplete task. Title and description are expected
    /// to be normalized already (see [`crate::validation`]).
    pub fn new(user_id: Uuid, title: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            title,
            description,
            is_complete: false,
            created_at: now,
            updated_at: now,
        }
    }
}
