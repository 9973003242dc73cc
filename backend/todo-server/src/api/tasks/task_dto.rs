use todo_core::Task;

use serde::Serialize;

/// Task DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct TaskDto {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_complete: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            user_id: t.user_id.to_string(),
            title: t.title,
            description: t.description,
            is_complete: t.is_complete,
            created_at: t.created_at.to_rfc3339(),
            updated_at: t.updated_at.to_rfc3339(),
        }
    }
}
