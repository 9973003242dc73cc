use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title (required, 1-100 characters after trimming)
    pub title: String,

    /// Optional description (max 500 characters)
    #[serde(default)]
    pub description: Option<String>,
}
