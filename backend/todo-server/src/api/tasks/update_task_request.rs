use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    /// Replacement title (required, 1-100 characters after trimming)
    pub title: String,

    /// Replacement description; omitting it clears the field
    #[serde(default)]
    pub description: Option<String>,

    /// Completion flag; omitting it leaves the current value
    #[serde(default)]
    pub is_complete: Option<bool>,
}
