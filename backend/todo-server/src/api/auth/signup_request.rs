use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,

    /// Minimum 8 characters
    pub password: String,

    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
}
