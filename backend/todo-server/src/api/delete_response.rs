use serde::Serialize;

/// Response body for successful deletions
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: i64,
    pub deleted: bool,
}
