use crate::api::auth::user_dto::UserDto;

use serde::Serialize;

/// Authentication response: bearer token plus the public user view
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
    pub message: String,
}
