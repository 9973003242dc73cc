//! The user-lookup capability the identity resolver consults, backed by
//! the users table.

use todo_auth::{AuthError, IdentityStore, Result as AuthErrorResult};
use todo_core::User;
use todo_db::UserRepository;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct SqlIdentityStore {
    pool: SqlitePool,
}

impl SqlIdentityStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityStore for SqlIdentityStore {
    async fn find_by_id(&self, id: Uuid) -> AuthErrorResult<Option<User>> {
        let repo = UserRepository::new(self.pool.clone());

        // Any store failure during resolution is an availability problem
        // from the resolver's point of view; the details go to the log,
        // not to the client.
        repo.find_by_id(id).await.map_err(|e| {
            log::error!("Identity lookup failed: {}", e);
            AuthError::StoreUnavailable {
                message: "identity store lookup failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
