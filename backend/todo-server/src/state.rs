use std::sync::Arc;

use sqlx::SqlitePool;
use todo_auth::{Authorizer, IdentityResolver, OwnerOnly, TokenService};

/// Shared application state. Everything here is read-only after startup;
/// request handlers share it by cheap clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_service: Arc<TokenService>,
    pub resolver: IdentityResolver,
    pub authorizer: Arc<dyn Authorizer>,
}

impl AppState {
    /// Wire the auth core around a pool and signing secret.
    pub fn new(pool: SqlitePool, jwt_secret: &[u8]) -> Self {
        let token_service = Arc::new(TokenService::with_hs256(jwt_secret));
        let resolver = IdentityResolver::new(token_service.clone());

        Self {
            pool,
            token_service,
            resolver,
            authorizer: Arc::new(OwnerOnly),
        }
    }
}
