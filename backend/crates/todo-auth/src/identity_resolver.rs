//! Bearer token -> live user record.

use crate::{AuthError, Result as AuthErrorResult, TokenService};

use todo_core::User;

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use error_location::ErrorLocation;
use uuid::Uuid;

/// Lookup capability the resolver consults. Implemented by the caller
/// over whatever store holds user records.
///
/// Implementations report an unreachable or failing store as
/// [`AuthError::StoreUnavailable`]; "no such user" is `Ok(None)`.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AuthErrorResult<Option<User>>;
}

/// Resolves a verified token to the user it names.
#[derive(Clone)]
pub struct IdentityResolver {
    token_service: Arc<TokenService>,
}

impl IdentityResolver {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }

    /// Verify `token`, then load the subject from `store`.
    ///
    /// A subject that no longer exists yields
    /// [`AuthError::UnknownIdentity`] — internally distinct from a bad
    /// token for logging, but mapped to the same HTTP response so the
    /// API leaks nothing about which identities exist.
    pub async fn resolve(
        &self,
        token: &str,
        store: &dyn IdentityStore,
    ) -> AuthErrorResult<User> {
        let claims = self.token_service.verify(token)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("not a UUID: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UnknownIdentity {
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
