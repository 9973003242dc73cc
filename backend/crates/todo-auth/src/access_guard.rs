//! Ownership check gating every resource operation.

use crate::{AuthError, Result as AuthErrorResult};

use todo_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Authorization policy: may `identity` act on resources owned by
/// `claimed_owner_id`?
///
/// A one-method seam so the ownership rule can be swapped (role-based,
/// delegated access) without touching resolution or the handlers.
pub trait Authorizer: Send + Sync {
    fn authorize(&self, identity: &User, claimed_owner_id: &str) -> AuthErrorResult<()>;
}

/// The sole shipped policy: ownership equality. No hierarchy, no
/// delegation, no admin override.
pub struct OwnerOnly;

impl Authorizer for OwnerOnly {
    fn authorize(&self, identity: &User, claimed_owner_id: &str) -> AuthErrorResult<()> {
        // Parse rather than compare strings so UUID casing/formatting
        // differences do not matter. A path id that is not a UUID is
        // Forbidden like any mismatch - never a hint about whether the
        // claimed owner exists.
        match Uuid::parse_str(claimed_owner_id.trim()) {
            Ok(claimed) if claimed == identity.id => Ok(()),
            _ => Err(AuthError::Forbidden {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
