//! Credential and access-control core.
//!
//! Four pieces, leaf to root: password hashing ([`password`]), token
//! issuance/verification ([`TokenService`]), bearer-token-to-user
//! resolution ([`IdentityResolver`]), and the ownership check
//! ([`Authorizer`]/[`OwnerOnly`]). Persistence is supplied by the caller
//! through the [`IdentityStore`] capability.

pub mod access_guard;
pub mod claims;
pub mod error;
pub mod identity_resolver;
pub mod password;
pub mod token_service;

pub use access_guard::{Authorizer, OwnerOnly};
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use identity_resolver::{IdentityResolver, IdentityStore};
pub use token_service::{TOKEN_LIFETIME_DAYS, TokenService};
