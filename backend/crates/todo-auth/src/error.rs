use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT signing failed: {source} {location}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    /// Token verified but its subject no longer resolves to a user.
    /// Surfaced to HTTP callers identically to a bad token.
    #[error("Token subject no longer exists {location}")]
    UnknownIdentity { location: ErrorLocation },

    #[error("Not the resource owner {location}")]
    Forbidden { location: ErrorLocation },

    /// The identity store could not be reached. Kept distinct from the
    /// authentication failures so an outage is never reported as bad
    /// credentials.
    #[error("Identity store unavailable: {message} {location}")]
    StoreUnavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// True for every failure that should surface as HTTP 401.
    pub fn is_unauthenticated(&self) -> bool {
        !matches!(
            self,
            Self::Forbidden { .. }
                | Self::StoreUnavailable { .. }
                | Self::Hashing { .. }
                | Self::Signing { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
