use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Issued tokens expire this many days after issuance.
pub const TOKEN_LIFETIME_DAYS: i64 = 7;

/// Issues and verifies HS256-signed bearer tokens.
///
/// Holds both key halves derived from the process-wide signing secret.
/// The secret is fixed for the process lifetime; rotating it invalidates
/// every outstanding token.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a service keyed by a symmetric secret (HS256).
    ///
    /// The secret length (>= 32 bytes) is enforced by server config
    /// validation before this is called.
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No clock-skew allowance: a token is invalid at its expiry instant.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a signed token asserting "user `user_id` is authenticated
    /// as of now", valid for [`TOKEN_LIFETIME_DAYS`].
    #[track_caller]
    pub fn issue(&self, user_id: Uuid, email: &str) -> AuthErrorResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::Signing {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// Expiry is reported as [`AuthError::TokenExpired`]; every other
    /// failure (bad signature, malformed encoding, missing claims) as
    /// [`AuthError::JwtDecode`] or [`AuthError::InvalidClaim`].
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // jsonwebtoken only rejects strictly-past expiries; the expiry
        // instant itself must fail too.
        if Utc::now().timestamp() >= token_data.claims.exp {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
