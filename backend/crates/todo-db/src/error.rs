use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Row decode failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl DbError {
    /// True when an INSERT hit a UNIQUE constraint (email already taken).
    pub fn is_unique_violation(&self) -> bool {
        if let Self::Sqlx {
            source: sqlx::Error::Database(db),
            ..
        } = self
        {
            db.is_unique_violation()
        } else {
            false
        }
    }

    /// True when the store itself is unreachable, as opposed to a query
    /// or decode failure. Callers map this to a 503, never a 401.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Sqlx {
                source: sqlx::Error::Io(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::Tls(_),
                ..
            }
        )
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
