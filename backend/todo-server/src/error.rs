use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid BIND_ADDR: {source}")]
    InvalidBindAddr {
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("JWT_SECRET is required")]
    MissingJwtSecret,

    #[error("JWT_SECRET too short: {length} bytes (minimum 32)")]
    WeakJwtSecret { length: usize },

    #[error("Environment variable error: {message}")]
    EnvVar { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
