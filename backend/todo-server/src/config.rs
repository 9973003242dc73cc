use crate::error::{Result as ServerErrorResult, ServerError};

use std::net::SocketAddr;
use std::path::PathBuf;

/// Minimum signing secret length in bytes.
const MIN_JWT_SECRET_LEN: usize = 32;

/// Server configuration loaded from environment variables, once at
/// startup. The signing secret and token lifetime are process-wide and
/// constant thereafter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// SQLite database file path (default: todo.db)
    pub database_path: PathBuf,

    /// Maximum pooled database connections (default: 10)
    pub max_db_connections: u32,

    /// JWT signing secret for HS256; required, >= 32 bytes
    pub jwt_secret: String,

    /// Allowed CORS origins; "*" allows any
    pub cors_origins: Vec<String>,

    /// Log level (default: info)
    pub log_level: log::LevelFilter,

    /// Enable colored logs on stdout (default: true)
    pub log_colored: bool,

    /// Optional log file path; None = stdout
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| ServerError::MissingJwtSecret)?;

        let config = Self {
            bind_addr,
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "todo.db".to_string())
                .into(),

            max_db_connections: std::env::var("MAX_DB_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),

            jwt_secret,

            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),

            log_level: std::env::var("LOG_LEVEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(log::LevelFilter::Info),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),

            log_file: std::env::var("LOG_FILE").ok().map(PathBuf::from),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration. A short signing secret is a refusal to
    /// start, not a warning.
    fn validate(&self) -> ServerErrorResult<()> {
        let length = self.jwt_secret.len();
        if length < MIN_JWT_SECRET_LEN {
            return Err(ServerError::WeakJwtSecret { length });
        }

        Ok(())
    }

    /// Log a startup summary. The secret itself is never logged.
    pub fn log_summary(&self) {
        log::info!("Bind address: {}", self.bind_addr);
        log::info!("Database: {}", self.database_path.display());
        log::info!("CORS origins: {}", self.cors_origins.join(", "));
        log::info!("JWT: HS256, secret loaded ({} bytes)", self.jwt_secret.len());
    }
}
