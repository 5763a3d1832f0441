//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FRONTINO_DATABASE_URL` - SQLite connection string (default: `sqlite://frontino.db`)
//! - `FRONTINO_HOST` - Bind address (default: 127.0.0.1)
//! - `FRONTINO_PORT` - Listen port (default: 3000)
//! - `FRONTINO_BASE_URL` - Public base URL (default: `http://localhost:3000`)
//! - `FRONTINO_IMAGE_DIR` - Image storage directory (default: `static/images`)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite database connection URL
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the application
    pub base_url: String,
    /// Directory holding catalog images, served under `/images`
    pub image_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = SecretString::from(get_env_or_default(
            "FRONTINO_DATABASE_URL",
            "sqlite://frontino.db",
        ));
        let host = get_env_or_default("FRONTINO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("FRONTINO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("FRONTINO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("FRONTINO_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("FRONTINO_BASE_URL", "http://localhost:3000");
        let image_dir = PathBuf::from(get_env_or_default("FRONTINO_IMAGE_DIR", "static/images"));
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            image_dir,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the public URL is served over HTTPS (controls secure cookies).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
