//! Server configuration.
//!
//! Everything comes from environment variables, read once at startup.
//! `JWT_SECRET` is the only required one; a missing secret is a startup
//! error rather than a default, since a guessable secret would let
//! anyone mint valid session tokens.

use std::env;
use std::net::SocketAddr;

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on (`PORT`, default 5001).
    pub port: u16,
    /// Default log level when `RUST_LOG` is unset (`LOG_LEVEL`, "info").
    pub log_level: String,
    /// `*` or a comma-separated origin allowlist (`CORS_ALLOWED_ORIGINS`).
    pub cors_allowed_origins: String,
    /// Secret for signing session tokens (`JWT_SECRET`, required).
    pub jwt_secret: String,
    /// Session token lifetime in hours (`TOKEN_EXPIRY_HOURS`, 24).
    pub token_expiry_hours: u64,
}

/// Parse an optional environment variable, falling back on any absence
/// or parse failure.
fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl ServerConfig {
    /// Read the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;

        Ok(Self {
            port: env_parse("PORT", 5001),
            log_level: env_parse("LOG_LEVEL", "info".to_string()),
            cors_allowed_origins: env_parse("CORS_ALLOWED_ORIGINS", "*".to_string()),
            jwt_secret,
            token_expiry_hours: env_parse("TOKEN_EXPIRY_HOURS", 24),
        })
    }

    /// The address to bind, on all interfaces.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
}
