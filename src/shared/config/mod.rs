//! Application configuration module
//!
//! `AppConfig` holds everything the server needs at startup: the database URL,
//! the listen address, and the token and password-hashing parameters. It is
//! built either explicitly through [`AppConfigBuilder`] (tests do this) or from
//! the process environment with [`AppConfig::from_env`].

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Secret used when `JWT_SECRET` is unset in debug builds.
const DEV_JWT_SECRET: &str = "jobtrack-development-secret-change-me-now";

/// Minimum secret length accepted for HS256 signing.
const MIN_SECRET_LEN: usize = 32;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// sqlx connection URL for the SQLite database
    pub database_url: String,
    /// Upper bound on pooled database connections
    pub max_connections: u32,
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// HMAC secret for signing access and refresh tokens
    pub jwt_secret: String,
    /// Lifetime of access tokens
    pub access_token_ttl: Duration,
    /// Lifetime of refresh tokens
    pub refresh_token_ttl: Duration,
    /// bcrypt cost factor for stored password hashes
    pub password_hash_cost: u32,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to their defaults; set but malformed ones are
    /// reported as [`ConfigError`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(max) = parse_env::<u32>("DATABASE_MAX_CONNECTIONS")? {
            builder = builder.max_connections(max);
        }

        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_env::<u16>("SERVER_PORT")?.unwrap_or(8000);
        let bind_addr = format!("{}:{}", host, port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_HOST",
                value: host.clone(),
            })?;
        builder = builder.bind_addr(bind_addr);

        match std::env::var("JWT_SECRET") {
            Ok(secret) => builder = builder.jwt_secret(secret),
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                builder = builder.jwt_secret(DEV_JWT_SECRET.to_string());
            }
            Err(_) => return Err(ConfigError::MissingValue("JWT_SECRET")),
        }

        if let Some(secs) = parse_env::<u64>("ACCESS_TOKEN_TTL_SECS")? {
            builder = builder.access_token_ttl(Duration::from_secs(secs));
        }
        if let Some(secs) = parse_env::<u64>("REFRESH_TOKEN_TTL_SECS")? {
            builder = builder.refresh_token_ttl(Duration::from_secs(secs));
        }
        if let Some(cost) = parse_env::<u32>("BCRYPT_COST")? {
            builder = builder.password_hash_cost(cost);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }
        if self.jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret {
                min: MIN_SECRET_LEN,
            });
        }
        if self.access_token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "ACCESS_TOKEN_TTL_SECS",
                value: "0".to_string(),
            });
        }
        if self.refresh_token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "REFRESH_TOKEN_TTL_SECS",
                value: "0".to_string(),
            });
        }
        if !(4..=31).contains(&self.password_hash_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.password_hash_cost.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Builder for AppConfig
#[derive(Debug)]
pub struct AppConfigBuilder {
    database_url: String,
    max_connections: u32,
    bind_addr: SocketAddr,
    jwt_secret: Option<String>,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
    password_hash_cost: u32,
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self {
            database_url: "sqlite://jobtrack.db".to_string(),
            max_connections: 5,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            jwt_secret: None,
            access_token_ttl: Duration::from_secs(5 * 60),
            refresh_token_ttl: Duration::from_secs(24 * 60 * 60),
            password_hash_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    /// Set the pool size
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set the listen address
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the access token lifetime
    pub fn access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    /// Set the refresh token lifetime
    pub fn refresh_token_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_token_ttl = ttl;
        self
    }

    /// Set the bcrypt cost
    pub fn password_hash_cost(mut self, cost: u32) -> Self {
        self.password_hash_cost = cost;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database_url: self.database_url,
            max_connections: self.max_connections,
            bind_addr: self.bind_addr,
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            access_token_ttl: self.access_token_ttl,
            refresh_token_ttl: self.refresh_token_ttl,
            password_hash_cost: self.password_hash_cost,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("JWT_SECRET must be at least {min} bytes long")]
    WeakSecret { min: usize },
}
