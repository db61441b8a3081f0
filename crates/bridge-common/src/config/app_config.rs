//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).
//! Defaults match the local docker-compose deployment.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::auth::ApiKey;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub postgres: PostgresConfig,
    pub mongo: MongoConfig,
    pub api_key: ApiKey,
    pub query: QueryConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Chatwoot PostgreSQL connection settings
#[derive(Clone)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

/// LibreChat MongoDB connection settings
#[derive(Clone)]
pub struct MongoConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub max_pool_size: u32,
}

impl MongoConfig {
    /// Connection string without credentials
    #[must_use]
    pub fn uri(&self) -> String {
        format!("mongodb://{}:{}/{}", self.host, self.port, self.database)
    }

    /// Admin credentials, only when both username and password are set
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(password)) => Some((user, password)),
            _ => None,
        }
    }
}

impl fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MongoConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("max_pool_size", &self.max_pool_size)
            .finish()
    }
}

/// How LibreChat result lists are embedded in the response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentEncoding {
    /// The list is a JSON array inside the envelope
    #[default]
    Nested,
    /// The list is pre-serialized and embedded as a JSON string (legacy clients)
    String,
}

impl FromStr for DocumentEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nested" | "json" => Ok(Self::Nested),
            "string" | "legacy" => Ok(Self::String),
            other => Err(format!("expected 'nested' or 'string', got '{other}'")),
        }
    }
}

/// Query limits shared by all list routes
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Upper bound applied to any caller-supplied `limit`
    pub max_limit: i64,
    /// Budget for a single store call
    pub timeout: Duration,
    pub document_encoding: DocumentEncoding,
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "ai-ecosystem-bridge".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_api_key() -> &'static str {
    "deepnote-api-key-change-me"
}

fn default_max_limit() -> i64 {
    1000
}

fn default_query_timeout_secs() -> u64 {
    30
}

/// Reads variables through a lookup function; empty values count as unset.
struct Vars<F> {
    lookup: F,
}

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.trim().is_empty())
    }

    fn string_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    fn parse_or<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidValue(key, e.to_string())),
            None => Ok(default),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars { lookup };

        let max_limit: i64 = vars.parse_or("BRIDGE_MAX_LIMIT", default_max_limit())?;
        if max_limit < 1 {
            return Err(ConfigError::InvalidValue(
                "BRIDGE_MAX_LIMIT",
                format!("must be at least 1, got {max_limit}"),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: vars.string_or("APP_NAME", &default_app_name()),
                env: vars.parse_or("APP_ENV", Environment::default())?,
            },
            server: ServerConfig {
                host: vars.string_or("BRIDGE_HOST", &default_host()),
                port: vars.parse_or("BRIDGE_PORT", default_port())?,
            },
            postgres: PostgresConfig {
                host: vars.string_or("POSTGRES_HOST", "postgres"),
                port: vars.parse_or("POSTGRES_PORT", 5432)?,
                database: vars.string_or("POSTGRES_DB", "chatwoot"),
                user: vars.string_or("POSTGRES_USER", "chatwoot"),
                password: vars.string_or("POSTGRES_PASSWORD", "chatwoot"),
                max_connections: vars.parse_or("POSTGRES_MAX_CONNECTIONS", 10)?,
                min_connections: vars.parse_or("POSTGRES_MIN_CONNECTIONS", 0)?,
            },
            mongo: MongoConfig {
                host: vars.string_or("MONGO_HOST", "mongo"),
                port: vars.parse_or("MONGO_PORT", 27017)?,
                database: vars.string_or("MONGO_DB", "LibreChat"),
                username: vars.get("MONGO_ROOT_USERNAME"),
                password: vars.get("MONGO_ROOT_PASSWORD"),
                max_pool_size: vars.parse_or("MONGO_MAX_POOL_SIZE", 10)?,
            },
            api_key: ApiKey::new(vars.string_or("BRIDGE_API_KEY", default_api_key())),
            query: QueryConfig {
                max_limit,
                timeout: Duration::from_secs(
                    vars.parse_or("BRIDGE_QUERY_TIMEOUT_SECS", default_query_timeout_secs())?,
                ),
                document_encoding: vars
                    .parse_or("BRIDGE_DOCUMENT_ENCODING", DocumentEncoding::default())?,
            },
            cors: CorsConfig {
                allowed_origins: vars
                    .get("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }

    /// Whether the API key is still the shipped placeholder
    #[must_use]
    pub fn uses_default_api_key(&self) -> bool {
        self.api_key.matches(default_api_key())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
