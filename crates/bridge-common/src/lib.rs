//! # bridge-common
//!
//! Shared utilities including configuration, error handling, API key verification, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::ApiKey;
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DocumentEncoding, Environment, MongoConfig,
    PostgresConfig, QueryConfig, ServerConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{try_init_tracing, TracingConfig, TracingError};
