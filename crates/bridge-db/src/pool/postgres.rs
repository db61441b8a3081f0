//! PostgreSQL connection pool management
//!
//! The pool connects lazily: the gateway starts even when Chatwoot is down,
//! and each request acquires a connection for exactly one statement.

use std::time::Duration;

use bridge_common::PostgresConfig;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

/// Database configuration for connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Reported to the server as `application_name`
    pub application_name: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Duration,
    /// Maximum lifetime of a connection
    pub max_lifetime: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: String::from("postgres"),
            port: 5432,
            database: String::from("chatwoot"),
            user: String::from("chatwoot"),
            password: String::from("chatwoot"),
            application_name: String::from("ai-ecosystem-bridge"),
            max_connections: 10,
            min_connections: 0,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

impl From<&PostgresConfig> for DatabaseConfig {
    fn from(config: &PostgresConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            database: config.database.clone(),
            user: config.user.clone(),
            password: config.password.clone(),
            max_connections: config.max_connections,
            min_connections: config.min_connections,
            ..Default::default()
        }
    }
}

impl DatabaseConfig {
    /// Use `name` as the connection's `application_name`
    #[must_use]
    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = name.into();
        self
    }

    /// Connection options, with a server-side statement timeout matching the query budget
    pub fn connect_options(&self, statement_timeout: Duration) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
            .application_name(&self.application_name)
            .options([(
                "statement_timeout",
                format!("{}ms", statement_timeout.as_millis()),
            )])
    }
}

/// Create a lazily connecting PostgreSQL pool
pub fn create_pool(config: &DatabaseConfig, statement_timeout: Duration) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout.min(statement_timeout))
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect_lazy_with(config.connect_options(statement_timeout))
}
