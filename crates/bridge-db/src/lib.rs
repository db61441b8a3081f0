//! # bridge-db
//!
//! Relational connector for the Chatwoot PostgreSQL database via SQLx.
//!
//! ## Overview
//!
//! - Lazy connection pool built from host/port/database settings
//! - Query translators producing parameterized SQL statements
//! - Row models with SQLx `FromRow` derives and their record mappers
//! - `PgChatwootStore`, the [`bridge_core::ChatwootStore`] implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bridge_common::AppConfig;
//! use bridge_core::{ChatwootStore, PageQuery};
//! use bridge_db::{create_pool, PgChatwootStore};
//!
//! async fn example(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&(&config.postgres).into(), config.query.timeout);
//!     let store = PgChatwootStore::new(pool);
//!     let latest = store.list_conversations(PageQuery::new(10, 0)).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod queries;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use queries::SqlStatement;
pub use repositories::PgChatwootStore;
