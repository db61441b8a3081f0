//! # bridge-core
//!
//! Domain layer containing the records surfaced by the gateway, the uniform
//! query shapes, and the store traits each backend connector implements.
//! This crate has zero dependencies on infrastructure (database drivers, web framework, etc.).

pub mod entities;
pub mod error;
pub mod query;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{ChatwootConversation, ChatwootMessage, JsonDocument};
pub use error::{StoreError, StoreKind};
pub use query::{MessageQuery, PageQuery};
pub use traits::{ChatwootStore, LibreChatStore, StoreResult};
