//! Store traits (ports) - define the read interface of each backend
//!
//! The API layer only sees these traits, so handlers can be exercised
//! against in-memory fakes and the connectors stay swappable.

use async_trait::async_trait;

use crate::entities::{ChatwootConversation, ChatwootMessage, JsonDocument};
use crate::error::StoreError;
use crate::query::{MessageQuery, PageQuery};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================================
// Chatwoot (relational)
// ============================================================================

#[async_trait]
pub trait ChatwootStore: Send + Sync {
    /// Conversations ordered by creation time, most recent first
    async fn list_conversations(&self, page: PageQuery) -> StoreResult<Vec<ChatwootConversation>>;

    /// Messages of one conversation, most recent first
    async fn list_messages(&self, query: MessageQuery<i64>) -> StoreResult<Vec<ChatwootMessage>>;

    /// Round-trip to the database
    async fn ping(&self) -> StoreResult<()>;
}

// ============================================================================
// LibreChat (document)
// ============================================================================

#[async_trait]
pub trait LibreChatStore: Send + Sync {
    /// Conversations ordered by `createdAt`, most recent first; skip then limit
    async fn list_conversations(&self, page: PageQuery) -> StoreResult<Vec<JsonDocument>>;

    /// Messages whose `conversationId` equals the given string, most recent first
    async fn list_messages(&self, query: MessageQuery<String>) -> StoreResult<Vec<JsonDocument>>;

    /// Every user document. Unbounded.
    async fn list_users(&self) -> StoreResult<Vec<JsonDocument>>;

    /// Round-trip to the database
    async fn ping(&self) -> StoreResult<()>;
}
