//! Test fixtures for integration tests
//!
//! In-memory stores that honor the same ordering and paging rules as the
//! real connectors, plus typed response bodies.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bridge_core::{
    ChatwootConversation, ChatwootMessage, ChatwootStore, JsonDocument, LibreChatStore,
    MessageQuery, PageQuery, StoreError, StoreResult,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::json;

// ============================================================================
// Sample data
// ============================================================================

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap_or_default()
}

/// `count` conversations with ids 1..=count, id N created N hours after the base time
pub fn sample_conversations(count: i64) -> Vec<ChatwootConversation> {
    (1..=count)
        .map(|id| ChatwootConversation {
            id,
            account_id: 1,
            inbox_id: 2,
            status: 0,
            created_at: base_time() + Duration::hours(id),
            updated_at: base_time() + Duration::hours(id + 1),
        })
        .collect()
}

/// `count` messages in one conversation, alternating contact and agent
pub fn sample_messages(conversation_id: i64, count: i64) -> Vec<ChatwootMessage> {
    (1..=count)
        .map(|n| ChatwootMessage {
            id: conversation_id * 100 + n,
            conversation_id,
            sender_type: Some((if n % 2 == 0 { "User" } else { "Contact" }).to_string()),
            content: Some(format!("message {n}")),
            created_at: base_time() + Duration::minutes(n),
            message_type: n % 2,
        })
        .collect()
}

/// A LibreChat document with an ObjectId and a relaxed Extended JSON date
pub fn sample_document(oid: &str, field: &str, value: &str, minute: u32) -> JsonDocument {
    json!({
        "_id": { "$oid": oid },
        field: value,
        "createdAt": { "$date": format!("2024-03-01T09:{minute:02}:00Z") },
    })
}

// ============================================================================
// In-memory stores
// ============================================================================

/// Chatwoot store over fixed rows
#[derive(Default)]
pub struct InMemoryChatwoot {
    pub conversations: Vec<ChatwootConversation>,
    pub messages: Vec<ChatwootMessage>,
    pub calls: AtomicUsize,
}

impl InMemoryChatwoot {
    pub fn new(conversations: Vec<ChatwootConversation>, messages: Vec<ChatwootMessage>) -> Self {
        Self {
            conversations,
            messages,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn page<T>(rows: Vec<T>, offset: u64, limit: i64) -> Vec<T> {
    rows.into_iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(usize::try_from(limit).unwrap_or(0))
        .collect()
}

#[async_trait]
impl ChatwootStore for InMemoryChatwoot {
    async fn list_conversations(&self, query: PageQuery) -> StoreResult<Vec<ChatwootConversation>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.conversations.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(page(rows, query.offset, query.limit))
    }

    async fn list_messages(&self, query: MessageQuery<i64>) -> StoreResult<Vec<ChatwootMessage>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows: Vec<ChatwootMessage> = self
            .messages
            .iter()
            .filter(|m| m.conversation_id == query.conversation_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(page(rows, 0, query.limit))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// LibreChat store over fixed documents, already in newest-first order
#[derive(Default)]
pub struct InMemoryLibreChat {
    pub conversations: Vec<JsonDocument>,
    pub messages: Vec<(String, JsonDocument)>,
    pub users: Vec<JsonDocument>,
    pub calls: AtomicUsize,
}

impl InMemoryLibreChat {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LibreChatStore for InMemoryLibreChat {
    async fn list_conversations(&self, query: PageQuery) -> StoreResult<Vec<JsonDocument>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(page(self.conversations.clone(), query.offset, query.limit))
    }

    async fn list_messages(&self, query: MessageQuery<String>) -> StoreResult<Vec<JsonDocument>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rows = self
            .messages
            .iter()
            .filter(|(conversation_id, _)| *conversation_id == query.conversation_id)
            .map(|(_, doc)| doc.clone())
            .collect();
        Ok(page(rows, 0, query.limit))
    }

    async fn list_users(&self) -> StoreResult<Vec<JsonDocument>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.clone())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// A store whose every call fails the way an unreachable server does
pub struct Unreachable {
    pub message: &'static str,
}

impl Unreachable {
    fn fail<T>(&self) -> StoreResult<T> {
        Err(StoreError::Connection(self.message.to_string()))
    }
}

#[async_trait]
impl ChatwootStore for Unreachable {
    async fn list_conversations(&self, _query: PageQuery) -> StoreResult<Vec<ChatwootConversation>> {
        self.fail()
    }

    async fn list_messages(&self, _query: MessageQuery<i64>) -> StoreResult<Vec<ChatwootMessage>> {
        self.fail()
    }

    async fn ping(&self) -> StoreResult<()> {
        self.fail()
    }
}

#[async_trait]
impl LibreChatStore for Unreachable {
    async fn list_conversations(&self, _query: PageQuery) -> StoreResult<Vec<JsonDocument>> {
        self.fail()
    }

    async fn list_messages(&self, _query: MessageQuery<String>) -> StoreResult<Vec<JsonDocument>> {
        self.fail()
    }

    async fn list_users(&self) -> StoreResult<Vec<JsonDocument>> {
        self.fail()
    }

    async fn ping(&self) -> StoreResult<()> {
        self.fail()
    }
}

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatwootConversationsResponse {
    pub conversations: Vec<ChatwootConversation>,
}

#[derive(Debug, Deserialize)]
pub struct ChatwootMessagesResponse {
    pub messages: Vec<ChatwootMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
