//! Chatwoot (relational) records

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Support conversation as stored in the Chatwoot `conversations` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatwootConversation {
    pub id: i64,
    pub account_id: i64,
    pub inbox_id: i64,
    pub status: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Message as stored in the Chatwoot `messages` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatwootMessage {
    pub id: i64,
    pub conversation_id: i64,
    pub sender_type: Option<String>,
    pub content: Option<String>,
    pub created_at: NaiveDateTime,
    pub message_type: i64,
}
