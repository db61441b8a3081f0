//! Message database model

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Row shape of the message projection
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub conversation_id: i64,
    pub sender_type: Option<String>,
    pub content: Option<String>,
    pub created_at: NaiveDateTime,
    pub message_type: i64,
}

