//! Conversation database model

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Row shape of the conversation projection.
///
/// Integer columns are widened to `int8` and timestamps cast to `timestamp`
/// in the SQL, so the model is stable across Chatwoot schema revisions.
#[derive(Debug, Clone, FromRow)]
pub struct ConversationModel {
    pub id: i64,
    pub account_id: i64,
    pub inbox_id: i64,
    pub status: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
