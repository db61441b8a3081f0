//! Uniform query shapes
//!
//! Every list operation is expressed as a limit plus either an offset or a
//! parent conversation filter. Translators in the connector crates turn these
//! into SQL statements or find specifications.

/// Default page size for conversation listings
pub const DEFAULT_CONVERSATION_LIMIT: i64 = 50;
/// Default page size for message listings
pub const DEFAULT_MESSAGE_LIMIT: i64 = 100;

/// Offset-paginated listing (`offset` for Chatwoot, `skip` for LibreChat)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: i64,
    pub offset: u64,
}

impl PageQuery {
    pub fn new(limit: i64, offset: u64) -> Self {
        Self { limit, offset }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CONVERSATION_LIMIT,
            offset: 0,
        }
    }
}

/// Messages of one conversation, most recent first.
///
/// `Id` is `i64` for Chatwoot and an opaque `String` for LibreChat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageQuery<Id> {
    pub conversation_id: Id,
    pub limit: i64,
}

impl<Id> MessageQuery<Id> {
    pub fn new(conversation_id: Id, limit: i64) -> Self {
        Self {
            conversation_id,
            limit,
        }
    }
}
