//! Query translators
//!
//! Turn the uniform query shapes into parameterized SQL. Caller-supplied
//! values only ever travel as bind parameters, in the order listed in `binds`.

use bridge_core::{MessageQuery, PageQuery};

/// A SQL statement plus its positional bind values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    pub sql: &'static str,
    pub binds: Vec<i64>,
}

const LIST_CONVERSATIONS: &str = r"
    SELECT id::int8 AS id,
           account_id::int8 AS account_id,
           inbox_id::int8 AS inbox_id,
           status::int8 AS status,
           created_at::timestamp AS created_at,
           updated_at::timestamp AS updated_at
    FROM conversations
    ORDER BY created_at DESC
    LIMIT $1 OFFSET $2
";

const LIST_MESSAGES: &str = r"
    SELECT id::int8 AS id,
           conversation_id::int8 AS conversation_id,
           sender_type::text AS sender_type,
           content::text AS content,
           created_at::timestamp AS created_at,
           message_type::int8 AS message_type
    FROM messages
    WHERE conversation_id = $1
    ORDER BY created_at DESC
    LIMIT $2
";

/// Most recent conversations first, `limit` rows after skipping `offset`
pub fn list_conversations(page: PageQuery) -> SqlStatement {
    SqlStatement {
        sql: LIST_CONVERSATIONS,
        binds: vec![page.limit, i64::try_from(page.offset).unwrap_or(i64::MAX)],
    }
}

/// Most recent messages of one conversation first
pub fn list_messages(query: &MessageQuery<i64>) -> SqlStatement {
    SqlStatement {
        sql: LIST_MESSAGES,
        binds: vec![query.conversation_id, query.limit],
    }
}
