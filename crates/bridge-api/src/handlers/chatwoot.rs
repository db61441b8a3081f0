//! Chatwoot handlers

use axum::extract::State;
use bridge_core::{ChatwootConversation, ChatwootMessage, StoreKind};

use crate::extractors::{ConversationId, ListParams};
use crate::handlers::bounded;
use crate::response::{ApiError, ApiResult, Listing};
use crate::state::AppState;

/// List conversations, most recent first
///
/// GET /chatwoot/conversations?limit=50&offset=0
pub async fn list_conversations(
    State(state): State<AppState>,
    params: ListParams,
) -> ApiResult<Listing<Vec<ChatwootConversation>>> {
    let page = params.page("offset");
    if page.limit == 0 {
        return Ok(Listing::new("conversations", Vec::new()));
    }
    let conversations = bounded(
        StoreKind::Chatwoot,
        state.config().query.timeout,
        state.chatwoot().list_conversations(page),
    )
    .await?;

    Ok(Listing::new("conversations", conversations))
}

/// List messages of one conversation, most recent first
///
/// GET /chatwoot/messages/:conversation_id?limit=100
pub async fn list_messages(
    State(state): State<AppState>,
    ConversationId(conversation_id): ConversationId<u64>,
    params: ListParams,
) -> ApiResult<Listing<Vec<ChatwootMessage>>> {
    let conversation_id = i64::try_from(conversation_id).map_err(|_| ApiError::NotFound)?;
    let query = params.messages(conversation_id);
    if query.limit == 0 {
        return Ok(Listing::new("messages", Vec::new()));
    }
    let messages = bounded(
        StoreKind::Chatwoot,
        state.config().query.timeout,
        state.chatwoot().list_messages(query),
    )
    .await?;

    Ok(Listing::new("messages", messages))
}
