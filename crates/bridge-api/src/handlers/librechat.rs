//! LibreChat handlers

use axum::extract::State;
use bridge_core::{JsonDocument, StoreKind, StoreResult};

use crate::extractors::{ConversationId, ListParams};
use crate::handlers::bounded;
use crate::response::{ApiResult, DocumentList, Listing};
use crate::state::AppState;

async fn documents<F>(state: &AppState, key: &'static str, call: F) -> ApiResult<Listing<DocumentList>>
where
    F: std::future::Future<Output = StoreResult<Vec<JsonDocument>>>,
{
    let query = &state.config().query;
    let documents = bounded(StoreKind::LibreChat, query.timeout, call).await?;
    Ok(Listing::new(key, DocumentList::encode(documents, query.document_encoding)?))
}

/// `limit=0` answers with an empty list; the driver would read it as "no limit"
fn empty(state: &AppState, key: &'static str) -> ApiResult<Listing<DocumentList>> {
    let encoding = state.config().query.document_encoding;
    Ok(Listing::new(key, DocumentList::encode(Vec::new(), encoding)?))
}

/// List conversations, most recent first
///
/// GET /librechat/conversations?limit=50&skip=0
pub async fn list_conversations(
    State(state): State<AppState>,
    params: ListParams,
) -> ApiResult<Listing<DocumentList>> {
    let page = params.page("skip");
    if page.limit == 0 {
        return empty(&state, "conversations");
    }
    documents(&state, "conversations", state.librechat().list_conversations(page)).await
}

/// List messages of one conversation; the id is matched as an opaque string
///
/// GET /librechat/messages/:conversation_id?limit=100
pub async fn list_messages(
    State(state): State<AppState>,
    ConversationId(conversation_id): ConversationId<String>,
    params: ListParams,
) -> ApiResult<Listing<DocumentList>> {
    let query = params.messages(conversation_id);
    if query.limit == 0 {
        return empty(&state, "messages");
    }
    documents(&state, "messages", state.librechat().list_messages(query)).await
}

/// List every user
///
/// GET /librechat/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Listing<DocumentList>> {
    documents(&state, "users", state.librechat().list_users()).await
}
