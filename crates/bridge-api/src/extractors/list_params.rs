//! List parameter extractor
//!
//! Query parameters are read leniently: a missing or unparsable value falls
//! back to its default instead of rejecting the request. When a key repeats,
//! the first occurrence wins.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};
use bridge_core::query::{
    MessageQuery, PageQuery, DEFAULT_CONVERSATION_LIMIT, DEFAULT_MESSAGE_LIMIT,
};

use crate::state::AppState;

/// Raw query pairs plus the configured upper bound on `limit`
#[derive(Debug, Clone)]
pub struct ListParams {
    pairs: Vec<(String, String)>,
    max_limit: i64,
}

impl ListParams {
    pub fn new(pairs: Vec<(String, String)>, max_limit: i64) -> Self {
        Self { pairs, max_limit }
    }

    fn integer(&self, key: &str) -> Option<i64> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.trim().parse().ok())
    }

    /// `limit`, clamped to `0..=max_limit`
    pub fn limit(&self, default: i64) -> i64 {
        self.integer("limit")
            .unwrap_or(default)
            .clamp(0, self.max_limit)
    }

    /// A non-negative skip count read from `key`; anything else is 0
    pub fn offset(&self, key: &str) -> u64 {
        self.integer(key)
            .and_then(|v| u64::try_from(v).ok())
            .unwrap_or(0)
    }

    /// Conversation page, reading the skip count from `offset_key`
    pub fn page(&self, offset_key: &str) -> PageQuery {
        PageQuery::new(self.limit(DEFAULT_CONVERSATION_LIMIT), self.offset(offset_key))
    }

    /// Message query for one conversation
    pub fn messages<Id>(&self, conversation_id: Id) -> MessageQuery<Id> {
        MessageQuery::new(conversation_id, self.limit(DEFAULT_MESSAGE_LIMIT))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        let max_limit = AppState::from_ref(state).config().query.max_limit;
        Ok(ListParams::new(pairs, max_limit))
    }
}
