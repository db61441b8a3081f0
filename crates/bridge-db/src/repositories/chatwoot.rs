//! PostgreSQL implementation of ChatwootStore

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use bridge_core::entities::{ChatwootConversation, ChatwootMessage};
use bridge_core::{ChatwootStore, MessageQuery, PageQuery, StoreResult};

use crate::models::{ConversationModel, MessageModel};
use crate::queries::{self, SqlStatement};

use super::error::map_db_error;

/// PostgreSQL implementation of ChatwootStore
#[derive(Clone)]
pub struct PgChatwootStore {
    pool: PgPool,
}

impl PgChatwootStore {
    /// Create a new PgChatwootStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run one statement on a pooled connection. The connection goes back to
    /// the pool when the call returns, on success and on failure.
    async fn fetch<M>(&self, statement: SqlStatement) -> StoreResult<Vec<M>>
    where
        M: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut query = sqlx::query_as::<_, M>(statement.sql);
        for value in statement.binds {
            query = query.bind(value);
        }

        query.fetch_all(&self.pool).await.map_err(map_db_error)
    }
}

#[async_trait]
impl ChatwootStore for PgChatwootStore {
    #[instrument(skip(self))]
    async fn list_conversations(&self, page: PageQuery) -> StoreResult<Vec<ChatwootConversation>> {
        let rows: Vec<ConversationModel> = self.fetch(queries::list_conversations(page)).await?;
        Ok(rows.into_iter().map(ChatwootConversation::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_messages(&self, query: MessageQuery<i64>) -> StoreResult<Vec<ChatwootMessage>> {
        let rows: Vec<MessageModel> = self.fetch(queries::list_messages(&query)).await?;
        Ok(rows.into_iter().map(ChatwootMessage::from).collect())
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
