//! MongoDB implementation of LibreChatStore

use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Database};
use tracing::{debug, instrument};

use bridge_core::{JsonDocument, LibreChatStore, MessageQuery, PageQuery, StoreResult};

use crate::normalizer::normalize;
use crate::queries::{self, FindSpec};

use super::error::map_mongo_error;

/// MongoDB implementation of LibreChatStore
#[derive(Clone)]
pub struct MongoLibreChatStore {
    database: Database,
    max_time: Duration,
}

impl MongoLibreChatStore {
    /// Create a store over `database`; every find carries `max_time` as `maxTimeMS`
    pub fn new(client: &Client, database: &str, max_time: Duration) -> Self {
        Self {
            database: client.database(database),
            max_time,
        }
    }

    /// Run one find and normalize every returned document
    async fn find(&self, spec: FindSpec) -> StoreResult<Vec<JsonDocument>> {
        // A zero limit means "unbounded" to the server
        if spec.limit == Some(0) {
            return Ok(Vec::new());
        }
        let collection = self.database.collection::<Document>(spec.collection);

        let mut find = collection
            .find(spec.filter)
            .projection(spec.projection)
            .max_time(self.max_time);
        if let Some(sort) = spec.sort {
            find = find.sort(sort);
        }
        if let Some(skip) = spec.skip {
            find = find.skip(skip);
        }
        if let Some(limit) = spec.limit {
            find = find.limit(limit);
        }

        let documents: Vec<Document> = find
            .await
            .map_err(map_mongo_error)?
            .try_collect()
            .await
            .map_err(map_mongo_error)?;

        debug!(collection = spec.collection, count = documents.len(), "find completed");
        Ok(documents.into_iter().map(normalize).collect())
    }
}

#[async_trait]
impl LibreChatStore for MongoLibreChatStore {
    #[instrument(skip(self))]
    async fn list_conversations(&self, page: PageQuery) -> StoreResult<Vec<JsonDocument>> {
        self.find(queries::list_conversations(page)).await
    }

    #[instrument(skip(self))]
    async fn list_messages(&self, query: MessageQuery<String>) -> StoreResult<Vec<JsonDocument>> {
        self.find(queries::list_messages(&query)).await
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> StoreResult<Vec<JsonDocument>> {
        self.find(queries::list_users()).await
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> StoreResult<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_mongo_error)?;
        Ok(())
    }
}
