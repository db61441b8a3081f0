//! Query translators
//!
//! Turn the uniform query shapes into find specifications: collection,
//! filter, projection, sort, skip and limit. Skip is applied before limit.

use bridge_core::{MessageQuery, PageQuery};
use mongodb::bson::{doc, Document};

pub const CONVERSATIONS: &str = "conversations";
pub const MESSAGES: &str = "messages";
pub const USERS: &str = "users";

/// A backend-native find, ready to run against one collection
#[derive(Debug, Clone, PartialEq)]
pub struct FindSpec {
    pub collection: &'static str,
    pub filter: Document,
    pub projection: Document,
    pub sort: Option<Document>,
    pub skip: Option<u64>,
    pub limit: Option<i64>,
}

fn newest_first() -> Document {
    doc! { "createdAt": -1 }
}

/// Conversations, newest first, `skip` then `limit`
pub fn list_conversations(page: PageQuery) -> FindSpec {
    FindSpec {
        collection: CONVERSATIONS,
        filter: Document::new(),
        projection: doc! { "_id": 1, "title": 1, "createdAt": 1, "updatedAt": 1 },
        sort: Some(newest_first()),
        skip: Some(page.offset),
        limit: Some(page.limit),
    }
}

/// Messages of one conversation, newest first.
///
/// `conversationId` is matched as a plain string; it is never coerced to an ObjectId.
pub fn list_messages(query: &MessageQuery<String>) -> FindSpec {
    FindSpec {
        collection: MESSAGES,
        filter: doc! { "conversationId": query.conversation_id.as_str() },
        projection: doc! { "_id": 1, "content": 1, "role": 1, "createdAt": 1 },
        sort: Some(newest_first()),
        skip: None,
        limit: Some(query.limit),
    }
}

/// Every user. No sort, no skip, no limit.
pub fn list_users() -> FindSpec {
    FindSpec {
        collection: USERS,
        filter: Document::new(),
        projection: doc! { "_id": 1, "username": 1, "email": 1, "createdAt": 1 },
        sort: None,
        skip: None,
        limit: None,
    }
}
