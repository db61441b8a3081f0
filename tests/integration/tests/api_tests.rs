//! API Integration Tests
//!
//! Every test starts a real listener and talks to it over HTTP with reqwest.
//! Most run against in-memory stores. The `live_` tests additionally require
//! running Chatwoot PostgreSQL and LibreChat MongoDB instances:
//!
//! - Environment variables: POSTGRES_HOST, MONGO_HOST (plus the usual
//!   POSTGRES_*/MONGO_* settings and BRIDGE_API_KEY)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use integration_tests::{
    assert_json, assert_status, check_live_env, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn sample_server() -> TestServer {
    let chatwoot = InMemoryChatwoot::new(sample_conversations(5), sample_messages(1, 3));
    let librechat = InMemoryLibreChat {
        conversations: vec![
            sample_document("65a1f0c2e4b0a1b2c3d4e5f2", "title", "Newest", 2),
            sample_document("65a1f0c2e4b0a1b2c3d4e5f1", "title", "Oldest", 1),
        ],
        messages: vec![(
            "conv-1".to_string(),
            sample_document("65a1f0c2e4b0a1b2c3d4e5f3", "content", "héllo", 3),
        )],
        ..InMemoryLibreChat::default()
    };
    TestServer::start(Arc::new(chatwoot), Arc::new(librechat))
        .await
        .expect("Failed to start server")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = sample_server().await;

    let response = server.get("/health").await.unwrap();
    let health: HealthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "ai-ecosystem-bridge");
}

#[tokio::test]
async fn test_health_ready_with_unreachable_store() {
    let server = TestServer::start(
        Arc::new(InMemoryChatwoot::default()),
        Arc::new(Unreachable { message: "no reachable servers" }),
    )
    .await
    .unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
    assert_eq!(body["checks"]["librechat"], "unhealthy");
}

#[tokio::test]
async fn test_docs_page() {
    let server = sample_server().await;

    let response = server.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = response.text().await.unwrap();
    assert!(page.contains(&format!("{}/chatwoot/conversations", server.base_url())));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_wrong_api_key() {
    let chatwoot = Arc::new(InMemoryChatwoot::new(sample_conversations(2), Vec::new()));
    let librechat = Arc::new(InMemoryLibreChat::default());
    let server = TestServer::start(chatwoot.clone(), librechat.clone()).await.unwrap();

    for path in [
        "/chatwoot/conversations",
        "/chatwoot/messages/1",
        "/librechat/conversations",
        "/librechat/messages/conv-1",
        "/librechat/users",
    ] {
        let response = server.get_with_key(path, "wrong").await.unwrap();
        let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
        assert_eq!(body.error, "Unauthorized - Invalid API key");

        let response = server.get(path).await.unwrap();
        assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    }

    assert_eq!(chatwoot.call_count(), 0);
    assert_eq!(librechat.call_count(), 0);
}

// ============================================================================
// Chatwoot Tests
// ============================================================================

#[tokio::test]
async fn test_chatwoot_conversations_most_recent_first() {
    let server = sample_server().await;

    let response = server.get_auth("/chatwoot/conversations?limit=2").await.unwrap();
    let body: ChatwootConversationsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let ids: Vec<i64> = body.conversations.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![5, 4]);
}

#[tokio::test]
async fn test_chatwoot_conversations_offset() {
    let server = sample_server().await;

    let response = server
        .get_auth("/chatwoot/conversations?limit=2&offset=4")
        .await
        .unwrap();
    let body: ChatwootConversationsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.conversations.len(), 1);
    assert_eq!(body.conversations[0].id, 1);
}

#[tokio::test]
async fn test_chatwoot_messages() {
    let server = sample_server().await;

    let response = server.get_auth("/chatwoot/messages/1?limit=2").await.unwrap();
    let body: ChatwootMessagesResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.messages.len(), 2);
    assert_eq!(body.messages[0].content.as_deref(), Some("message 3"));
    assert!(body.messages.iter().all(|m| m.conversation_id == 1));
}

#[tokio::test]
async fn test_chatwoot_messages_unknown_conversation() {
    let server = sample_server().await;

    let response = server.get_auth("/chatwoot/messages/9999").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body, json!({ "messages": [] }));
}

#[tokio::test]
async fn test_chatwoot_messages_non_integer_id() {
    let server = sample_server().await;

    let response = server.get_auth("/chatwoot/messages/abc").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(body.error, "Not found");
}

// ============================================================================
// LibreChat Tests
// ============================================================================

#[tokio::test]
async fn test_librechat_conversations_keep_extended_json() {
    let server = sample_server().await;

    let response = server.get_auth("/librechat/conversations?limit=1").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        body,
        json!({
            "conversations": [{
                "_id": { "$oid": "65a1f0c2e4b0a1b2c3d4e5f2" },
                "title": "Newest",
                "createdAt": { "$date": "2024-03-01T09:02:00Z" }
            }]
        })
    );
}

#[tokio::test]
async fn test_librechat_skip() {
    let server = sample_server().await;

    let response = server.get_auth("/librechat/conversations?skip=1").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["conversations"].as_array().unwrap().len(), 1);
    assert_eq!(body["conversations"][0]["title"], "Oldest");
}

#[tokio::test]
async fn test_librechat_messages_by_string_id() {
    let server = sample_server().await;

    let response = server.get_auth("/librechat/messages/conv-1").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["messages"][0]["content"], "héllo");

    let response = server.get_auth("/librechat/messages/conv-2").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({ "messages": [] }));
}

#[tokio::test]
async fn test_librechat_empty_users() {
    let server = sample_server().await;

    let response = server.get_auth("/librechat/users").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body, json!({ "users": [] }));
}

#[tokio::test]
async fn test_librechat_legacy_string_encoding() {
    let config = test_config(&[("BRIDGE_DOCUMENT_ENCODING", "string")]).unwrap();
    let librechat = InMemoryLibreChat {
        messages: vec![(
            "conv-1".to_string(),
            sample_document("65a1f0c2e4b0a1b2c3d4e5f3", "content", "héllo", 3),
        )],
        ..InMemoryLibreChat::default()
    };
    let server = TestServer::start_with_config(
        config,
        Arc::new(InMemoryChatwoot::default()),
        Arc::new(librechat),
    )
    .await
    .unwrap();

    let response = server.get_auth("/librechat/messages/conv-1").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let encoded = body["messages"].as_str().unwrap();
    assert_eq!(
        encoded,
        r#"[{"_id": {"$oid": "65a1f0c2e4b0a1b2c3d4e5f3"}, "content": "h\u00e9llo", "createdAt": {"$date": "2024-03-01T09:03:00Z"}}]"#
    );
    let decoded: Value = serde_json::from_str(encoded).unwrap();
    assert_eq!(decoded[0]["content"], "héllo");
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_backend_failure_does_not_take_down_the_server() {
    let server = TestServer::start(
        Arc::new(Unreachable { message: "connection refused" }),
        Arc::new(InMemoryLibreChat::default()),
    )
    .await
    .unwrap();

    let response = server.get_auth("/chatwoot/conversations").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error, "connection refused");

    let response = server.get_auth("/librechat/users").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/chatwoot/messages/1").await.unwrap();
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR).await.unwrap();
}

// ============================================================================
// Live Backend Tests
// ============================================================================

#[tokio::test]
async fn test_live_health_ready() {
    if !check_live_env() {
        return;
    }

    let server = TestServer::start_live().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_live_listings() {
    if !check_live_env() {
        return;
    }

    let server = TestServer::start_live().await.expect("Failed to start server");

    let response = server.get_auth("/chatwoot/conversations?limit=5").await.unwrap();
    let body: ChatwootConversationsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.conversations.len() <= 5);
    assert!(body
        .conversations
        .windows(2)
        .all(|w| w[0].created_at >= w[1].created_at));

    let response = server.get_auth("/chatwoot/messages/999999999").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({ "messages": [] }));

    let response = server.get_auth("/librechat/conversations?limit=5").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.get("conversations").is_some());

    let response = server.get_auth("/librechat/users").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
