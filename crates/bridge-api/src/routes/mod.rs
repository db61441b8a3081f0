//! Route definitions
//!
//! Public routes (docs, health) and the key-protected data routes.

use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::handlers::{chatwoot, docs, health, librechat};
use crate::middleware::require_api_key;
use crate::state::AppState;

/// Create the main router; the API key gate is bound to `state`
pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(docs::docs_page))
        .merge(health_routes())
        .merge(protected_routes(state))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Data routes; requests without the configured key never reach a handler
///
/// The key is checked before path parameters are parsed, so a wrong key on
/// `/chatwoot/messages/abc` is a 401; with the right key it is a 404.
fn protected_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(chatwoot_routes())
        .merge(librechat_routes())
        .route_layer(from_fn_with_state(state.clone(), require_api_key))
}

/// Chatwoot (PostgreSQL) routes
fn chatwoot_routes() -> Router<AppState> {
    Router::new()
        .route("/chatwoot/conversations", get(chatwoot::list_conversations))
        .route("/chatwoot/messages/:conversation_id", get(chatwoot::list_messages))
}

/// LibreChat (MongoDB) routes
fn librechat_routes() -> Router<AppState> {
    Router::new()
        .route("/librechat/conversations", get(librechat::list_conversations))
        .route("/librechat/messages/:conversation_id", get(librechat::list_messages))
        .route("/librechat/users", get(librechat::list_users))
}
