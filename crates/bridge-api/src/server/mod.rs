//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use bridge_common::{AppConfig, AppError, AppResult};
use bridge_db::{create_pool, DatabaseConfig, PgChatwootStore};
use bridge_mongo::{create_client, MongoLibreChatStore};
use tokio::net::TcpListener;
use tracing::info;

use crate::handlers::not_found;
use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router(&state).fallback(not_found);
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    router.with_state(state)
}

/// Create both store handles and the AppState.
///
/// Pools connect lazily, so an unreachable store does not prevent startup;
/// it shows up as 500s on its routes and as `unhealthy` on readiness.
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let timeout = config.query.timeout;

    let database = DatabaseConfig::from(&config.postgres).with_application_name(&config.app.name);
    let pool = create_pool(&database, timeout);
    info!(host = %config.postgres.host, database = %config.postgres.database, "PostgreSQL pool created");
    let chatwoot = Arc::new(PgChatwootStore::new(pool));

    let client = create_client(&config.mongo, &config.app.name, timeout).await?;
    info!(host = %config.mongo.host, database = %config.mongo.database, "MongoDB client created");
    let librechat = Arc::new(MongoLibreChatStore::new(&client, &config.mongo.database, timeout));

    Ok(AppState::new(config, chatwoot, librechat))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::server(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(AppError::internal)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.server.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &addr).await
}
