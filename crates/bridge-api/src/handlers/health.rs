//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

/// Readiness response with one entry per store
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize)]
pub struct ReadinessChecks {
    pub chatwoot: &'static str,
    pub librechat: &'static str,
}

fn check(healthy: bool) -> &'static str {
    if healthy {
        "healthy"
    } else {
        "unhealthy"
    }
}

/// Basic health check (liveness probe); never touches a store
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.config().app.name.clone(),
    })
}

/// Readiness check with store connectivity
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let budget = state.config().query.timeout;

    let (chatwoot, librechat) = tokio::join!(
        tokio::time::timeout(budget, state.chatwoot().ping()),
        tokio::time::timeout(budget, state.librechat().ping()),
    );
    let chatwoot_healthy = matches!(chatwoot, Ok(Ok(())));
    let librechat_healthy = matches!(librechat, Ok(Ok(())));

    if !chatwoot_healthy || !librechat_healthy {
        tracing::warn!(chatwoot_healthy, librechat_healthy, "Readiness check failed");
    }

    let ready = chatwoot_healthy && librechat_healthy;
    let response = ReadinessResponse {
        status: if ready { "ready" } else { "not_ready" },
        checks: ReadinessChecks {
            chatwoot: check(chatwoot_healthy),
            librechat: check(librechat_healthy),
        },
    };
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
