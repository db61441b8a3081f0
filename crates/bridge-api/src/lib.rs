//! # bridge-api
//!
//! Read-only HTTP gateway built with Axum. Exposes Chatwoot (PostgreSQL) and
//! LibreChat (MongoDB) data behind a single `X-API-Key` gate.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
