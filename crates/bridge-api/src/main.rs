//! Bridge API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p bridge-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use bridge_common::{try_init_tracing, AppConfig, AppResult, TracingConfig};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Configuration decides the log format, so it is loaded first
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, code = e.error_code(), "Server failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> AppResult<()> {
    info!(
        env = ?config.app.env,
        address = %config.server.address(),
        postgres = ?config.postgres,
        mongo = ?config.mongo,
        encoding = ?config.query.document_encoding,
        "Configuration loaded"
    );

    if config.uses_default_api_key() {
        warn!("BRIDGE_API_KEY is the shipped default; set a real key before exposing this service");
    }

    bridge_api::run(config).await
}
