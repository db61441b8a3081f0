//! MongoDB client construction
//!
//! `Client` keeps its own connection pool and does not touch the network
//! until the first operation, so building it never blocks startup.

use std::time::Duration;

use bridge_common::MongoConfig;
use bridge_core::StoreResult;
use mongodb::options::{ClientOptions, Credential};
use mongodb::Client;

use crate::repositories::map_mongo_error;

/// Auth source used when admin credentials are configured
const AUTH_SOURCE: &str = "admin";

/// Build client options from configuration; `app_name` shows up in server logs
pub async fn client_options(
    config: &MongoConfig,
    app_name: &str,
    timeout: Duration,
) -> StoreResult<ClientOptions> {
    let mut options = ClientOptions::parse(config.uri())
        .await
        .map_err(map_mongo_error)?;

    options.app_name = Some(app_name.to_string());
    options.max_pool_size = Some(config.max_pool_size);
    options.server_selection_timeout = Some(timeout);
    options.connect_timeout = Some(timeout);

    if let Some((username, password)) = config.credentials() {
        options.credential = Some(
            Credential::builder()
                .username(username.to_string())
                .password(password.to_string())
                .source(AUTH_SOURCE.to_string())
                .build(),
        );
    }

    Ok(options)
}

/// Create a MongoDB client; authenticated against `admin` when credentials are set
pub async fn create_client(
    config: &MongoConfig,
    app_name: &str,
    timeout: Duration,
) -> StoreResult<Client> {
    let options = client_options(config, app_name, timeout).await?;
    Client::with_options(options).map_err(map_mongo_error)
}
