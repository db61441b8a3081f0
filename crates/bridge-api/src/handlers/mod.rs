//! HTTP request handlers
//!
//! Each handler translates one request into a single store call and wraps the
//! result in the response envelope.

pub mod chatwoot;
pub mod docs;
pub mod health;
pub mod librechat;

use std::future::Future;
use std::time::Duration;

use bridge_core::{StoreError, StoreKind, StoreResult};

use crate::response::{ApiError, ApiResult};

/// Run one store call under the query budget.
///
/// Dropping the returned future (client gone) drops the driver call with it.
pub async fn bounded<T, F>(store: StoreKind, budget: Duration, call: F) -> ApiResult<T>
where
    F: Future<Output = StoreResult<T>>,
{
    match tokio::time::timeout(budget, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(ApiError::store(store, e)),
        Err(_) => Err(ApiError::store(
            store,
            StoreError::Timeout {
                store,
                elapsed: budget,
            },
        )),
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
