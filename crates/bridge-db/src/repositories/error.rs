//! Error handling utilities for the relational connector

use bridge_core::StoreError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to StoreError, keeping the driver's text
pub fn map_db_error(e: SqlxError) -> StoreError {
    let message = e.to_string();
    match e {
        SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::WorkerCrashed
        | SqlxError::Configuration(_) => StoreError::Connection(message),
        SqlxError::ColumnDecode { .. }
        | SqlxError::ColumnNotFound(_)
        | SqlxError::Decode(_)
        | SqlxError::TypeNotFound { .. } => StoreError::Decode(message),
        _ => StoreError::Query(message),
    }
}
