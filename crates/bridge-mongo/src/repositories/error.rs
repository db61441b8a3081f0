//! Error handling utilities for the document connector

use bridge_core::StoreError;
use mongodb::error::{Error as MongoError, ErrorKind};

/// Convert a driver error to StoreError, keeping the driver's text
pub fn map_mongo_error(e: MongoError) -> StoreError {
    let message = e.to_string();
    match e.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::Authentication { .. }
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::InvalidArgument { .. }
        | ErrorKind::Shutdown => StoreError::Connection(message),
        ErrorKind::BsonDeserialization(_) => StoreError::Decode(message),
        _ => StoreError::Query(message),
    }
}

