//! Response types and error handling for API endpoints
//!
//! Every response body is a JSON object. Lists travel under a key named after
//! the resource; failures under `error`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bridge_common::DocumentEncoding;
use bridge_core::{JsonDocument, StoreError, StoreKind};
use bridge_mongo::encode_legacy_string;
use serde::{ser::SerializeMap, Serialize, Serializer};
use thiserror::Error;
use tracing::{error, warn};

/// Body text for rejected credentials
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized - Invalid API key";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized - Invalid API key")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Backend failure; the body carries the driver's text
    #[error("{source}")]
    Store {
        store: StoreKind,
        #[source]
        source: StoreError,
    },

    #[error("Failed to encode documents: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ApiError {
    /// Wrap a store failure with the store it came from
    pub fn store(store: StoreKind, source: StoreError) -> Self {
        Self::Store { store, source }
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store { .. } | Self::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Store { store, source } => error!(
                store = %store,
                category = source.category(),
                error = %source,
                "Store call failed"
            ),
            Self::Encoding(e) => error!(error = %e, "Response encoding failed"),
            Self::Unauthorized => warn!("Rejected request with missing or invalid API key"),
            Self::NotFound | Self::MethodNotAllowed => {}
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// A result list under a single named key, e.g. `{"conversations": [...]}`
#[derive(Debug)]
pub struct Listing<T> {
    key: &'static str,
    items: T,
}

impl<T> Listing<T> {
    pub fn new(key: &'static str, items: T) -> Self {
        Self { key, items }
    }
}

impl<T: Serialize> Serialize for Listing<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.items)?;
        map.end()
    }
}

impl<T: Serialize> IntoResponse for Listing<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Documents as they appear inside a listing
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentList {
    /// A JSON array
    Nested(Vec<JsonDocument>),
    /// The array pre-serialized into a string, for legacy clients
    Encoded(String),
}

impl DocumentList {
    pub fn encode(documents: Vec<JsonDocument>, encoding: DocumentEncoding) -> ApiResult<Self> {
        match encoding {
            DocumentEncoding::Nested => Ok(Self::Nested(documents)),
            DocumentEncoding::String => Ok(Self::Encoded(encode_legacy_string(&documents)?)),
        }
    }
}
