//! API key extractor
//!
//! Reads the `X-API-Key` header and checks it against the configured key.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderName, HeaderValue},
};
use axum_extra::{headers, TypedHeader};

use crate::response::ApiError;
use crate::state::AppState;

static X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

/// Typed `X-API-Key` header. The raw bytes are kept; no charset is assumed.
#[derive(Clone)]
pub struct XApiKey(HeaderValue);

impl XApiKey {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl headers::Header for XApiKey {
    fn name() -> &'static HeaderName {
        &X_API_KEY
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        values
            .next()
            .cloned()
            .map(XApiKey)
            .ok_or_else(headers::Error::invalid)
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        values.extend(std::iter::once(self.0.clone()));
    }
}

impl std::fmt::Debug for XApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("XApiKey(***)")
    }
}

/// Proof that the request carried the configured API key
#[derive(Debug, Clone, Copy)]
pub struct ApiKeyAuth;

#[async_trait]
impl<S> FromRequestParts<S> for ApiKeyAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(candidate) = TypedHeader::<XApiKey>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Unauthorized)?;

        let app_state = AppState::from_ref(state);
        if app_state.config().api_key.verify(candidate.as_bytes()) {
            Ok(ApiKeyAuth)
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}
