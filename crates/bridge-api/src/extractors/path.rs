//! Path parameter extractor

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// A conversation id taken from the path.
///
/// An id that does not parse as `T` means the route does not exist for it,
/// so the rejection is a 404 rather than a 400.
#[derive(Debug, Clone)]
pub struct ConversationId<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ConversationId<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        Ok(ConversationId(inner))
    }
}
