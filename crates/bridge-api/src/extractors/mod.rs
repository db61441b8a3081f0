//! Axum extractors for request handling
//!
//! Custom extractors for API key authentication, lenient list parameters,
//! and conversation ids.

mod api_key;
mod list_params;
mod path;

pub use api_key::{ApiKeyAuth, XApiKey};
pub use list_params::ListParams;
pub use path::ConversationId;
