//! Records surfaced by the gateway
//!
//! Chatwoot records are strongly typed because the relational schema is fixed.
//! LibreChat records are kept as canonical JSON documents produced by the
//! document normalizer.

mod chatwoot;

pub use chatwoot::{ChatwootConversation, ChatwootMessage};

/// A LibreChat document after canonical Extended JSON encoding.
///
/// Backend-native identifiers and dates are already wrapped (`{"$oid": ...}`,
/// `{"$date": ...}`), so the value is safe to embed in any JSON response.
pub type JsonDocument = serde_json::Value;
