//! # bridge-mongo
//!
//! Document connector for the LibreChat MongoDB database.
//!
//! Documents are read through explicit projections and converted to relaxed
//! Extended JSON, so ObjectIds and dates survive as `{"$oid": ..}` and
//! `{"$date": ..}` wrappers that any JSON client can parse back.

pub mod client;
pub mod normalizer;
pub mod queries;
pub mod repositories;

pub use client::create_client;
pub use normalizer::{encode_legacy_string, normalize};
pub use queries::FindSpec;
pub use repositories::MongoLibreChatStore;
