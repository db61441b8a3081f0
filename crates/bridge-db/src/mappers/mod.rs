//! Model to record mappers
//!
//! `From<Model> for Record` conversions turning database rows into the
//! records surfaced by the API.

mod chatwoot;
