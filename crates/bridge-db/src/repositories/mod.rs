//! Store implementations

mod chatwoot;
mod error;

pub use chatwoot::PgChatwootStore;
pub use error::map_db_error;
