//! Store implementations

mod error;
mod librechat;

pub use error::map_mongo_error;
pub use librechat::MongoLibreChatStore;
