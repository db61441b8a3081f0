//! Database models (SQLx row types)

mod conversation;
mod message;

pub use conversation::ConversationModel;
pub use message::MessageModel;
