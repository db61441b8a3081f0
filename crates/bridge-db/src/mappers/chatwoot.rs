//! Chatwoot row <-> record mapper

use bridge_core::entities::{ChatwootConversation, ChatwootMessage};

use crate::models::{ConversationModel, MessageModel};

/// Convert ConversationModel to ChatwootConversation
impl From<ConversationModel> for ChatwootConversation {
    fn from(model: ConversationModel) -> Self {
        ChatwootConversation {
            id: model.id,
            account_id: model.account_id,
            inbox_id: model.inbox_id,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert MessageModel to ChatwootMessage
impl From<MessageModel> for ChatwootMessage {
    fn from(model: MessageModel) -> Self {
        ChatwootMessage {
            id: model.id,
            conversation_id: model.conversation_id,
            sender_type: model.sender_type,
            content: model.content,
            created_at: model.created_at,
            message_type: model.message_type,
        }
    }
}
