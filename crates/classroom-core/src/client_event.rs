// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::{ChatId, ThreadKey};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// Unread counts or last-message previews in the chat list have changed.
    SidebarChanged,

    /// The selected chat or topic has changed.
    SelectionChanged,

    /// Unread counts or previews of the topics of a group have changed.
    TopicsChanged { chat_id: ChatId },

    ThreadChanged {
        thread: ThreadKey,
        r#type: ClientThreadEventType,
    },

    /// The draft of a thread has changed.
    DraftChanged { thread: ThreadKey },

    /// The user signed in or out.
    AccountChanged,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientThreadEventType {
    /// One or many messages were either received or sent.
    MessagesAppended { message_ids: Vec<MessageId> },

    /// Messages were modified, e.g. by a reaction.
    MessagesUpdated { message_ids: Vec<MessageId> },
}
