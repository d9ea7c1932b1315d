// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::{ChatId, ThreadKey, TopicId};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConversationError {
    #[error("Unknown chat '{0}'.")]
    UnknownChat(ChatId),
    #[error("Unknown topic '{0}'.")]
    UnknownTopic(TopicId),
    #[error("Topic '{0}' does not belong to the selected group.")]
    TopicNotInSelectedGroup(TopicId),
    #[error("Unknown thread '{0}'.")]
    UnknownThread(ThreadKey),
    #[error("Unknown message '{0}'.")]
    UnknownMessage(MessageId),
    #[error("Message '{0}' exists already.")]
    DuplicateMessage(MessageId),
    #[error("No chat is selected.")]
    NoThreadSelected,
    #[error("There is nothing to send.")]
    EmptyMessage,
    #[error("There is no attachment at index {0}.")]
    NoSuchAttachment(usize),
    #[error("The draft in '{0}' that the attachment was issued for is gone.")]
    StaleDraft(ThreadKey),
}
