// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::app::deps::AppConfig;
pub use crate::domain::chats::models::{Chat, ChatType, NavigationCursor, Roster, RosterError, Topic};
pub use crate::domain::messaging::models::{
    Attachment, AttachmentType, Draft, DraftId, Emoji, IncomingMessage, Message, MessageId,
    Reaction, SelectedFile,
};
pub use crate::domain::shared::models::{ChatId, ThreadKey, TopicId, UserId, UserRole};
