// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{ChatId, TopicId};

#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: TopicId,
    pub parent_chat_id: ChatId,
    pub name: String,
    pub icon: String,
    pub last_message_preview: String,
    pub last_timestamp: String,
    pub unread_count: u32,
}
