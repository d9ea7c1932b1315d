// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::domain::shared::models::ChatId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    /// A classroom conversation. Groups may be split into topics.
    Group,
    /// A one-to-one conversation.
    Private,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: ChatId,
    pub name: String,
    pub last_message_preview: String,
    pub last_timestamp: String,
    /// For a group with topics this is always the sum of its topics' unread counts.
    pub unread_count: u32,
    pub r#type: ChatType,
}

impl Chat {
    pub fn is_group(&self) -> bool {
        self.r#type == ChatType::Group
    }
}
