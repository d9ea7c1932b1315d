// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{ChatId, TopicId};

/// The key under which a list of messages is stored.
///
/// Messages of a group chat with topics live under the topic, all others under the chat itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum ThreadKey {
    Chat(ChatId),
    Topic(TopicId),
}

impl From<ChatId> for ThreadKey {
    fn from(value: ChatId) -> Self {
        Self::Chat(value)
    }
}

impl From<TopicId> for ThreadKey {
    fn from(value: TopicId) -> Self {
        Self::Topic(value)
    }
}

impl Display for ThreadKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThreadKey::Chat(id) => write!(f, "chat:{id}"),
            ThreadKey::Topic(id) => write!(f, "topic:{id}"),
        }
    }
}
