// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Deserialize;

use crate::domain::chats::models::{Chat, ChatType, Roster, RosterError, Topic};
use crate::domain::shared::models::{ChatId, TopicId};

#[derive(Deserialize)]
struct RosterRecord {
    chats: Vec<ChatRecord>,
}

#[derive(Deserialize)]
struct ChatRecord {
    id: ChatId,
    name: String,
    #[serde(default)]
    last_message: String,
    #[serde(default)]
    timestamp: String,
    #[serde(default)]
    unread: u32,
    r#type: ChatType,
    #[serde(default)]
    topics: Vec<TopicRecord>,
}

#[derive(Deserialize)]
struct TopicRecord {
    id: TopicId,
    name: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    last_message: String,
    #[serde(default)]
    timestamp: String,
    #[serde(default)]
    unread: u32,
}

/// Parses a roster of the form `{"chats": [{"id", "name", "type", "topics": [...]}, ...]}`.
pub fn roster_from_json(json: &str) -> Result<Roster, RosterError> {
    let record = serde_json::from_str::<RosterRecord>(json)?;

    let mut chats = vec![];
    let mut topics = vec![];

    for chat in record.chats {
        for topic in chat.topics {
            topics.push(Topic {
                id: topic.id,
                parent_chat_id: chat.id.clone(),
                name: topic.name,
                icon: topic.icon,
                last_message_preview: topic.last_message,
                last_timestamp: topic.timestamp,
                unread_count: topic.unread,
            })
        }

        chats.push(Chat {
            id: chat.id,
            name: chat.name,
            last_message_preview: chat.last_message,
            last_timestamp: chat.timestamp,
            unread_count: chat.unread,
            r#type: chat.r#type,
        })
    }

    Roster::new(chats, topics)
}
