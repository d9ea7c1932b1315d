// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::domain::shared::models::{ChatId, ThreadKey, TopicId};

use super::{Chat, ChatType, Topic};

#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    #[error("Chat '{0}' appears more than once in the roster.")]
    DuplicateChat(ChatId),
    #[error("Topic '{0}' appears more than once in the roster.")]
    DuplicateTopic(TopicId),
    #[error("Topic '{topic_id}' references unknown chat '{chat_id}'.")]
    UnknownParentChat { topic_id: TopicId, chat_id: ChatId },
    #[error("Topic '{topic_id}' cannot belong to private chat '{chat_id}'.")]
    TopicInPrivateChat { topic_id: TopicId, chat_id: ChatId },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The chats and topics of a session.
///
/// Unread counts of groups with topics are never set directly. Every operation that touches a
/// topic's unread count recomputes the parent group's count as the sum over its topics before it
/// returns.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    chats: IndexMap<ChatId, Chat>,
    topics: HashMap<ChatId, Vec<Topic>>,
    topic_owners: HashMap<TopicId, ChatId>,
}

impl Roster {
    pub fn new(
        chats: impl IntoIterator<Item = Chat>,
        topics: impl IntoIterator<Item = Topic>,
    ) -> Result<Self, RosterError> {
        let mut roster = Roster::default();

        for chat in chats {
            if roster.chats.contains_key(&chat.id) {
                return Err(RosterError::DuplicateChat(chat.id));
            }
            roster.chats.insert(chat.id.clone(), chat);
        }

        for topic in topics {
            let Some(parent) = roster.chats.get(&topic.parent_chat_id) else {
                return Err(RosterError::UnknownParentChat {
                    topic_id: topic.id,
                    chat_id: topic.parent_chat_id,
                });
            };
            if parent.r#type == ChatType::Private {
                return Err(RosterError::TopicInPrivateChat {
                    topic_id: topic.id,
                    chat_id: topic.parent_chat_id,
                });
            }
            if roster.topic_owners.contains_key(&topic.id) {
                return Err(RosterError::DuplicateTopic(topic.id));
            }

            roster
                .topic_owners
                .insert(topic.id.clone(), topic.parent_chat_id.clone());
            roster
                .topics
                .entry(topic.parent_chat_id.clone())
                .or_default()
                .push(topic);
        }

        let group_ids = roster.topics.keys().cloned().collect::<Vec<_>>();
        for group_id in group_ids {
            roster.sync_unread_count(&group_id);
        }

        Ok(roster)
    }
}

impl Roster {
    /// All chats in roster order.
    pub fn chats(&self) -> impl Iterator<Item = &Chat> {
        self.chats.values()
    }

    pub fn chat(&self, chat_id: &ChatId) -> Option<&Chat> {
        self.chats.get(chat_id)
    }

    /// The topics of a group in roster order. Empty for private chats and unknown ids.
    pub fn topics(&self, group_id: &ChatId) -> &[Topic] {
        self.topics
            .get(group_id)
            .map(|topics| topics.as_slice())
            .unwrap_or_default()
    }

    pub fn topic(&self, topic_id: &TopicId) -> Option<&Topic> {
        let group_id = self.topic_owners.get(topic_id)?;
        self.topics(group_id).iter().find(|topic| &topic.id == topic_id)
    }

    pub fn parent_chat_id(&self, topic_id: &TopicId) -> Option<&ChatId> {
        self.topic_owners.get(topic_id)
    }

    pub fn has_topics(&self, group_id: &ChatId) -> bool {
        !self.topics(group_id).is_empty()
    }

    pub fn contains_thread(&self, key: &ThreadKey) -> bool {
        match key {
            ThreadKey::Chat(chat_id) => self.chats.contains_key(chat_id),
            ThreadKey::Topic(topic_id) => self.topic_owners.contains_key(topic_id),
        }
    }

    /// The chat a thread is displayed in.
    pub fn owning_chat_id(&self, key: &ThreadKey) -> Option<&ChatId> {
        match key {
            ThreadKey::Chat(chat_id) => self.chats.get_key_value(chat_id).map(|(id, _)| id),
            ThreadKey::Topic(topic_id) => self.topic_owners.get(topic_id),
        }
    }

    pub fn total_unread_count(&self) -> u32 {
        self.chats.values().map(|chat| chat.unread_count).sum()
    }
}

impl Roster {
    /// Sets the chat's unread count to zero. Returns false if the chat is unknown.
    pub(crate) fn mark_chat_read(&mut self, chat_id: &ChatId) -> bool {
        let Some(chat) = self.chats.get_mut(chat_id) else {
            return false;
        };
        chat.unread_count = 0;
        true
    }

    /// Sets the topic's unread count to zero and recomputes the parent group.
    /// Returns the id of the parent group.
    pub(crate) fn mark_topic_read(&mut self, topic_id: &TopicId) -> Option<ChatId> {
        let group_id = self.topic_owners.get(topic_id)?.clone();
        let topic = self.topic_mut(&group_id, topic_id)?;
        topic.unread_count = 0;
        self.sync_unread_count(&group_id);
        Some(group_id)
    }

    /// Counts one unread message in the given thread.
    ///
    /// The chat-level thread of a group with topics carries no count of its own since the
    /// group's count is derived from its topics.
    pub(crate) fn increment_unread_count(&mut self, key: &ThreadKey) -> bool {
        match key {
            ThreadKey::Chat(chat_id) => {
                if self.has_topics(chat_id) {
                    return false;
                }
                let Some(chat) = self.chats.get_mut(chat_id) else {
                    return false;
                };
                chat.unread_count += 1;
                true
            }
            ThreadKey::Topic(topic_id) => {
                let Some(group_id) = self.topic_owners.get(topic_id).cloned() else {
                    return false;
                };
                let Some(topic) = self.topic_mut(&group_id, topic_id) else {
                    return false;
                };
                topic.unread_count += 1;
                self.sync_unread_count(&group_id);
                true
            }
        }
    }

    /// Updates the preview of the thread and of the chat it is displayed in.
    pub(crate) fn record_last_message(
        &mut self,
        key: &ThreadKey,
        preview: &str,
        timestamp: &str,
    ) {
        let chat_id = match key {
            ThreadKey::Chat(chat_id) => chat_id.clone(),
            ThreadKey::Topic(topic_id) => {
                let Some(group_id) = self.topic_owners.get(topic_id).cloned() else {
                    return;
                };
                if let Some(topic) = self.topic_mut(&group_id, topic_id) {
                    topic.last_message_preview = preview.to_string();
                    topic.last_timestamp = timestamp.to_string();
                }
                group_id
            }
        };

        if let Some(chat) = self.chats.get_mut(&chat_id) {
            chat.last_message_preview = preview.to_string();
            chat.last_timestamp = timestamp.to_string();
        }
    }

    fn topic_mut(&mut self, group_id: &ChatId, topic_id: &TopicId) -> Option<&mut Topic> {
        self.topics
            .get_mut(group_id)?
            .iter_mut()
            .find(|topic| &topic.id == topic_id)
    }

    fn sync_unread_count(&mut self, group_id: &ChatId) {
        let Some(topics) = self.topics.get(group_id) else {
            return;
        };
        let unread_count = topics.iter().map(|topic| topic.unread_count).sum();
        if let Some(chat) = self.chats.get_mut(group_id) {
            chat.unread_count = unread_count;
        }
    }
}
