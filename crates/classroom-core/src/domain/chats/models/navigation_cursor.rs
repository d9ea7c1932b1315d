// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{ChatId, ThreadKey, TopicId};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationCursor {
    pub selected_chat_id: Option<ChatId>,
    /// Set while the selected chat is a group.
    pub selected_group_id: Option<ChatId>,
    pub selected_topic_id: Option<TopicId>,
}

impl NavigationCursor {
    /// Resolves the thread that currently has focus: the selected topic if any, otherwise the
    /// selected chat.
    pub fn thread_key(&self) -> Option<ThreadKey> {
        if let Some(topic_id) = &self.selected_topic_id {
            return Some(ThreadKey::Topic(topic_id.clone()));
        }
        self.selected_chat_id.clone().map(ThreadKey::Chat)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
