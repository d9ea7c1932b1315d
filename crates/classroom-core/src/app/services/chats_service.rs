// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{info, warn};

use crate::app::deps::{AppDependencies, DynClientEventDispatcher, DynConversationStore};
use crate::domain::chats::models::{Chat, NavigationCursor, Topic};
use crate::domain::conversations::models::ConversationError;
use crate::domain::shared::models::{ChatId, TopicId};
use crate::ClientEvent;

/// The chat list, the topics of groups and navigation between them.
#[derive(Clone)]
pub struct ChatsService {
    client_event_dispatcher: DynClientEventDispatcher,
    conversation_store: DynConversationStore,
}

impl From<&AppDependencies> for ChatsService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            conversation_store: deps.conversation_store.clone(),
        }
    }
}

impl ChatsService {
    /// All chats in roster order.
    pub fn chats(&self) -> Vec<Chat> {
        self.conversation_store
            .read(|state| state.roster().chats().cloned().collect())
    }

    pub fn chat(&self, chat_id: &ChatId) -> Option<Chat> {
        self.conversation_store
            .read(|state| state.roster().chat(chat_id).cloned())
    }

    /// The topics of a group. Empty for private chats and unknown ids.
    pub fn topics(&self, group_id: &ChatId) -> Vec<Topic> {
        self.conversation_store
            .read(|state| state.roster().topics(group_id).to_vec())
    }

    pub fn cursor(&self) -> NavigationCursor {
        self.conversation_store.read(|state| state.cursor().clone())
    }

    pub fn total_unread_count(&self) -> u32 {
        self.conversation_store
            .read(|state| state.roster().total_unread_count())
    }
}

impl ChatsService {
    /// Focuses a chat and marks it as read. Selecting a group also focuses its first topic.
    /// Unknown ids are ignored.
    pub fn select_chat(&self, chat_id: &ChatId) {
        let result = self.conversation_store.write(|state| {
            state.select_chat(chat_id)?;
            Ok::<_, ConversationError>(state.cursor().selected_group_id.clone())
        });

        let group_id = match result {
            Ok(group_id) => group_id,
            Err(err) => {
                warn!("Ignoring selection of chat '{chat_id}'. {err}");
                return;
            }
        };

        info!("Selected chat '{chat_id}'.");

        let mut events = vec![ClientEvent::SelectionChanged, ClientEvent::SidebarChanged];
        if let Some(chat_id) = group_id {
            events.push(ClientEvent::TopicsChanged { chat_id });
        }
        self.client_event_dispatcher.dispatch_events(events);
    }

    /// Focuses a topic of the selected group and marks it as read. Topics of other groups and
    /// unknown ids are ignored.
    pub fn select_topic(&self, topic_id: &TopicId) {
        let group_id = match self
            .conversation_store
            .write(|state| state.select_topic(topic_id))
        {
            Ok(group_id) => group_id,
            Err(err) => {
                warn!("Ignoring selection of topic '{topic_id}'. {err}");
                return;
            }
        };

        info!("Selected topic '{topic_id}' in '{group_id}'.");

        self.client_event_dispatcher.dispatch_events([
            ClientEvent::SelectionChanged,
            ClientEvent::SidebarChanged,
            ClientEvent::TopicsChanged { chat_id: group_id },
        ]);
    }
}
