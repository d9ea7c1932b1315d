// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{debug, info, warn};

use crate::app::deps::{
    AppDependencies, DynAppConfig, DynClientEventDispatcher, DynConversationStore,
    DynMessageIdProvider, DynTimeProvider,
};
use crate::domain::conversations::models::ConversationError;
use crate::domain::messaging::models::{Emoji, IncomingMessage, Message, MessageId};
use crate::domain::shared::models::ThreadKey;
use crate::{ClientEvent, ClientThreadEventType};

#[derive(Clone)]
pub struct MessagingService {
    client_event_dispatcher: DynClientEventDispatcher,
    config: DynAppConfig,
    conversation_store: DynConversationStore,
    message_id_provider: DynMessageIdProvider,
    time_provider: DynTimeProvider,
}

impl From<&AppDependencies> for MessagingService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            config: deps.config.clone(),
            conversation_store: deps.conversation_store.clone(),
            message_id_provider: deps.message_id_provider.clone(),
            time_provider: deps.time_provider.clone(),
        }
    }
}

impl MessagingService {
    /// The messages of the focused thread in insertion order.
    pub fn current_thread_messages(&self) -> Vec<Message> {
        self.conversation_store
            .read(|state| state.current_thread_messages().to_vec())
    }

    pub fn messages(&self, thread: &ThreadKey) -> Vec<Message> {
        self.conversation_store
            .read(|state| state.messages(thread).to_vec())
    }

    /// The reactions offered by the quick-reaction picker, in display order.
    pub fn quick_reactions(&self) -> Vec<Emoji> {
        Emoji::quick_reactions()
    }

    pub fn message(&self, message_id: &MessageId) -> Option<Message> {
        self.conversation_store
            .read(|state| state.message(message_id).cloned())
    }
}

impl MessagingService {
    /// Sends the draft of the focused thread. Does nothing and returns `None` if no thread
    /// has focus or the draft has neither text nor attachments.
    pub fn send_message(&self) -> Option<MessageId> {
        let result = self.conversation_store.write(|state| {
            let thread = state.sendable_thread()?;
            let timestamp = self.formatted_now();

            let message_id = match state.send_message(
                self.message_id_provider.new_id(),
                self.config.self_user.clone(),
                timestamp.clone(),
            ) {
                Err(ConversationError::DuplicateMessage(message_id)) => {
                    warn!("Message id '{message_id}' is taken. Retrying with a new id.");
                    state.send_message(
                        self.message_id_provider.new_id(),
                        self.config.self_user.clone(),
                        timestamp,
                    )
                }
                result => result,
            }?;

            Ok::<_, ConversationError>((thread, message_id))
        });

        let (thread, message_id) = match result {
            Ok(value) => value,
            Err(err @ (ConversationError::NoThreadSelected | ConversationError::EmptyMessage)) => {
                debug!("Not sending message. {err}");
                return None;
            }
            Err(err) => {
                warn!("Failed to send message. {err}");
                return None;
            }
        };

        info!("Sent message '{message_id}' to {thread}.");

        let mut events = vec![
            ClientEvent::ThreadChanged {
                thread: thread.clone(),
                r#type: ClientThreadEventType::MessagesAppended {
                    message_ids: vec![message_id.clone()],
                },
            },
            ClientEvent::DraftChanged {
                thread: thread.clone(),
            },
        ];
        events.extend(self.roster_events(&thread));
        self.client_event_dispatcher.dispatch_events(events);

        Some(message_id)
    }

    /// Appends a message from another participant. Counts as unread unless it lands in the
    /// focused thread. Messages for unknown threads or without content are dropped.
    pub fn receive_message(&self, message: IncomingMessage) -> Option<MessageId> {
        let result = self.conversation_store.write(|state| {
            state.receive_message(message, self.message_id_provider.new_id(), self.formatted_now())
        });

        let received = match result {
            Ok(received) => received,
            Err(err) => {
                warn!("Dropping incoming message. {err}");
                return None;
            }
        };

        debug!(
            "Received message '{}' in {} (unread: {}).",
            received.id, received.thread, received.is_unread
        );

        let mut events = vec![ClientEvent::ThreadChanged {
            thread: received.thread.clone(),
            r#type: ClientThreadEventType::MessagesAppended {
                message_ids: vec![received.id.clone()],
            },
        }];
        events.extend(self.roster_events(&received.thread));
        self.client_event_dispatcher.dispatch_events(events);

        Some(received.id)
    }

    /// Adds the own user's reaction with `emoji` to a message or removes it if present.
    pub fn toggle_reaction(&self, message_id: &MessageId, emoji: impl Into<Emoji>) {
        let emoji = emoji.into();
        let result = self.conversation_store.write(|state| {
            state.toggle_reaction(message_id, &self.config.self_user, emoji.clone())
        });

        let (thread, toggle) = match result {
            Ok(value) => value,
            Err(err) => {
                warn!("Ignoring reaction {emoji}. {err}");
                return;
            }
        };

        debug!("Reaction {emoji} on '{message_id}': {toggle:?}.");

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ThreadChanged {
                thread,
                r#type: ClientThreadEventType::MessagesUpdated {
                    message_ids: vec![message_id.clone()],
                },
            });
    }

    fn roster_events(&self, thread: &ThreadKey) -> Vec<ClientEvent> {
        let mut events = vec![ClientEvent::SidebarChanged];
        if matches!(thread, ThreadKey::Topic(_)) {
            if let Some(chat_id) = self
                .conversation_store
                .read(|state| state.roster().owning_chat_id(thread).cloned())
            {
                events.push(ClientEvent::TopicsChanged { chat_id });
            }
        }
        events
    }

    fn formatted_now(&self) -> String {
        self.config.format_timestamp(self.time_provider.now())
    }
}
