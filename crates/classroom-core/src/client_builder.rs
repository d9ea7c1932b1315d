// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use tracing::{info, warn};

use crate::app::deps::{
    AppConfig, AppDependencies, DynFileReader, DynMessageIdProvider, DynTimeProvider,
};
use crate::client::ClientInner;
use crate::domain::chats::models::{Roster, RosterError};
use crate::domain::conversations::models::ConversationState;
use crate::domain::general::services::{SystemTimeProvider, TimeProvider};
use crate::domain::messaging::models::Message;
use crate::domain::messaging::services::{FileReader, MessageIdProvider};
use crate::domain::shared::models::ThreadKey;
use crate::infra::conversations::InMemoryConversationStore;
use crate::infra::events::ClientEventDispatcher;
use crate::infra::files::DataUrlFileReader;
use crate::infra::general::MonotonicMessageIdProvider;
use crate::infra::roster::school_roster;
use crate::services::{AccountService, ChatsService, ComposerService, MessagingService};
use crate::{Client, ClientDelegate};

pub struct ClientBuilder {
    config: AppConfig,
    delegate: Option<Box<dyn ClientDelegate>>,
    file_reader: DynFileReader,
    history: Vec<(ThreadKey, Vec<Message>)>,
    message_id_provider: Option<DynMessageIdProvider>,
    roster: Roster,
    time_provider: DynTimeProvider,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            config: Default::default(),
            delegate: None,
            file_reader: Arc::new(DataUrlFileReader::new()),
            history: vec![],
            message_id_provider: None,
            roster: Default::default(),
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn set_file_reader<R: FileReader + 'static>(mut self, file_reader: R) -> Self {
        self.file_reader = Arc::new(file_reader);
        self
    }

    /// Seeds a thread with existing messages. May be called multiple times.
    pub fn set_history(
        mut self,
        thread: impl Into<ThreadKey>,
        messages: impl IntoIterator<Item = Message>,
    ) -> Self {
        self.history
            .push((thread.into(), messages.into_iter().collect()));
        self
    }

    /// Defaults to ids derived from the time provider.
    pub fn set_message_id_provider<P: MessageIdProvider + 'static>(
        mut self,
        message_id_provider: P,
    ) -> Self {
        self.message_id_provider = Some(Arc::new(message_id_provider));
        self
    }

    pub fn set_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    /// Seeds the client with the built-in school roster.
    pub fn set_school_roster(self) -> Result<Self, RosterError> {
        Ok(self.set_roster(school_roster()?))
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn build(self) -> Client {
        let mut state = ConversationState::new(self.roster);
        for (thread, messages) in self.history {
            if let Err(err) = state.insert_history(&thread, messages) {
                warn!("Skipping history of {thread}. {err}");
            }
        }

        let message_id_provider = self.message_id_provider.unwrap_or_else(|| {
            Arc::new(MonotonicMessageIdProvider::new(self.time_provider.clone()))
        });

        let dependencies = AppDependencies {
            config: Arc::new(self.config),
            client_event_dispatcher: Arc::new(ClientEventDispatcher::new(self.delegate)),
            conversation_store: Arc::new(InMemoryConversationStore::new(state)),
            file_reader: self.file_reader,
            message_id_provider,
            time_provider: self.time_provider,
        };

        info!("Built client.");

        Client::from(Arc::new(ClientInner {
            account: AccountService::from(&dependencies),
            chats: ChatsService::from(&dependencies),
            composer: ComposerService::from(&dependencies),
            messaging: MessagingService::from(&dependencies),
        }))
    }
}
