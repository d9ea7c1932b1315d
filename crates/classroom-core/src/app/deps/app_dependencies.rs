// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::general::services::TimeProvider;
use crate::domain::messaging::services::{FileReader, MessageIdProvider};
use crate::infra::conversations::InMemoryConversationStore;
use crate::infra::events::ClientEventDispatcher;

use super::AppConfig;

pub(crate) type DynAppConfig = Arc<AppConfig>;
pub(crate) type DynClientEventDispatcher = Arc<ClientEventDispatcher>;
pub(crate) type DynConversationStore = Arc<InMemoryConversationStore>;
pub(crate) type DynFileReader = Arc<dyn FileReader>;
pub(crate) type DynMessageIdProvider = Arc<dyn MessageIdProvider>;
pub(crate) type DynTimeProvider = Arc<dyn TimeProvider>;

pub(crate) struct AppDependencies {
    pub config: DynAppConfig,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub conversation_store: DynConversationStore,
    pub file_reader: DynFileReader,
    pub message_id_provider: DynMessageIdProvider,
    pub time_provider: DynTimeProvider,
}
