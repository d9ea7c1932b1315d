// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum::IntoEnumIterator;
use tracing::info;

use crate::app::deps::{AppDependencies, DynClientEventDispatcher, DynConversationStore};
use crate::domain::shared::models::UserRole;
use crate::ClientEvent;

#[derive(Clone)]
pub struct AccountService {
    client_event_dispatcher: DynClientEventDispatcher,
    conversation_store: DynConversationStore,
}

impl From<&AppDependencies> for AccountService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            conversation_store: deps.conversation_store.clone(),
        }
    }
}

impl AccountService {
    pub fn available_roles(&self) -> Vec<UserRole> {
        UserRole::iter().collect()
    }

    /// The role of the signed-in user, if any.
    pub fn role(&self) -> Option<UserRole> {
        self.conversation_store.read(|state| state.role())
    }

    pub fn sign_in(&self, role: UserRole) {
        self.conversation_store.write(|state| state.sign_in(role));
        info!("Signed in as {role}.");
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountChanged);
    }

    /// Signs out and clears the selection along with all drafts. Messages and unread counts
    /// are kept.
    pub fn sign_out(&self) {
        self.conversation_store.write(|state| state.sign_out());
        info!("Signed out.");
        self.client_event_dispatcher.dispatch_events([
            ClientEvent::AccountChanged,
            ClientEvent::SelectionChanged,
        ]);
    }
}
