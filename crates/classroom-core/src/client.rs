// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::client_builder::ClientBuilder;
use crate::services::{AccountService, ChatsService, ComposerService, MessagingService};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

/// Receives events after the state change they describe has completed. The delegate may call
/// back into the client from `handle_event`.
pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, event: ClientEvent);
}

impl Client {
    /// Starts with an empty roster. Use `ClientBuilder::set_school_roster` or
    /// `ClientBuilder::set_roster` to seed the chat list.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub account: AccountService,
    pub chats: ChatsService,
    pub composer: ComposerService,
    pub messaging: MessagingService,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
