// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::{ClientDelegate, ClientEvent};

/// Forwards events to the delegate. Must only be called after the store lock was released so
/// that the delegate can read from the client.
pub struct ClientEventDispatcher {
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl ClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        Self { delegate }
    }

    pub fn dispatch_event(&self, event: ClientEvent) {
        let Some(delegate) = &self.delegate else {
            return;
        };
        delegate.handle_event(event);
    }

    pub fn dispatch_events(&self, events: impl IntoIterator<Item = ClientEvent>) {
        for event in events {
            self.dispatch_event(event)
        }
    }
}
