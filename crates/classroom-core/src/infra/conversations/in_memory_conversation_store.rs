// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::Mutex;

use crate::domain::conversations::models::ConversationState;

/// Exclusive owner of the session's `ConversationState`.
///
/// Each closure passed to `read` or `write` runs under the lock, so mutations never
/// interleave. The closures must not block or call back into the store.
pub struct InMemoryConversationStore {
    state: Mutex<ConversationState>,
}

impl InMemoryConversationStore {
    pub fn new(state: ConversationState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    pub fn read<T>(&self, f: impl FnOnce(&ConversationState) -> T) -> T {
        f(&*self.state.lock())
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut ConversationState) -> T) -> T {
        f(&mut *self.state.lock())
    }
}
