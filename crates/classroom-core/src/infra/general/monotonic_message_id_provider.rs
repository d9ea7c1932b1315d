// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::general::services::{SystemTimeProvider, TimeProvider};
use crate::domain::messaging::models::MessageId;
use crate::domain::messaging::services::MessageIdProvider;

/// Derives message ids from the current time in milliseconds. Ids are strictly increasing, two
/// ids requested within the same millisecond are one apart.
pub struct MonotonicMessageIdProvider {
    time_provider: Arc<dyn TimeProvider>,
    last_id: Mutex<i64>,
}

impl MonotonicMessageIdProvider {
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            time_provider,
            last_id: Mutex::new(i64::MIN),
        }
    }
}

impl Default for MonotonicMessageIdProvider {
    fn default() -> Self {
        Self::new(Arc::new(SystemTimeProvider::default()))
    }
}

impl MessageIdProvider for MonotonicMessageIdProvider {
    fn new_id(&self) -> MessageId {
        let now = self.time_provider.now().timestamp_millis();
        let mut last_id = self.last_id.lock();
        *last_id = now.max(last_id.saturating_add(1));
        MessageId::from(last_id.to_string())
    }
}
