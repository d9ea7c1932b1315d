// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::MessageId;

/// Hands out message ids. Ids must be unique for the lifetime of a session.
pub trait MessageIdProvider: Send + Sync {
    fn new_id(&self) -> MessageId;
}
