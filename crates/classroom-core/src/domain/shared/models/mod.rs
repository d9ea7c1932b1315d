// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_id::{ChatId, TopicId};
pub use thread_key::ThreadKey;
pub use user_id::UserId;
pub use user_role::UserRole;

mod chat_id;
mod thread_key;
mod user_id;
mod user_role;
