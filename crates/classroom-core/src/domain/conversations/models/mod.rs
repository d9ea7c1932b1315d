// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation_error::ConversationError;
pub use conversation_state::{ConversationState, ReceivedMessage};

mod conversation_error;
mod conversation_state;
