// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod chats;
pub mod conversations;
pub mod general;
pub mod messaging;
pub mod shared;
