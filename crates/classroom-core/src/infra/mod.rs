// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod conversations;
pub mod events;
pub mod files;
pub mod general;
pub mod roster;
