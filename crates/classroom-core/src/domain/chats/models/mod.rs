// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat::{Chat, ChatType};
pub use navigation_cursor::NavigationCursor;
pub use roster::{Roster, RosterError};
pub use topic::Topic;

mod chat;
mod navigation_cursor;
mod roster;
mod topic;
