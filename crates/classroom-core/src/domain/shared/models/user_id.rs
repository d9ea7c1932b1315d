// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use classroom_utils::id_string;

id_string!(UserId);

impl UserId {
    /// The display identity of the local user.
    pub const SELF_NAME: &'static str = "You";

    pub fn own() -> Self {
        Self::from(Self::SELF_NAME)
    }
}
