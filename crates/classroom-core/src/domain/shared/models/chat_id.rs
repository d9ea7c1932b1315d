// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use classroom_utils::id_string;

id_string!(
    /// Identifies a top-level conversation (a classroom group or a private chat).
    ChatId
);

id_string!(
    /// Identifies a topic (sub-thread) inside a group chat.
    TopicId
);
