// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use monotonic_message_id_provider::MonotonicMessageIdProvider;

mod monotonic_message_id_provider;
