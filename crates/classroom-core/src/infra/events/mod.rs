// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client_event_dispatcher::ClientEventDispatcher;

mod client_event_dispatcher;
