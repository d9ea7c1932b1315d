// classroom-chat/classroom-core-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use tokio::test as async_test;

mod chats;
mod composer;
