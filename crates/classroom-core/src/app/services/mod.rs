// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_service::AccountService;
pub use chats_service::ChatsService;
pub use composer_service::ComposerService;
pub use messaging_service::MessagingService;

mod account_service;
mod chats_service;
mod composer_service;
mod messaging_service;
