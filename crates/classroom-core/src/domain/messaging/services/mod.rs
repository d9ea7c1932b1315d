// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[cfg(feature = "test")]
pub use file_reader::MockFileReader;
pub use file_reader::{FileReadError, FileReader};
pub use message_id_provider::MessageIdProvider;

mod file_reader;
mod message_id_provider;
