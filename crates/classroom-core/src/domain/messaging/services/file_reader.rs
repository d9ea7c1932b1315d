// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::messaging::models::SelectedFile;

#[derive(thiserror::Error, Debug)]
pub enum FileReadError {
    #[error("Could not read '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("File '{0}' is empty.")]
    Empty(String),
}

/// Converts a selected file into a content reference that can be attached to a message.
#[cfg_attr(feature = "test", mockall::automock)]
#[async_trait]
pub trait FileReader: Send + Sync {
    async fn read_content_ref(&self, file: &SelectedFile) -> Result<String, FileReadError>;
}
