// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use tracing::debug;

use crate::domain::messaging::models::SelectedFile;
use crate::domain::messaging::services::{FileReadError, FileReader};

/// Reads a file from disk and encodes it as a `data:` URL.
#[derive(Default)]
pub struct DataUrlFileReader {}

impl DataUrlFileReader {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl FileReader for DataUrlFileReader {
    async fn read_content_ref(&self, file: &SelectedFile) -> Result<String, FileReadError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|source| FileReadError::Io {
                name: file.name.clone(),
                source,
            })?;

        if bytes.is_empty() {
            return Err(FileReadError::Empty(file.name.clone()));
        }

        let media_type = mime_guess::from_path(&file.name).first_or_octet_stream();
        debug!(
            "Encoding '{}' ({} bytes) as {}.",
            file.name,
            bytes.len(),
            media_type
        );

        Ok(format!(
            "data:{};base64,{}",
            media_type.essence_str(),
            BASE64_STANDARD.encode(bytes)
        ))
    }
}
