// classroom-chat/classroom-core-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use classroom_core::domain::messaging::models::SelectedFile;
use classroom_core::domain::messaging::services::{FileReadError, FileReader};

/// A file reader whose reads complete only once the test resolves them by file name. Dropping
/// a sender fails the corresponding read.
pub struct DeferredFileReader {
    pending: Mutex<HashMap<String, oneshot::Receiver<String>>>,
}

impl DeferredFileReader {
    pub fn new<'a>(
        names: impl IntoIterator<Item = &'a str>,
    ) -> (Self, HashMap<String, oneshot::Sender<String>>) {
        let mut pending = HashMap::new();
        let mut senders = HashMap::new();

        for name in names {
            let (tx, rx) = oneshot::channel();
            pending.insert(name.to_string(), rx);
            senders.insert(name.to_string(), tx);
        }

        (
            Self {
                pending: Mutex::new(pending),
            },
            senders,
        )
    }
}

#[async_trait]
impl FileReader for DeferredFileReader {
    async fn read_content_ref(&self, file: &SelectedFile) -> Result<String, FileReadError> {
        let Some(receiver) = self.pending.lock().remove(&file.name) else {
            return Err(FileReadError::Empty(file.name.clone()));
        };
        receiver
            .await
            .map_err(|_| FileReadError::Empty(file.name.clone()))
    }
}
