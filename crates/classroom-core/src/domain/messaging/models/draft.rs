// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use uuid::Uuid;

use crate::domain::shared::models::ThreadKey;

use super::Attachment;

/// Identifies one composition. A draft gets a fresh id whenever it is sent or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DraftId(Uuid);

impl DraftId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DraftId {
    fn default() -> Self {
        Self::new()
    }
}

/// The unsent text and attachments of a thread.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    id: DraftId,
    pub text: String,
    pub attachments: Vec<Attachment>,
}

/// Binds an in-flight attachment resolution to the draft it was issued against.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftTicket {
    pub thread: ThreadKey,
    pub draft_id: DraftId,
}

impl Draft {
    pub fn id(&self) -> DraftId {
        self.id
    }

    /// True if there is neither non-blank text nor an attachment.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.attachments.is_empty()
    }

    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        if index >= self.attachments.len() {
            return None;
        }
        Some(self.attachments.remove(index))
    }

    /// Returns the current contents and leaves a new, empty draft in place.
    pub(crate) fn take(&mut self) -> Draft {
        std::mem::take(self)
    }
}
