// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AttachmentType {
    Image,
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub r#type: AttachmentType,
    /// A reference to the resolved content (e.g. a data URL). Only images carry one.
    pub content_ref: Option<String>,
    pub file_name: Option<String>,
    /// Size in bytes.
    pub file_size: Option<u64>,
}

/// A file the user picked in the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        Self {
            path: PathBuf::from(&name),
            name,
            size,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

impl Attachment {
    pub fn file(file: &SelectedFile) -> Self {
        Self {
            r#type: AttachmentType::File,
            content_ref: None,
            file_name: Some(file.name.clone()),
            file_size: Some(file.size),
        }
    }

    pub fn image(file: &SelectedFile, content_ref: impl Into<String>) -> Self {
        Self {
            r#type: AttachmentType::Image,
            content_ref: Some(content_ref.into()),
            file_name: Some(file.name.clone()),
            file_size: Some(file.size),
        }
    }

    /// The size rendered in whole kilobytes, e.g. "245 KB".
    pub fn formatted_file_size(&self) -> Option<String> {
        let size = self.file_size?;
        Some(format!("{:.0} KB", size as f64 / 1024.0))
    }

    pub(crate) fn preview(&self) -> String {
        match self.r#type {
            AttachmentType::Image => "📷 Image".to_string(),
            AttachmentType::File => format!("📎 {}", self.file_name.as_deref().unwrap_or("File")),
        }
    }
}
