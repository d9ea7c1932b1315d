// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{ThreadKey, UserId};

use super::Attachment;

/// A message written by another participant.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    pub thread: ThreadKey,
    pub sender: UserId,
    pub text: Option<String>,
    pub attachments: Vec<Attachment>,
}
