// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use attachment::{Attachment, AttachmentType, SelectedFile};
pub use draft::{Draft, DraftId, DraftTicket};
pub use incoming_message::IncomingMessage;
pub use message::{Message, MessageId};
pub use reaction::{Emoji, Reaction, ReactionToggle};

mod attachment;
mod draft;
mod incoming_message;
mod message;
mod reaction;
