// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use classroom_utils::id_string;

use crate::domain::shared::models::UserId;

use super::{Attachment, Emoji, Reaction, ReactionToggle};

id_string!(MessageId);

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub text: Option<String>,
    pub sender: UserId,
    /// Display string supplied by the clock/formatter. Not used for ordering.
    pub timestamp: String,
    pub is_own: bool,
    pub attachments: Vec<Attachment>,
    pub reactions: Vec<Reaction>,
}

impl Message {
    /// Adds `user_id` to the reaction if it isn't a member yet, otherwise removes it. Reactions
    /// without users are dropped.
    pub fn toggle_reaction(&mut self, user_id: &UserId, emoji: Emoji) -> ReactionToggle {
        let Some(idx) = self
            .reactions
            .iter()
            .position(|reaction| reaction.emoji == emoji)
        else {
            self.reactions.extend(Reaction::new(emoji, [user_id.clone()]));
            return ReactionToggle::Added;
        };

        let reaction = &mut self.reactions[idx];

        if !reaction.remove(user_id) {
            reaction.insert(user_id.clone());
            return ReactionToggle::Added;
        }

        if reaction.is_empty() {
            self.reactions.remove(idx);
        }
        ReactionToggle::Removed
    }

    pub fn reaction(&self, emoji: &Emoji) -> Option<&Reaction> {
        self.reactions
            .iter()
            .find(|reaction| &reaction.emoji == emoji)
    }

    pub fn reactions_from<'a, 'b: 'a>(
        &'a self,
        user_id: &'b UserId,
    ) -> impl Iterator<Item = &'a Emoji> {
        self.reactions
            .iter()
            .filter(|reaction| reaction.contains(user_id))
            .map(|reaction| &reaction.emoji)
    }

    /// The line shown in the chat list for this message.
    pub fn preview(&self) -> String {
        if let Some(text) = self.text.as_deref().filter(|text| !text.trim().is_empty()) {
            return text.to_string();
        }
        self.attachments
            .first()
            .map(Attachment::preview)
            .unwrap_or_default()
    }
}
