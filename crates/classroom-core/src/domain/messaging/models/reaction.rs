// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexSet;

use classroom_utils::id_string;

use crate::domain::shared::models::UserId;

id_string!(Emoji);

impl Emoji {
    /// The reactions offered by the quick-reaction picker.
    pub const QUICK_REACTIONS: [&'static str; 6] = ["👍", "❤️", "😂", "😮", "😢", "🙏"];

    pub fn quick_reactions() -> Vec<Emoji> {
        Self::QUICK_REACTIONS.into_iter().map(Emoji::from).collect()
    }
}

/// An emoji applied to a message together with the users who applied it.
///
/// A reaction always has at least one user. Its count is the number of users.
#[derive(Clone, Debug, PartialEq)]
pub struct Reaction {
    pub emoji: Emoji,
    users: IndexSet<UserId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionToggle {
    Added,
    Removed,
}

impl Reaction {
    /// Returns `None` if `users` is empty.
    pub fn new(emoji: Emoji, users: impl IntoIterator<Item = UserId>) -> Option<Self> {
        let users = users.into_iter().collect::<IndexSet<_>>();
        if users.is_empty() {
            return None;
        }
        Some(Self { emoji, users })
    }

    pub fn count(&self) -> u32 {
        self.users.len() as u32
    }

    pub fn users(&self) -> impl Iterator<Item = &UserId> {
        self.users.iter()
    }

    pub fn contains(&self, user_id: &UserId) -> bool {
        self.users.contains(user_id)
    }

    pub(super) fn insert(&mut self, user_id: UserId) -> bool {
        self.users.insert(user_id)
    }

    pub(super) fn remove(&mut self, user_id: &UserId) -> bool {
        self.users.shift_remove(user_id)
    }

    pub(super) fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
