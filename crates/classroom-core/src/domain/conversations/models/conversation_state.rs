// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use tracing::warn;

use crate::domain::chats::models::{NavigationCursor, Roster};
use crate::domain::messaging::models::{
    Attachment, Draft, DraftTicket, Emoji, IncomingMessage, Message, MessageId, ReactionToggle,
};
use crate::domain::shared::models::{ChatId, ThreadKey, TopicId, UserId, UserRole};

use super::ConversationError;

type Result<T, E = ConversationError> = std::result::Result<T, E>;

/// All chats, topics, messages, drafts and the navigation cursor of a session.
///
/// Every method runs to completion without suspending, so a caller holding exclusive access
/// observes each operation as one atomic step.
#[derive(Debug, Default)]
pub struct ConversationState {
    roster: Roster,
    threads: HashMap<ThreadKey, Vec<Message>>,
    message_threads: HashMap<MessageId, ThreadKey>,
    cursor: NavigationCursor,
    drafts: HashMap<ThreadKey, Draft>,
    role: Option<UserRole>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedMessage {
    pub id: MessageId,
    pub thread: ThreadKey,
    /// Whether the message was counted as unread.
    pub is_unread: bool,
}

impl ConversationState {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            ..Default::default()
        }
    }
}

impl ConversationState {
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    pub fn current_thread(&self) -> Option<ThreadKey> {
        self.cursor.thread_key()
    }

    pub fn messages(&self, thread: &ThreadKey) -> &[Message] {
        self.threads
            .get(thread)
            .map(|messages| messages.as_slice())
            .unwrap_or_default()
    }

    pub fn current_thread_messages(&self) -> &[Message] {
        let Some(thread) = self.current_thread() else {
            return &[];
        };
        self.messages(&thread)
    }

    pub fn message(&self, message_id: &MessageId) -> Option<&Message> {
        let thread = self.message_threads.get(message_id)?;
        self.messages(thread)
            .iter()
            .find(|message| &message.id == message_id)
    }

    pub fn draft(&self, thread: &ThreadKey) -> Option<&Draft> {
        self.drafts.get(thread)
    }

    pub fn current_draft(&self) -> Option<&Draft> {
        self.draft(&self.current_thread()?)
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role
    }
}

impl ConversationState {
    /// Focuses a chat and marks it as read. Selecting a group also selects its first topic.
    pub fn select_chat(&mut self, chat_id: &ChatId) -> Result<()> {
        let Some(chat) = self.roster.chat(chat_id) else {
            return Err(ConversationError::UnknownChat(chat_id.clone()));
        };
        let is_group = chat.is_group();
        let first_topic_id = self.roster.topics(chat_id).first().map(|t| t.id.clone());

        self.roster.mark_chat_read(chat_id);
        self.cursor.selected_chat_id = Some(chat_id.clone());

        if !is_group {
            self.cursor.selected_group_id = None;
            self.cursor.selected_topic_id = None;
            return Ok(());
        }

        self.cursor.selected_group_id = Some(chat_id.clone());
        self.cursor.selected_topic_id = None;

        if let Some(topic_id) = first_topic_id {
            self.select_topic(&topic_id)?;
        }
        Ok(())
    }

    /// Focuses a topic of the selected group and marks it as read.
    /// Returns the id of the group whose unread count was recomputed.
    pub fn select_topic(&mut self, topic_id: &TopicId) -> Result<ChatId> {
        let Some(group_id) = self.roster.parent_chat_id(topic_id).cloned() else {
            return Err(ConversationError::UnknownTopic(topic_id.clone()));
        };
        if self.cursor.selected_group_id.as_ref() != Some(&group_id) {
            return Err(ConversationError::TopicNotInSelectedGroup(topic_id.clone()));
        }

        self.cursor.selected_topic_id = Some(topic_id.clone());
        self.roster.mark_topic_read(topic_id);
        Ok(group_id)
    }
}

impl ConversationState {
    /// Installs existing messages at the end of a thread. Messages with an id that is already
    /// in use are skipped. Returns the ids of the inserted messages.
    pub fn insert_history(
        &mut self,
        thread: &ThreadKey,
        messages: impl IntoIterator<Item = Message>,
    ) -> Result<Vec<MessageId>> {
        if !self.roster.contains_thread(thread) {
            return Err(ConversationError::UnknownThread(thread.clone()));
        }

        let mut inserted = vec![];
        for message in messages {
            if self.message_threads.contains_key(&message.id) {
                warn!("Skipping message with duplicate id '{}'.", message.id);
                continue;
            }
            inserted.push(message.id.clone());
            self.append(thread, message);
        }
        Ok(inserted)
    }

    /// Appends the focused thread's draft as a new own message and clears the draft.
    pub fn send_message(
        &mut self,
        id: MessageId,
        sender: UserId,
        timestamp: String,
    ) -> Result<MessageId> {
        let thread = self.sendable_thread()?;
        if self.message_threads.contains_key(&id) {
            return Err(ConversationError::DuplicateMessage(id));
        }

        let draft = self.drafts.entry(thread.clone()).or_default().take();
        let message = Message {
            id: id.clone(),
            text: Some(draft.text).filter(|text| !text.trim().is_empty()),
            sender,
            timestamp,
            is_own: true,
            attachments: draft.attachments,
            reactions: vec![],
        };

        self.append(&thread, message);
        Ok(id)
    }

    /// The focused thread if its draft can be sent.
    pub fn sendable_thread(&self) -> Result<ThreadKey> {
        let thread = self
            .current_thread()
            .ok_or(ConversationError::NoThreadSelected)?;
        if self.draft(&thread).map_or(true, Draft::is_empty) {
            return Err(ConversationError::EmptyMessage);
        }
        Ok(thread)
    }

    /// Appends a message from another participant. Unless the message lands in the focused
    /// thread it counts as unread.
    pub fn receive_message(
        &mut self,
        incoming: IncomingMessage,
        id: MessageId,
        timestamp: String,
    ) -> Result<ReceivedMessage> {
        let thread = incoming.thread;
        if !self.roster.contains_thread(&thread) {
            return Err(ConversationError::UnknownThread(thread));
        }
        if self.message_threads.contains_key(&id) {
            return Err(ConversationError::DuplicateMessage(id));
        }
        let text = incoming.text.filter(|text| !text.trim().is_empty());
        if text.is_none() && incoming.attachments.is_empty() {
            return Err(ConversationError::EmptyMessage);
        }

        self.append(
            &thread,
            Message {
                id: id.clone(),
                text,
                sender: incoming.sender,
                timestamp,
                is_own: false,
                attachments: incoming.attachments,
                reactions: vec![],
            },
        );

        let is_unread = self.current_thread().as_ref() != Some(&thread)
            && self.roster.increment_unread_count(&thread);

        Ok(ReceivedMessage {
            id,
            thread,
            is_unread,
        })
    }

    /// Toggles `user_id`'s reaction on a message in any thread.
    pub fn toggle_reaction(
        &mut self,
        message_id: &MessageId,
        user_id: &UserId,
        emoji: Emoji,
    ) -> Result<(ThreadKey, ReactionToggle)> {
        let Some(thread) = self.message_threads.get(message_id).cloned() else {
            return Err(ConversationError::UnknownMessage(message_id.clone()));
        };
        let Some(message) = self
            .threads
            .get_mut(&thread)
            .and_then(|messages| messages.iter_mut().find(|m| &m.id == message_id))
        else {
            return Err(ConversationError::UnknownMessage(message_id.clone()));
        };

        let toggle = message.toggle_reaction(user_id, emoji);
        Ok((thread, toggle))
    }

    fn append(&mut self, thread: &ThreadKey, message: Message) {
        self.roster
            .record_last_message(thread, &message.preview(), &message.timestamp);
        self.message_threads
            .insert(message.id.clone(), thread.clone());
        self.threads.entry(thread.clone()).or_default().push(message);
    }
}

impl ConversationState {
    pub fn set_draft_text(&mut self, text: String) -> Result<ThreadKey> {
        let thread = self
            .current_thread()
            .ok_or(ConversationError::NoThreadSelected)?;
        self.drafts.entry(thread.clone()).or_default().text = text;
        Ok(thread)
    }

    /// Appends an attachment to the focused thread's draft.
    pub fn append_draft_attachment(&mut self, attachment: Attachment) -> Result<ThreadKey> {
        let thread = self
            .current_thread()
            .ok_or(ConversationError::NoThreadSelected)?;
        self.drafts
            .entry(thread.clone())
            .or_default()
            .attachments
            .push(attachment);
        Ok(thread)
    }

    pub fn remove_draft_attachment(&mut self, index: usize) -> Result<(ThreadKey, Attachment)> {
        let thread = self
            .current_thread()
            .ok_or(ConversationError::NoThreadSelected)?;
        let attachment = self
            .drafts
            .get_mut(&thread)
            .and_then(|draft| draft.remove_attachment(index))
            .ok_or(ConversationError::NoSuchAttachment(index))?;
        Ok((thread, attachment))
    }

    /// Returns a ticket for an attachment that is resolved later, bound to the focused
    /// thread's current draft.
    pub fn issue_draft_ticket(&mut self) -> Result<DraftTicket> {
        let thread = self
            .current_thread()
            .ok_or(ConversationError::NoThreadSelected)?;
        let draft_id = self.drafts.entry(thread.clone()).or_default().id();
        Ok(DraftTicket { thread, draft_id })
    }

    /// Appends a resolved attachment to the draft the ticket was issued for, regardless of
    /// which thread has focus now. Fails if that draft was sent or discarded in the meantime.
    pub fn complete_draft_attachment(
        &mut self,
        ticket: &DraftTicket,
        attachment: Attachment,
    ) -> Result<()> {
        let Some(draft) = self
            .drafts
            .get_mut(&ticket.thread)
            .filter(|draft| draft.id() == ticket.draft_id)
        else {
            return Err(ConversationError::StaleDraft(ticket.thread.clone()));
        };
        draft.attachments.push(attachment);
        Ok(())
    }
}

impl ConversationState {
    pub fn sign_in(&mut self, role: UserRole) {
        self.role = Some(role);
    }

    /// Forgets the role, the navigation cursor and all drafts.
    pub fn sign_out(&mut self) {
        self.role = None;
        self.cursor.reset();
        self.drafts.clear();
    }
}
