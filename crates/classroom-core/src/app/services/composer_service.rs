// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use futures::future::{self, BoxFuture};
use futures::FutureExt;
use tracing::{debug, info, warn};

use crate::app::deps::{
    AppDependencies, DynClientEventDispatcher, DynConversationStore, DynFileReader,
};
use crate::domain::messaging::models::{
    Attachment, AttachmentType, Draft, DraftTicket, SelectedFile,
};
use crate::domain::shared::models::ThreadKey;
use crate::ClientEvent;

/// Edits the draft of the focused thread.
#[derive(Clone)]
pub struct ComposerService {
    client_event_dispatcher: DynClientEventDispatcher,
    conversation_store: DynConversationStore,
    file_reader: DynFileReader,
}

impl From<&AppDependencies> for ComposerService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            conversation_store: deps.conversation_store.clone(),
            file_reader: deps.file_reader.clone(),
        }
    }
}

impl ComposerService {
    /// The draft of the focused thread. Empty if no thread has focus.
    pub fn current_draft(&self) -> Draft {
        self.conversation_store
            .read(|state| state.current_draft().cloned())
            .unwrap_or_default()
    }

    pub fn set_draft_text(&self, text: impl Into<String>) {
        match self
            .conversation_store
            .write(|state| state.set_draft_text(text.into()))
        {
            Ok(thread) => self.dispatch_draft_changed(thread),
            Err(err) => debug!("Ignoring draft text. {err}"),
        }
    }

    pub fn remove_draft_attachment(&self, index: usize) {
        match self
            .conversation_store
            .write(|state| state.remove_draft_attachment(index))
        {
            Ok((thread, attachment)) => {
                debug!(
                    "Removed attachment '{}' from draft.",
                    attachment.file_name.as_deref().unwrap_or_default()
                );
                self.dispatch_draft_changed(thread)
            }
            Err(err) => warn!("Ignoring removal of attachment. {err}"),
        }
    }
}

impl ComposerService {
    /// Attaches a file to the draft of the focused thread.
    ///
    /// Files are appended before this method returns. Images are bound to the draft that is
    /// focused when this method is called and appended once the returned future has read their
    /// content. An image whose draft was sent or discarded in the meantime is dropped. The
    /// returned future does not borrow `self` and may be spawned.
    pub fn compose_attachment(
        &self,
        file: SelectedFile,
        kind: AttachmentType,
    ) -> BoxFuture<'static, ()> {
        match kind {
            AttachmentType::File => {
                self.append_file(&file);
                future::ready(()).boxed()
            }
            AttachmentType::Image => self
                .load_image(file)
                .unwrap_or_else(|| future::ready(()).boxed()),
        }
    }

    /// Attaches multiple files at once. Files are appended in order before this method
    /// returns. Images are read concurrently and appended in the order their reads complete.
    pub fn compose_attachments(
        &self,
        files: Vec<SelectedFile>,
        kind: AttachmentType,
    ) -> BoxFuture<'static, ()> {
        match kind {
            AttachmentType::File => {
                for file in &files {
                    self.append_file(file)
                }
                future::ready(()).boxed()
            }
            AttachmentType::Image => {
                let loads = files
                    .into_iter()
                    .filter_map(|file| self.load_image(file))
                    .collect::<Vec<_>>();
                future::join_all(loads).map(|_| ()).boxed()
            }
        }
    }

    fn append_file(&self, file: &SelectedFile) {
        match self
            .conversation_store
            .write(|state| state.append_draft_attachment(Attachment::file(file)))
        {
            Ok(thread) => self.dispatch_draft_changed(thread),
            Err(err) => warn!("Ignoring file '{}'. {err}", file.name),
        }
    }

    fn load_image(&self, file: SelectedFile) -> Option<BoxFuture<'static, ()>> {
        let ticket = match self
            .conversation_store
            .write(|state| state.issue_draft_ticket())
        {
            Ok(ticket) => ticket,
            Err(err) => {
                warn!("Ignoring image '{}'. {err}", file.name);
                return None;
            }
        };

        let service = self.clone();
        Some(async move { service.complete_image(ticket, file).await }.boxed())
    }

    async fn complete_image(&self, ticket: DraftTicket, file: SelectedFile) {
        let content_ref = match self.file_reader.read_content_ref(&file).await {
            Ok(content_ref) => content_ref,
            Err(err) => {
                warn!("Failed to read image. {err}");
                return;
            }
        };

        let attachment = Attachment::image(&file, content_ref);
        match self
            .conversation_store
            .write(|state| state.complete_draft_attachment(&ticket, attachment))
        {
            Ok(()) => self.dispatch_draft_changed(ticket.thread),
            Err(err) => info!("Discarding image '{}'. {err}", file.name),
        }
    }

    fn dispatch_draft_changed(&self, thread: ThreadKey) {
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::DraftChanged { thread })
    }
}
