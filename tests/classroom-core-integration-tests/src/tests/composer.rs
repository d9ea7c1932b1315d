// classroom-chat/classroom-core-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use classroom_core::domain::messaging::services::{FileReadError, MockFileReader};
use classroom_core::dtos::{Attachment, AttachmentType, SelectedFile};
use classroom_core::test::mock_data;
use classroom_core::{chat_id, chat_thread, Client, ClientEvent};

use super::async_test;
use super::helpers::{DeferredFileReader, RecordingDelegate};

fn image(name: &str, content_ref: &str) -> Attachment {
    Attachment::image(&SelectedFile::new(name, 1024), content_ref)
}

#[test]
fn test_files_are_attached_in_selection_order() -> Result<()> {
    let client = Client::builder().set_roster(mock_data::roster()).build();
    client.chats.select_chat(&chat_id!("p1"));

    let _ = client.composer.compose_attachments(
        vec![
            SelectedFile::new("a.pdf", 1024),
            SelectedFile::new("b.png", 3072),
        ],
        AttachmentType::File,
    );

    let attachments = client.composer.current_draft().attachments;
    assert_eq!(
        attachments
            .iter()
            .map(|attachment| attachment.file_name.as_deref().unwrap_or_default())
            .collect::<Vec<_>>(),
        vec!["a.pdf", "b.png"]
    );
    assert_eq!(
        attachments[1].formatted_file_size(),
        Some("3 KB".to_string())
    );
    assert!(attachments
        .iter()
        .all(|attachment| attachment.r#type == AttachmentType::File));

    Ok(())
}

#[test]
fn test_removes_draft_attachment() -> Result<()> {
    let delegate = RecordingDelegate::default();
    let client = Client::builder()
        .set_roster(mock_data::roster())
        .set_delegate(delegate.boxed())
        .build();
    client.chats.select_chat(&chat_id!("p1"));

    for name in ["a.pdf", "b.pdf", "c.pdf"] {
        let _ = client
            .composer
            .compose_attachment(SelectedFile::new(name, 10), AttachmentType::File);
    }
    delegate.take_events();

    client.composer.remove_draft_attachment(1);
    client.composer.remove_draft_attachment(7);

    assert_eq!(
        client.composer.current_draft().attachments,
        vec![
            Attachment::file(&SelectedFile::new("a.pdf", 10)),
            Attachment::file(&SelectedFile::new("c.pdf", 10)),
        ]
    );
    assert_eq!(
        delegate.take_events(),
        vec![ClientEvent::DraftChanged {
            thread: chat_thread!("p1")
        }]
    );

    Ok(())
}

#[test]
fn test_ignores_composition_without_focus() -> Result<()> {
    let client = Client::builder().set_roster(mock_data::roster()).build();

    client.composer.set_draft_text("Hello");
    let _ = client
        .composer
        .compose_attachment(SelectedFile::new("a.pdf", 1), AttachmentType::File);

    assert!(client.composer.current_draft().is_empty());

    Ok(())
}

#[test]
fn test_drafts_are_kept_per_thread() -> Result<()> {
    let client = Client::builder().set_roster(mock_data::roster()).build();

    client.chats.select_chat(&chat_id!("p1"));
    client.composer.set_draft_text("For the parent");
    client.chats.select_chat(&chat_id!("g2"));
    assert_eq!(client.composer.current_draft().text, "");
    client.composer.set_draft_text("For the group");

    client.chats.select_chat(&chat_id!("p1"));
    assert_eq!(client.composer.current_draft().text, "For the parent");

    Ok(())
}

#[async_test]
async fn test_attaches_image_with_mocked_reader() -> Result<()> {
    let mut file_reader = MockFileReader::new();
    file_reader
        .expect_read_content_ref()
        .times(1)
        .returning(|file| Ok(format!("data:image/png;base64,{}", file.name)));

    let client = Client::builder()
        .set_roster(mock_data::roster())
        .set_file_reader(file_reader)
        .build();
    client.chats.select_chat(&chat_id!("p1"));

    client
        .composer
        .compose_attachment(SelectedFile::new("photo.png", 1024), AttachmentType::Image)
        .await;

    assert_eq!(
        client.composer.current_draft().attachments,
        vec![image("photo.png", "data:image/png;base64,photo.png")]
    );

    client.messaging.send_message();
    assert_eq!(
        client.chats.chat(&chat_id!("p1")).unwrap().last_message_preview,
        "📷 Image"
    );

    Ok(())
}

#[async_test]
async fn test_drops_unreadable_image() -> Result<()> {
    let mut file_reader = MockFileReader::new();
    file_reader
        .expect_read_content_ref()
        .returning(|file| match file.name.as_str() {
            "broken.png" => Err(FileReadError::Empty(file.name.clone())),
            _ => Ok(format!("data:{}", file.name)),
        });

    let client = Client::builder()
        .set_roster(mock_data::roster())
        .set_file_reader(file_reader)
        .build();
    client.chats.select_chat(&chat_id!("p1"));

    client
        .composer
        .compose_attachments(
            vec![
                SelectedFile::new("broken.png", 1024),
                SelectedFile::new("fine.png", 1024),
            ],
            AttachmentType::Image,
        )
        .await;

    assert_eq!(
        client.composer.current_draft().attachments,
        vec![image("fine.png", "data:fine.png")]
    );

    Ok(())
}

#[async_test]
async fn test_images_are_attached_in_completion_order() -> Result<()> {
    let (file_reader, mut senders) = DeferredFileReader::new(["a.png", "b.png"]);
    let client = Client::builder()
        .set_roster(mock_data::roster())
        .set_file_reader(file_reader)
        .build();
    client.chats.select_chat(&chat_id!("p1"));

    let task = tokio::spawn(client.composer.compose_attachments(
        vec![
            SelectedFile::new("a.png", 1024),
            SelectedFile::new("b.png", 1024),
        ],
        AttachmentType::Image,
    ));

    let _ = senders.remove("b.png").unwrap().send("data:b".to_string());
    while client.composer.current_draft().attachments.is_empty() {
        tokio::task::yield_now().await;
    }
    let _ = senders.remove("a.png").unwrap().send("data:a".to_string());
    task.await?;

    assert_eq!(
        client.composer.current_draft().attachments,
        vec![image("b.png", "data:b"), image("a.png", "data:a")]
    );

    Ok(())
}

#[async_test]
async fn test_image_stays_with_draft_it_was_selected_for() -> Result<()> {
    let (file_reader, mut senders) = DeferredFileReader::new(["photo.png"]);
    let client = Client::builder()
        .set_roster(mock_data::roster())
        .set_file_reader(file_reader)
        .build();

    client.chats.select_chat(&chat_id!("p1"));
    let pending = client
        .composer
        .compose_attachment(SelectedFile::new("photo.png", 1024), AttachmentType::Image);

    client.chats.select_chat(&chat_id!("g2"));
    let _ = senders.remove("photo.png").unwrap().send("data:photo".to_string());
    pending.await;

    assert!(client.composer.current_draft().is_empty());

    client.chats.select_chat(&chat_id!("p1"));
    assert_eq!(
        client.composer.current_draft().attachments,
        vec![image("photo.png", "data:photo")]
    );

    Ok(())
}

#[async_test]
async fn test_discards_image_resolved_after_send() -> Result<()> {
    let (file_reader, mut senders) = DeferredFileReader::new(["late.png"]);
    let client = Client::builder()
        .set_roster(mock_data::roster())
        .set_file_reader(file_reader)
        .build();

    client.chats.select_chat(&chat_id!("p1"));
    let pending = client
        .composer
        .compose_attachment(SelectedFile::new("late.png", 1024), AttachmentType::Image);

    client.composer.set_draft_text("See below");
    client.messaging.send_message();

    let _ = senders.remove("late.png").unwrap().send("data:late".to_string());
    pending.await;

    assert!(client.composer.current_draft().is_empty());
    let messages = client.messaging.current_thread_messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].attachments.is_empty());

    Ok(())
}

#[async_test]
async fn test_reads_images_from_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("greeting.png");
    std::fs::write(&path, "hello")?;

    let client = Client::builder().set_roster(mock_data::roster()).build();
    client.chats.select_chat(&chat_id!("p1"));

    client
        .composer
        .compose_attachment(
            SelectedFile::new("greeting.png", 5).with_path(&path),
            AttachmentType::Image,
        )
        .await;

    assert_eq!(
        client.composer.current_draft().attachments[0].content_ref,
        Some("data:image/png;base64,aGVsbG8=".to_string())
    );

    Ok(())
}
