// classroom-chat/classroom-core-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use classroom_core::dtos::{ChatId, NavigationCursor};
use classroom_core::test::{mock_data, MessageBuilder};
use classroom_core::{chat_id, chat_thread, topic_id, topic_thread, Client, ClientEvent};

use super::helpers::RecordingDelegate;

fn group_unread_matches_topics(client: &Client, group_id: &ChatId) -> bool {
    let sum = client
        .chats
        .topics(group_id)
        .iter()
        .map(|topic| topic.unread_count)
        .sum::<u32>();
    client.chats.chat(group_id).map(|chat| chat.unread_count) == Some(sum)
}

#[test]
fn test_selecting_group_selects_first_topic() -> Result<()> {
    let client = Client::builder().set_roster(mock_data::roster()).build();

    assert_eq!(client.chats.chat(&chat_id!("g1")).unwrap().unread_count, 3);

    client.chats.select_chat(&chat_id!("g1"));

    assert_eq!(
        client.chats.cursor(),
        NavigationCursor {
            selected_chat_id: Some(chat_id!("g1")),
            selected_group_id: Some(chat_id!("g1")),
            selected_topic_id: Some(topic_id!("g1-important")),
        }
    );

    let topics = client.chats.topics(&chat_id!("g1"));
    assert_eq!(topics[0].unread_count, 0);
    assert_eq!(topics[1].unread_count, 1);
    assert_eq!(client.chats.chat(&chat_id!("g1")).unwrap().unread_count, 1);

    Ok(())
}

#[test]
fn test_group_unread_is_sum_of_topics_after_each_selection() -> Result<()> {
    let client = Client::builder().set_roster(mock_data::roster()).build();

    client.chats.select_chat(&chat_id!("g1"));
    assert!(group_unread_matches_topics(&client, &chat_id!("g1")));

    client.chats.select_topic(&topic_id!("g1-homework"));
    assert!(group_unread_matches_topics(&client, &chat_id!("g1")));
    assert_eq!(client.chats.chat(&chat_id!("g1")).unwrap().unread_count, 0);

    client.chats.select_topic(&topic_id!("g1-important"));
    assert!(group_unread_matches_topics(&client, &chat_id!("g1")));
    assert!(group_unread_matches_topics(&client, &chat_id!("g3")));

    Ok(())
}

#[test]
fn test_selecting_private_chat_clears_group() -> Result<()> {
    let client = Client::builder().set_roster(mock_data::roster()).build();

    client.chats.select_chat(&chat_id!("g1"));
    client.chats.select_chat(&chat_id!("p1"));

    assert_eq!(
        client.chats.cursor(),
        NavigationCursor {
            selected_chat_id: Some(chat_id!("p1")),
            selected_group_id: None,
            selected_topic_id: None,
        }
    );
    assert_eq!(client.chats.chat(&chat_id!("p1")).unwrap().unread_count, 0);

    Ok(())
}

#[test]
fn test_selecting_group_without_topics_focuses_group_thread() -> Result<()> {
    let client = Client::builder()
        .set_roster(mock_data::roster())
        .set_history(
            chat_thread!("g2"),
            [MessageBuilder::new_with_index(1).build_message()],
        )
        .build();

    client.chats.select_chat(&chat_id!("g1"));
    client.chats.select_chat(&chat_id!("g2"));

    assert_eq!(client.chats.cursor().selected_topic_id, None);
    assert_eq!(
        client.messaging.current_thread_messages(),
        vec![MessageBuilder::new_with_index(1).build_message()]
    );

    Ok(())
}

#[test]
fn test_ignores_unknown_and_foreign_ids() -> Result<()> {
    let delegate = RecordingDelegate::default();
    let client = Client::builder()
        .set_roster(mock_data::roster())
        .set_delegate(delegate.boxed())
        .build();

    client.chats.select_chat(&chat_id!("nope"));
    client.chats.select_topic(&topic_id!("g1-homework"));
    assert_eq!(client.chats.cursor(), NavigationCursor::default());

    client.chats.select_chat(&chat_id!("g1"));
    delegate.take_events();

    client.chats.select_topic(&topic_id!("g3-news"));
    assert_eq!(
        client.chats.cursor().selected_topic_id,
        Some(topic_id!("g1-important"))
    );
    assert_eq!(client.chats.topics(&chat_id!("g3"))[0].unread_count, 4);
    assert_eq!(delegate.take_events(), vec![]);

    Ok(())
}

#[test]
fn test_current_thread_messages_follow_cursor() -> Result<()> {
    let client = Client::builder()
        .set_roster(mock_data::roster())
        .set_history(
            topic_thread!("g1-homework"),
            [MessageBuilder::new_with_index(1).build_message()],
        )
        .set_history(
            chat_thread!("p1"),
            [MessageBuilder::new_with_index(2).build_message()],
        )
        .build();

    assert!(client.messaging.current_thread_messages().is_empty());

    client.chats.select_chat(&chat_id!("g1"));
    assert!(client.messaging.current_thread_messages().is_empty());

    client.chats.select_topic(&topic_id!("g1-homework"));
    assert_eq!(
        client.messaging.current_thread_messages(),
        vec![MessageBuilder::new_with_index(1).build_message()]
    );

    client.chats.select_chat(&chat_id!("p1"));
    assert_eq!(
        client.messaging.current_thread_messages(),
        vec![MessageBuilder::new_with_index(2).build_message()]
    );

    Ok(())
}

#[test]
fn test_selection_dispatches_events() -> Result<()> {
    let delegate = RecordingDelegate::default();
    let client = Client::builder()
        .set_roster(mock_data::roster())
        .set_delegate(delegate.boxed())
        .build();
    delegate.attach(&client);

    client.chats.select_chat(&chat_id!("g1"));

    assert_eq!(
        delegate.take_events(),
        vec![
            ClientEvent::SelectionChanged,
            ClientEvent::SidebarChanged,
            ClientEvent::TopicsChanged {
                chat_id: chat_id!("g1")
            },
        ]
    );
    // 1 (g1-homework) + 1 (p1) + 4 (g3-news)
    assert_eq!(delegate.unread_counts(), vec![6]);

    delegate.detach();
    Ok(())
}

#[test]
fn test_seeds_school_roster() -> Result<()> {
    let client = Client::builder().set_school_roster()?.build();

    assert_eq!(
        client
            .chats
            .chats()
            .into_iter()
            .map(|chat| chat.id)
            .collect::<Vec<_>>(),
        vec![chat_id!("4"), chat_id!("1"), chat_id!("2"), chat_id!("3")]
    );
    assert!(group_unread_matches_topics(&client, &chat_id!("1")));

    client.chats.select_chat(&chat_id!("1"));
    assert_eq!(
        client.chats.cursor().selected_topic_id,
        Some(topic_id!("1-important"))
    );

    Ok(())
}
