// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::chats::models::{Roster, RosterError};

use super::roster_from_json;

const SCHOOL_ROSTER: &str = r#"{
  "chats": [
    {
      "id": "4",
      "name": "Папа Ковалёв Дмитрий",
      "last_message": "Здравствуйте! Я новый родитель...",
      "timestamp": "16:25",
      "unread": 1,
      "type": "private"
    },
    {
      "id": "1",
      "name": "Группа: Иванов Пётр",
      "last_message": "Домашнее задание выполнено",
      "timestamp": "14:23",
      "type": "group",
      "topics": [
        { "id": "1-important", "name": "Важное", "icon": "AlertCircle", "unread": 1 },
        { "id": "1-homework", "name": "Домашние задания", "icon": "BookOpen", "unread": 2 },
        { "id": "1-events", "name": "Мероприятия", "icon": "Calendar" }
      ]
    },
    {
      "id": "2",
      "name": "Мама Петрова Анна",
      "last_message": "Спасибо за информацию",
      "timestamp": "13:45",
      "type": "private"
    },
    {
      "id": "3",
      "name": "Группа: Смирнова Мария",
      "last_message": "Учитель математики: Отличная работа!",
      "timestamp": "Вчера",
      "type": "group",
      "topics": [
        { "id": "3-important", "name": "Важное", "icon": "AlertCircle" },
        { "id": "3-homework", "name": "Домашние задания", "icon": "BookOpen" }
      ]
    }
  ]
}"#;

/// The roster a session is seeded with when nothing else is configured.
pub fn school_roster() -> Result<Roster, RosterError> {
    roster_from_json(SCHOOL_ROSTER)
}
