// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::domain::shared::models::UserId;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// A chrono format string used for the timestamps of new messages.
    pub timestamp_format: String,
    /// The offset in which timestamps are rendered.
    pub utc_offset: FixedOffset,
    /// The sender recorded for own messages and reactions.
    pub self_user: UserId,
}

impl AppConfig {
    pub fn format_timestamp(&self, date: DateTime<Utc>) -> String {
        date.with_timezone(&self.utc_offset)
            .format(&self.timestamp_format)
            .to_string()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timestamp_format: "%H:%M".to_string(),
            utc_offset: *Local::now().offset(),
            self_user: UserId::own(),
        }
    }
}
