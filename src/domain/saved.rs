use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ContentItem, ContentType};

/// A bookmark: a frozen copy of the content as it looked when saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    pub saved_at: DateTime<Utc>,
    pub item: ContentItem,
}

impl SavedItem {
    pub fn new(item: ContentItem) -> Self {
        Self {
            saved_at: Utc::now(),
            item,
        }
    }

    pub fn id(&self) -> i64 {
        self.item.id()
    }

    pub fn content_type(&self) -> ContentType {
        self.item.content_type()
    }

    pub fn matches(&self, id: i64, content_type: ContentType) -> bool {
        self.id() == id && self.content_type() == content_type
    }
}
