use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::app::Result;
use crate::cache::{keys, ExpiringStore};
use crate::domain::{ContentItem, ContentType, SavedItem};

/// Bookmarks, newest first.
///
/// Mutations hold the state lock while persisting, so memory only changes
/// once storage has accepted the new set and concurrent callers serialize.
pub struct SavedItemsStore {
    cache: Arc<ExpiringStore>,
    items: Mutex<Vec<SavedItem>>,
}

impl SavedItemsStore {
    pub fn new(cache: Arc<ExpiringStore>) -> Self {
        Self {
            cache,
            items: Mutex::new(Vec::new()),
        }
    }

    fn items_guard(&self) -> MutexGuard<'_, Vec<SavedItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace memory with the persisted set. Absent or corrupt data loads empty.
    pub fn load(&self) {
        let loaded: Vec<SavedItem> = self.cache.get(keys::SAVED_ITEMS).unwrap_or_default();
        debug!(count = loaded.len(), "loaded saved items");
        *self.items_guard() = loaded;
    }

    pub fn is_saved(&self, id: i64, content_type: ContentType) -> bool {
        self.items_guard()
            .iter()
            .any(|saved| saved.matches(id, content_type))
    }

    /// Returns `Ok(false)` when the item was already saved.
    pub fn save(&self, item: ContentItem) -> Result<bool> {
        let mut items = self.items_guard();
        if items
            .iter()
            .any(|saved| saved.matches(item.id(), item.content_type()))
        {
            return Ok(false);
        }

        let entry = SavedItem::new(item);
        let mut next = Vec::with_capacity(items.len() + 1);
        next.push(entry);
        next.extend(items.iter().cloned());

        self.cache.set(keys::SAVED_ITEMS, &next)?;
        info!(id = next[0].id(), kind = %next[0].content_type(), "saved item");
        *items = next;
        Ok(true)
    }

    /// Returns `Ok(false)` without writing when nothing matched.
    pub fn remove(&self, id: i64, content_type: ContentType) -> Result<bool> {
        let mut items = self.items_guard();
        if !items.iter().any(|saved| saved.matches(id, content_type)) {
            return Ok(false);
        }

        let next: Vec<SavedItem> = items
            .iter()
            .filter(|saved| !saved.matches(id, content_type))
            .cloned()
            .collect();

        self.cache.set(keys::SAVED_ITEMS, &next)?;
        info!(id, kind = %content_type, "removed saved item");
        *items = next;
        Ok(true)
    }

    pub fn clear_all(&self) -> Result<()> {
        let mut items = self.items_guard();
        self.cache.try_remove(keys::SAVED_ITEMS)?;
        info!(count = items.len(), "cleared saved items");
        items.clear();
        Ok(())
    }

    pub fn by_type(&self, content_type: ContentType) -> Vec<SavedItem> {
        self.items_guard()
            .iter()
            .filter(|saved| saved.content_type() == content_type)
            .cloned()
            .collect()
    }

    pub fn items(&self) -> Vec<SavedItem> {
        self.items_guard().clone()
    }

    pub fn len(&self) -> usize {
        self.items_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items_guard().is_empty()
    }
}
