use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::cache::{keys, ExpiringStore};

pub const MAX_ENTRIES: usize = 10;

/// Recent search queries, newest first, without duplicates.
pub struct SearchHistory {
    cache: Arc<ExpiringStore>,
    entries: Mutex<Option<Vec<String>>>,
}

impl SearchHistory {
    pub fn new(cache: Arc<ExpiringStore>) -> Self {
        Self {
            cache,
            entries: Mutex::new(None),
        }
    }

    fn entries(&self) -> MutexGuard<'_, Option<Vec<String>>> {
        let mut guard = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.is_none() {
            *guard = Some(self.cache.get(keys::SEARCH_HISTORY).unwrap_or_default());
        }
        guard
    }

    /// Blank queries are ignored. Re-running a query moves it to the front.
    pub fn record(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let mut guard = self.entries();
        let entries = guard.get_or_insert_with(Vec::new);
        entries.retain(|q| !q.eq_ignore_ascii_case(query));
        entries.insert(0, query.to_string());
        entries.truncate(MAX_ENTRIES);

        debug!(query, len = entries.len(), "recorded search");
        self.cache.set_best_effort(keys::SEARCH_HISTORY, &*entries);
    }

    pub fn recent(&self) -> Vec<String> {
        self.entries().clone().unwrap_or_default()
    }

    pub fn clear(&self) {
        *self.entries() = Some(Vec::new());
        self.cache.remove(keys::SEARCH_HISTORY);
    }

    /// Drop the in-memory copy so the next read goes back to storage.
    pub fn invalidate(&self) {
        *self.entries.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
