use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::info;

use crate::app::Result;
use crate::cache::{keys, ExpiringStore};
use crate::domain::{NotificationPatch, Settings};

pub struct SettingsStore {
    cache: Arc<ExpiringStore>,
    settings: Mutex<Settings>,
}

impl SettingsStore {
    pub fn new(cache: Arc<ExpiringStore>) -> Self {
        Self {
            cache,
            settings: Mutex::new(Settings::default()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Settings> {
        self.settings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Missing or unreadable settings load as defaults.
    pub fn load(&self) -> Settings {
        let loaded: Settings = self.cache.get(keys::SETTINGS).unwrap_or_default();
        *self.guard() = loaded;
        loaded
    }

    pub fn get(&self) -> Settings {
        *self.guard()
    }

    fn update(&self, change: impl FnOnce(&mut Settings)) -> Result<Settings> {
        let mut current = self.guard();
        let mut next = *current;
        change(&mut next);

        self.cache.set(keys::SETTINGS, &next)?;
        *current = next;
        Ok(next)
    }

    pub fn toggle_dark_mode(&self) -> Result<Settings> {
        self.update(|s| s.dark_mode = !s.dark_mode)
    }

    pub fn toggle_system_theme(&self) -> Result<Settings> {
        self.update(|s| s.use_system_theme = !s.use_system_theme)
    }

    pub fn toggle_offline_mode(&self) -> Result<Settings> {
        self.update(|s| s.offline_mode = !s.offline_mode)
    }

    pub fn update_notifications(&self, patch: NotificationPatch) -> Result<Settings> {
        self.update(|s| s.notifications = s.notifications.merged(patch))
    }

    /// Drop cached content and search history. Bookmarks and settings stay.
    pub fn clear_cache(&self) {
        self.cache.clear(keys::DISPOSABLE);
        info!(keys = keys::DISPOSABLE.len(), "cleared cache");
    }
}
