use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    pub breaking_news: bool,
    pub featured_articles: bool,
    pub daily_digest: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            breaking_news: true,
            featured_articles: true,
            daily_digest: false,
        }
    }
}

/// Partial update for [`NotificationPreferences`]; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationPatch {
    pub breaking_news: Option<bool>,
    pub featured_articles: Option<bool>,
    pub daily_digest: Option<bool>,
}

impl NotificationPreferences {
    pub fn merged(self, patch: NotificationPatch) -> Self {
        Self {
            breaking_news: patch.breaking_news.unwrap_or(self.breaking_news),
            featured_articles: patch.featured_articles.unwrap_or(self.featured_articles),
            daily_digest: patch.daily_digest.unwrap_or(self.daily_digest),
        }
    }
}

/// User preferences persisted under the settings key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dark_mode: bool,
    pub use_system_theme: bool,
    pub offline_mode: bool,
    pub notifications: NotificationPreferences,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            use_system_theme: true,
            offline_mode: true,
            notifications: NotificationPreferences::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_blob_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"dark_mode": false}"#).unwrap();
        assert!(!settings.dark_mode);
        assert!(settings.use_system_theme);
        assert!(settings.notifications.breaking_news);
        assert!(!settings.notifications.daily_digest);
    }

    #[test]
    fn test_notification_patch_merges() {
        let prefs = NotificationPreferences::default().merged(NotificationPatch {
            daily_digest: Some(true),
            ..Default::default()
        });
        assert!(prefs.breaking_news);
        assert!(prefs.daily_digest);
    }
}
