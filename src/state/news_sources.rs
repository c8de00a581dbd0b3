use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::cache::{keys, ExpiringStore};

pub const NEWS_SITES_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsSourcesState {
    pub news_sites: Vec<String>,
    pub selected_site: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Publisher names reported by the API, fetched once per session.
pub struct NewsSourcesStore {
    api: Arc<ApiClient>,
    cache: Arc<ExpiringStore>,
    ttl: Duration,
    state: Mutex<NewsSourcesState>,
}

impl NewsSourcesStore {
    pub fn new(api: Arc<ApiClient>, cache: Arc<ExpiringStore>, ttl: Duration) -> Self {
        Self {
            api,
            cache,
            ttl,
            state: Mutex::new(NewsSourcesState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, NewsSourcesState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> NewsSourcesState {
        self.state().clone()
    }

    /// No-op once a non-empty list is loaded or while a fetch is pending.
    pub async fn fetch_news_sites(&self) {
        {
            let mut state = self.state();
            if state.is_loading || !state.news_sites.is_empty() {
                debug!(
                    loading = state.is_loading,
                    loaded = state.news_sites.len(),
                    "news sites fetch skipped"
                );
                return;
            }
            state.is_loading = true;
            state.error = None;
        }

        match self.api.news_sites().await {
            Ok(mut sites) => {
                sites.sort();
                self.cache
                    .set_with_expiry_best_effort(keys::NEWS_SITES, &sites, self.ttl);
                info!(count = sites.len(), "fetched news sites");

                let mut state = self.state();
                state.news_sites = sites;
                state.is_loading = false;
            }
            Err(err) => {
                let cached: Option<Vec<String>> = self.cache.get_with_expiry(keys::NEWS_SITES);
                warn!(error = %err, cached = cached.is_some(), "news sites fetch failed");

                let mut state = self.state();
                state.news_sites = cached.unwrap_or_default();
                state.is_loading = false;
                state.error = Some(err.to_string());
            }
        }
    }

    pub fn news_sites(&self) -> Vec<String> {
        self.state().news_sites.clone()
    }

    pub fn select_site(&self, site: Option<String>) {
        self.state().selected_site = site;
    }

    pub fn selected_site(&self) -> Option<String> {
        self.state().selected_site.clone()
    }
}
