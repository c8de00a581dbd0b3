//! Home-screen article strips: featured, trending and launch coverage.
//!
//! Strips never surface errors. A failed fetch leaves the strip empty,
//! except featured, which falls back to its cached copy.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::api::{ApiClient, ListQuery};
use crate::cache::{keys, ExpiringStore, DEFAULT_TTL};
use crate::domain::Article;

pub const TRENDING_TOPICS: &str = "SpaceX,NASA,Starship,Falcon,Artemis,ISS,Mars,Moon";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightLimits {
    pub featured: usize,
    pub trending: usize,
    pub launches: usize,
    pub featured_ttl: Duration,
}

impl Default for HighlightLimits {
    fn default() -> Self {
        Self {
            featured: 5,
            trending: 8,
            launches: 10,
            featured_ttl: DEFAULT_TTL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strip {
    Featured,
    Trending,
    Launches,
}

impl Strip {
    fn name(self) -> &'static str {
        match self {
            Strip::Featured => "featured",
            Strip::Trending => "trending",
            Strip::Launches => "launches",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HighlightsState {
    pub featured: Vec<Article>,
    pub trending: Vec<Article>,
    pub launches: Vec<Article>,
    pub is_featured_loading: bool,
    pub is_trending_loading: bool,
    pub is_launch_loading: bool,
}

impl HighlightsState {
    fn busy_flag(&mut self, strip: Strip) -> &mut bool {
        match strip {
            Strip::Featured => &mut self.is_featured_loading,
            Strip::Trending => &mut self.is_trending_loading,
            Strip::Launches => &mut self.is_launch_loading,
        }
    }

    fn items_mut(&mut self, strip: Strip) -> &mut Vec<Article> {
        match strip {
            Strip::Featured => &mut self.featured,
            Strip::Trending => &mut self.trending,
            Strip::Launches => &mut self.launches,
        }
    }
}

pub struct HighlightsStore {
    api: Arc<ApiClient>,
    cache: Arc<ExpiringStore>,
    limits: HighlightLimits,
    state: Mutex<HighlightsState>,
}

impl HighlightsStore {
    pub fn new(api: Arc<ApiClient>, cache: Arc<ExpiringStore>, limits: HighlightLimits) -> Self {
        Self {
            api,
            cache,
            limits,
            state: Mutex::new(HighlightsState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, HighlightsState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> HighlightsState {
        self.state().clone()
    }

    fn query_for(&self, strip: Strip) -> ListQuery {
        match strip {
            Strip::Featured => ListQuery::page(self.limits.featured, 0).with("is_featured", true),
            Strip::Trending => {
                ListQuery::page(self.limits.trending, 0).with("title_contains_one", TRENDING_TOPICS)
            }
            Strip::Launches => ListQuery::page(self.limits.launches, 0).with("has_launch", true),
        }
    }

    pub async fn fetch_featured(&self) {
        self.fetch(Strip::Featured).await
    }

    pub async fn fetch_trending(&self) {
        self.fetch(Strip::Trending).await
    }

    pub async fn fetch_launches(&self) {
        self.fetch(Strip::Launches).await
    }

    async fn fetch(&self, strip: Strip) {
        {
            let mut state = self.state();
            let busy = state.busy_flag(strip);
            if *busy {
                debug!(strip = strip.name(), "strip fetch already in flight");
                return;
            }
            *busy = true;
        }

        let items = match self.api.list::<Article>(&self.query_for(strip)).await {
            Ok(page) => {
                info!(strip = strip.name(), count = page.results.len(), "fetched strip");
                if strip == Strip::Featured {
                    self.cache.set_with_expiry_best_effort(
                        keys::CACHED_FEATURED,
                        &page.results,
                        self.limits.featured_ttl,
                    );
                }
                page.results
            }
            Err(err) => {
                warn!(strip = strip.name(), error = %err, "strip fetch failed");
                match strip {
                    Strip::Featured => self
                        .cache
                        .get_with_expiry(keys::CACHED_FEATURED)
                        .unwrap_or_default(),
                    Strip::Trending | Strip::Launches => Vec::new(),
                }
            }
        };

        let mut state = self.state();
        *state.items_mut(strip) = items;
        *state.busy_flag(strip) = false;
    }
}
