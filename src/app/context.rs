use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{ApiClient, Fetcher, HttpFetcher};
use crate::app::error::{PulseError, Result};
use crate::cache::{Clock, ExpiringStore, SystemClock};
use crate::config::Config;
use crate::domain::{Article, ArticleFilter, Blog, Report};
use crate::state::{
    HighlightsStore, NewsSourcesStore, ResourceStore, SavedItemsStore, SearchHistory,
    SettingsStore,
};
use crate::store::{MemoryStore, SqliteStore, Store};

/// Owns every store for the lifetime of the process.
pub struct AppContext {
    pub config: Config,
    pub cache: Arc<ExpiringStore>,
    pub api: Arc<ApiClient>,
    pub articles: ResourceStore<Article>,
    pub blogs: ResourceStore<Blog>,
    pub reports: ResourceStore<Report>,
    pub highlights: HighlightsStore,
    pub saved: SavedItemsStore,
    pub news_sources: NewsSourcesStore,
    pub settings: SettingsStore,
    pub history: Arc<SearchHistory>,
}

impl AppContext {
    pub fn new(config: Config, db_path: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        let store = Arc::new(SqliteStore::new(&db_path)?);
        let fetcher = Self::http_fetcher(&config)?;
        Ok(Self::with_parts(config, store, fetcher, Arc::new(SystemClock)))
    }

    /// Nothing is written to disk; bookmarks and caches vanish on exit.
    pub fn ephemeral(config: Config) -> Result<Self> {
        let fetcher = Self::http_fetcher(&config)?;
        Ok(Self::with_parts(
            config,
            Arc::new(MemoryStore::new()),
            fetcher,
            Arc::new(SystemClock),
        ))
    }

    pub fn with_parts(
        config: Config,
        store: Arc<dyn Store>,
        fetcher: Arc<dyn Fetcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let cache = Arc::new(ExpiringStore::with_clock(store, clock));
        let api = Arc::new(ApiClient::new(fetcher));
        let history = Arc::new(SearchHistory::new(cache.clone()));
        let list_settings = config.list_settings();

        let articles = ResourceStore::new(api.clone(), cache.clone(), list_settings)
            .with_history(history.clone());
        let blogs = ResourceStore::new(api.clone(), cache.clone(), list_settings)
            .with_history(history.clone());
        let reports = ResourceStore::new(api.clone(), cache.clone(), list_settings)
            .with_history(history.clone());
        let highlights =
            HighlightsStore::new(api.clone(), cache.clone(), config.highlight_limits());
        let news_sources =
            NewsSourcesStore::new(api.clone(), cache.clone(), config.cache.news_sites_ttl());

        let saved = SavedItemsStore::new(cache.clone());
        saved.load();
        let settings = SettingsStore::new(cache.clone());
        settings.load();

        Self {
            config,
            cache,
            api,
            articles,
            blogs,
            reports,
            highlights,
            saved,
            news_sources,
            settings,
            history,
        }
    }

    /// Push the selected news source into the article filters.
    pub fn apply_selected_site(&self) {
        let site = self.news_sources.selected_site();
        self.articles.set_filters([ArticleFilter::NewsSite(site)]);
    }

    pub fn clear_cache(&self) {
        self.settings.clear_cache();
        self.history.invalidate();
    }

    fn http_fetcher(config: &Config) -> Result<Arc<dyn Fetcher>> {
        let fetcher = HttpFetcher::with_options(
            &config.api.base_url,
            config.api.timeout(),
            &config.api.user_agent,
        )?;
        Ok(Arc::new(fetcher))
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| PulseError::Config("Could not find data directory".into()))?;
        let app_dir = data_dir.join("space-pulse");
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("space-pulse.db"))
    }
}
