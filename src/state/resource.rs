//! Paginated list + detail state for one content resource.
//!
//! Each busy flag admits one in-flight operation of its kind; a second
//! call while the first is pending returns immediately instead of queueing.
//! Flags are checked and raised under the state mutex, which is never held
//! across an `.await`.
//!
//! Every completed first-page fetch (and every reset) bumps a list
//! generation. A page requested by `load_more` under an older generation
//! belongs to a list that no longer exists and is dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::api::{ApiClient, ListQuery};
use crate::cache::{ExpiringStore, DEFAULT_TTL};
use crate::domain::{Filters, Resource};
use crate::state::history::SearchHistory;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_SNAPSHOT_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSettings {
    pub page_size: usize,
    /// How many leading items a successful first-page fetch caches.
    pub snapshot_size: usize,
    pub snapshot_ttl: Duration,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            snapshot_size: DEFAULT_SNAPSHOT_SIZE,
            snapshot_ttl: DEFAULT_TTL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Refreshing,
    LoadingMore,
    Loaded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ListState<R: Resource> {
    pub items: Vec<R>,
    pub current: Option<R>,
    pub offset: usize,
    pub has_more: bool,
    pub total_count: u64,
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub is_loading_more: bool,
    pub is_detail_loading: bool,
    pub error: Option<String>,
    /// Failure of the last [`ResourceStore::fetch_detail`]; list errors stay in `error`.
    pub detail_error: Option<String>,
    pub filters: R::Filters,
    loaded: bool,
    generation: u64,
}

impl<R: Resource> Default for ListState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            offset: 0,
            has_more: true,
            total_count: 0,
            is_loading: false,
            is_refreshing: false,
            is_loading_more: false,
            is_detail_loading: false,
            error: None,
            detail_error: None,
            filters: R::Filters::default(),
            loaded: false,
            generation: 0,
        }
    }
}

impl<R: Resource> ListState<R> {
    fn finish_list_fetch(&mut self, refresh: bool) {
        self.generation = self.generation.wrapping_add(1);
        if refresh {
            self.is_refreshing = false;
        } else {
            self.is_loading = false;
        }
    }

    pub fn phase(&self) -> ListPhase {
        if self.is_loading {
            ListPhase::Loading
        } else if self.is_refreshing {
            ListPhase::Refreshing
        } else if self.is_loading_more {
            ListPhase::LoadingMore
        } else if self.error.is_some() {
            ListPhase::Failed
        } else if self.loaded {
            ListPhase::Loaded
        } else {
            ListPhase::Idle
        }
    }
}

pub struct ResourceStore<R: Resource> {
    api: Arc<ApiClient>,
    cache: Arc<ExpiringStore>,
    settings: ListSettings,
    history: Option<Arc<SearchHistory>>,
    state: Mutex<ListState<R>>,
}

impl<R: Resource> ResourceStore<R> {
    pub fn new(api: Arc<ApiClient>, cache: Arc<ExpiringStore>, settings: ListSettings) -> Self {
        Self {
            api,
            cache,
            settings,
            history: None,
            state: Mutex::new(ListState::default()),
        }
    }

    /// Record non-empty searches in `history`.
    pub fn with_history(mut self, history: Arc<SearchHistory>) -> Self {
        self.history = Some(history);
        self
    }

    fn state(&self) -> MutexGuard<'_, ListState<R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ListState<R> {
        self.state().clone()
    }

    pub fn filters(&self) -> R::Filters {
        self.state().filters.clone()
    }

    fn first_page_query(&self, filters: &R::Filters) -> ListQuery {
        let mut query = ListQuery::page(self.settings.page_size, 0);
        filters.apply(&mut query);
        query
    }

    /// Fetch the first page under the current filters, replacing the list.
    ///
    /// On failure the last cached snapshot (if still fresh) is shown
    /// alongside the error; pagination stays closed until a live fetch
    /// succeeds.
    pub async fn fetch_list(&self, refresh: bool) {
        let filters = {
            let mut state = self.state();
            if (!refresh && state.is_loading) || (refresh && state.is_refreshing) {
                debug!(resource = %R::KIND, refresh, "list fetch already in flight");
                return;
            }
            if refresh {
                state.is_refreshing = true;
            } else {
                state.is_loading = true;
            }
            state.error = None;
            state.filters.clone()
        };

        let query = self.first_page_query(&filters);
        match self.api.list::<R>(&query).await {
            Ok(page) => {
                let keep = page.results.len().min(self.settings.snapshot_size);
                self.cache.set_with_expiry_best_effort(
                    R::SNAPSHOT_KEY,
                    &page.results[..keep],
                    self.settings.snapshot_ttl,
                );
                info!(
                    resource = %R::KIND,
                    count = page.results.len(),
                    total = page.count,
                    "fetched first page"
                );

                let mut state = self.state();
                state.has_more = page.has_next();
                state.total_count = page.count;
                state.items = page.results;
                state.offset = self.settings.page_size;
                state.loaded = true;
                state.finish_list_fetch(refresh);
            }
            Err(err) => {
                let cached: Option<Vec<R>> = self.cache.get_with_expiry(R::SNAPSHOT_KEY);
                warn!(
                    resource = %R::KIND,
                    error = %err,
                    cached = cached.as_ref().map(Vec::len).unwrap_or(0),
                    "list fetch failed"
                );

                let mut state = self.state();
                let items = cached.unwrap_or_default();
                state.offset = items.len();
                state.items = items;
                state.has_more = false;
                state.error = Some(err.to_string());
                state.finish_list_fetch(refresh);
            }
        }
    }

    /// Append the page at the current offset. Items are not deduplicated.
    ///
    /// If a first-page fetch lands while the page is in flight, the page is
    /// discarded and the replaced list keeps its own cursor.
    pub async fn load_more(&self) {
        let (offset, filters, generation) = {
            let mut state = self.state();
            if state.is_loading_more || !state.has_more {
                debug!(resource = %R::KIND, has_more = state.has_more, "load more skipped");
                return;
            }
            state.is_loading_more = true;
            (state.offset, state.filters.clone(), state.generation)
        };

        let mut query = ListQuery::page(self.settings.page_size, offset);
        filters.apply(&mut query);

        let result = self.api.list::<R>(&query).await;
        let mut state = self.state();
        state.is_loading_more = false;
        if state.generation != generation {
            debug!(resource = %R::KIND, offset, "list replaced during load more, dropping page");
            return;
        }

        match result {
            Ok(page) => {
                debug!(resource = %R::KIND, offset, count = page.results.len(), "fetched page");
                state.has_more = page.has_next();
                state.total_count = page.count;
                state.items.extend(page.results);
                state.offset = offset + self.settings.page_size;
            }
            Err(err) => {
                warn!(resource = %R::KIND, offset, error = %err, "load more failed");
                state.error = Some(err.to_string());
            }
        }
    }

    /// Fetch one item into the detail slot. Independent of the list,
    /// including its `error`.
    pub async fn fetch_detail(&self, id: i64) {
        {
            let mut state = self.state();
            state.is_detail_loading = true;
            state.detail_error = None;
        }

        match self.api.detail::<R>(id).await {
            Ok(item) => {
                if let Some(key) = R::LAST_OPENED_KEY {
                    self.cache.set_best_effort(key, &item);
                }
                let mut state = self.state();
                state.current = Some(item);
                state.is_detail_loading = false;
            }
            Err(err) => {
                warn!(resource = %R::KIND, id, error = %err, "detail fetch failed");
                let mut state = self.state();
                state.is_detail_loading = false;
                state.detail_error = Some(err.to_string());
            }
        }
    }

    /// The last detail persisted by [`fetch_detail`](Self::fetch_detail), if any.
    pub fn last_opened(&self) -> Option<R> {
        R::LAST_OPENED_KEY.and_then(|key| self.cache.get(key))
    }

    /// Set the free-text filter (blank clears it) and refetch from offset 0.
    pub async fn search(&self, query: &str) {
        let query = query.trim();
        {
            let mut state = self.state();
            state
                .filters
                .set_search((!query.is_empty()).then(|| query.to_string()));
        }
        if let Some(ref history) = self.history {
            history.record(query);
        }
        self.fetch_list(false).await;
    }

    /// Patch filters without fetching; the caller follows up with
    /// [`fetch_list`](Self::fetch_list).
    pub fn set_filters(&self, patches: impl IntoIterator<Item = <R::Filters as Filters>::Patch>) {
        let mut state = self.state();
        for patch in patches {
            state.filters.apply_patch(patch);
        }
    }

    pub fn clear_filters(&self) {
        self.state().filters = R::Filters::default();
    }

    /// Back to the initial state. An in-flight `load_more` keeps its busy
    /// flag until it returns, and its page is dropped.
    pub fn reset(&self) {
        let mut state = self.state();
        let generation = state.generation.wrapping_add(1);
        let is_loading_more = state.is_loading_more;
        *state = ListState::default();
        state.generation = generation;
        state.is_loading_more = is_loading_more;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{article_json, failing, page_body, paged, ScriptedFetcher};
    use crate::api::ApiError;
    use crate::cache::{keys, ManualClock};
    use crate::domain::{Article, ArticleFilter, ArticleFilters, Blog, Report};
    use crate::store::{MemoryStore, Store};

    struct Harness {
        fetcher: Arc<ScriptedFetcher>,
        clock: Arc<ManualClock>,
        cache: Arc<ExpiringStore>,
        backend: Arc<MemoryStore>,
    }

    impl Harness {
        fn new(fetcher: ScriptedFetcher) -> Self {
            let backend = Arc::new(MemoryStore::new());
            let clock = Arc::new(ManualClock::new(1_000_000));
            let cache = Arc::new(ExpiringStore::with_clock(backend.clone(), clock.clone()));
            Self {
                fetcher: Arc::new(fetcher),
                clock,
                cache,
                backend,
            }
        }

        fn store<R: Resource>(&self) -> ResourceStore<R> {
            let api = Arc::new(ApiClient::new(self.fetcher.clone()));
            ResourceStore::new(api, self.cache.clone(), ListSettings::default())
        }
    }

    #[tokio::test]
    async fn test_fetch_list_replaces_items_and_sets_cursor() {
        let h = Harness::new(ScriptedFetcher::new(paged(45)));
        let store = h.store::<Article>();

        store.fetch_list(false).await;

        let state = store.snapshot();
        assert_eq!(state.items.len(), 20);
        assert_eq!(state.offset, 20);
        assert!(state.has_more);
        assert_eq!(state.total_count, 45);
        assert_eq!(state.error, None);
        assert_eq!(state.phase(), ListPhase::Loaded);

        let request = &h.fetcher.requests()[0];
        assert_eq!(request.param("offset"), Some("0"));
        assert_eq!(request.param("limit"), Some("20"));
        assert_eq!(request.param("ordering"), Some("-published_at"));
    }

    #[tokio::test]
    async fn test_load_more_advances_offset_by_page_size() {
        let h = Harness::new(ScriptedFetcher::new(paged(45)));
        let store = h.store::<Blog>();
        store.fetch_list(false).await;

        let mut last_offset = store.snapshot().offset;
        let mut last_len = store.snapshot().items.len();
        while store.snapshot().has_more {
            store.load_more().await;
            let state = store.snapshot();
            assert_eq!(state.offset, last_offset + DEFAULT_PAGE_SIZE);
            assert!(state.items.len() >= last_len);
            last_offset = state.offset;
            last_len = state.items.len();
        }

        let state = store.snapshot();
        assert_eq!(state.items.len(), 45);
        assert_eq!(state.offset, 60);
        assert_eq!(h.fetcher.requests()[2].param("offset"), Some("40"));
    }

    #[tokio::test]
    async fn test_load_more_is_noop_without_more_pages() {
        let h = Harness::new(ScriptedFetcher::new(paged(5)));
        let store = h.store::<Report>();
        store.fetch_list(false).await;
        assert!(!store.snapshot().has_more);

        store.load_more().await;
        assert_eq!(h.fetcher.request_count(), 1);
        assert_eq!(store.snapshot().offset, 20);
    }

    #[tokio::test]
    async fn test_load_more_keeps_upstream_duplicates() {
        let fetcher = ScriptedFetcher::new(|request| {
            // Upstream shifted by one between pages: item 20 shows up twice.
            let offset: i64 = request.param("offset").unwrap().parse().unwrap();
            let start = if offset == 0 { 1 } else { offset };
            let results = (start..start + 20).map(|id| article_json(id, "NASA")).collect();
            Ok(page_body(results, 100, true))
        });
        let h = Harness::new(fetcher);
        let store = h.store::<Article>();

        store.fetch_list(false).await;
        store.load_more().await;

        let ids: Vec<i64> = store.snapshot().items.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), 40);
        assert_eq!(ids.iter().filter(|&&id| id == 20).count(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_fetch_list_issues_one_request() {
        let (fetcher, gate) = ScriptedFetcher::gated(paged(30));
        let h = Harness::new(fetcher);
        let store = Arc::new(h.store::<Article>());

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_list(false).await }
        });
        h.fetcher.wait_for_requests(1).await;
        assert_eq!(store.snapshot().phase(), ListPhase::Loading);

        // Rejected while the first is parked.
        store.fetch_list(false).await;
        assert_eq!(h.fetcher.request_count(), 1);

        gate.add_permits(1);
        first.await.unwrap();

        assert_eq!(h.fetcher.request_count(), 1);
        assert_eq!(store.snapshot().items.len(), 20);
        assert!(!store.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_concurrent_load_more_issues_one_request() {
        let (fetcher, gate) = ScriptedFetcher::gated(paged(100));
        let h = Harness::new(fetcher);
        let store = Arc::new(h.store::<Article>());

        gate.add_permits(1);
        store.fetch_list(false).await;

        let more = tokio::spawn({
            let store = store.clone();
            async move { store.load_more().await }
        });
        h.fetcher.wait_for_requests(2).await;
        assert_eq!(store.snapshot().phase(), ListPhase::LoadingMore);

        store.load_more().await;
        assert_eq!(h.fetcher.request_count(), 2);

        gate.add_permits(1);
        more.await.unwrap();
        assert_eq!(store.snapshot().items.len(), 40);
        assert_eq!(store.snapshot().offset, 40);
    }

    #[tokio::test]
    async fn test_refresh_proceeds_while_loading() {
        let (fetcher, gate) = ScriptedFetcher::gated(paged(30));
        let h = Harness::new(fetcher);
        let store = Arc::new(h.store::<Article>());

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_list(false).await }
        });
        h.fetcher.wait_for_requests(1).await;

        let refresh = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_list(true).await }
        });
        h.fetcher.wait_for_requests(2).await;
        assert!(store.snapshot().is_refreshing);

        gate.add_permits(2);
        first.await.unwrap();
        refresh.await.unwrap();

        let state = store.snapshot();
        assert!(!state.is_loading);
        assert!(!state.is_refreshing);
        assert_eq!(state.items.len(), 20);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_cached_snapshot() {
        let h = Harness::new(ScriptedFetcher::new(paged(45)));
        let store = h.store::<Article>();
        store.fetch_list(false).await;
        let cached_ids: Vec<i64> = store.snapshot().items.iter().map(|a| a.id).collect();

        h.fetcher.respond_with(failing(ApiError::Server(503)));
        store.reset();
        store.fetch_list(false).await;

        let state = store.snapshot();
        let ids: Vec<i64> = state.items.iter().map(|a| a.id).collect();
        assert_eq!(ids, cached_ids);
        assert_eq!(state.error.as_deref(), Some("Server error. Please try again later."));
        assert!(!state.has_more);
        assert_eq!(state.phase(), ListPhase::Failed);

        // Pagination is closed on the fallback list.
        store.load_more().await;
        assert_eq!(h.fetcher.request_count(), 2);
    }

    #[tokio::test]
    async fn test_failure_without_cache_empties_list() {
        let h = Harness::new(ScriptedFetcher::new(paged(45)));
        let store = h.store::<Article>();
        store.fetch_list(false).await;

        h.clock.advance(DEFAULT_TTL + Duration::from_millis(1));
        h.fetcher.respond_with(failing(ApiError::Network));
        store.fetch_list(true).await;

        let state = store.snapshot();
        assert!(state.items.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("Network error. Please check your internet connection.")
        );
        assert!(h.backend.get(keys::CACHED_ARTICLES).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_snapshot_is_capped() {
        let h = Harness::new(ScriptedFetcher::new(paged(100)));
        let api = Arc::new(ApiClient::new(h.fetcher.clone()));
        let settings = ListSettings {
            page_size: 50,
            snapshot_size: 20,
            snapshot_ttl: DEFAULT_TTL,
        };
        let store: ResourceStore<Article> = ResourceStore::new(api, h.cache.clone(), settings);

        store.fetch_list(false).await;
        assert_eq!(store.snapshot().items.len(), 50);

        let cached: Vec<Article> = h.cache.get_with_expiry(keys::CACHED_ARTICLES).unwrap();
        assert_eq!(cached.len(), 20);
        assert_eq!(cached[0].id, 1);
    }

    #[tokio::test]
    async fn test_filters_apply_to_next_fetch_only() {
        let h = Harness::new(ScriptedFetcher::new(paged(45)));
        let store = h.store::<Article>();

        store.set_filters([ArticleFilter::NewsSite(Some("NASA".into()))]);
        store.fetch_list(false).await;
        store.load_more().await;
        assert_eq!(store.snapshot().offset, 40);

        store.set_filters([ArticleFilter::Featured(Some(true))]);
        // Mutating filters alone neither fetches nor moves the cursor.
        assert_eq!(h.fetcher.request_count(), 2);
        assert_eq!(store.snapshot().offset, 40);

        store.fetch_list(false).await;

        let request = h.fetcher.requests().pop().unwrap();
        assert_eq!(request.param("news_site"), Some("NASA"));
        assert_eq!(request.param("is_featured"), Some("true"));
        assert_eq!(request.param("offset"), Some("0"));

        let state = store.snapshot();
        assert_eq!(state.items.len(), 20);
        assert_eq!(state.offset, 20);
    }

    #[tokio::test]
    async fn test_load_more_keeps_filters() {
        let h = Harness::new(ScriptedFetcher::new(paged(45)));
        let store = h.store::<Article>();
        store.set_filters([ArticleFilter::HasLaunch(Some(true))]);

        store.fetch_list(false).await;
        store.load_more().await;

        let request = h.fetcher.requests().pop().unwrap();
        assert_eq!(request.param("has_launch"), Some("true"));
        assert_eq!(request.param("offset"), Some("20"));
    }

    #[tokio::test]
    async fn test_clear_filters() {
        let h = Harness::new(ScriptedFetcher::new(paged(5)));
        let store = h.store::<Article>();
        store.set_filters([
            ArticleFilter::NewsSite(Some("ESA".into())),
            ArticleFilter::Search(Some("moon".into())),
        ]);
        store.clear_filters();
        assert_eq!(store.filters(), ArticleFilters::default());
    }

    #[tokio::test]
    async fn test_search_sets_filter_and_refetches() {
        let h = Harness::new(ScriptedFetcher::new(paged(45)));
        let history = Arc::new(SearchHistory::new(h.cache.clone()));
        let store = h.store::<Blog>().with_history(history.clone());

        store.search(" artemis ").await;
        assert_eq!(h.fetcher.requests()[0].param("search"), Some("artemis"));
        assert_eq!(store.snapshot().offset, 20);
        assert_eq!(history.recent(), vec!["artemis".to_string()]);

        store.search("").await;
        assert_eq!(h.fetcher.requests()[1].param("search"), None);
        assert_eq!(store.filters().search, None);
        assert_eq!(history.recent().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_detail_leaves_list_alone() {
        let h = Harness::new(ScriptedFetcher::new(paged(45)));
        let store = h.store::<Article>();
        store.fetch_list(false).await;

        h.fetcher
            .respond_with(|_| Ok(serde_json::to_vec(&article_json(99, "ESA")).unwrap()));
        store.fetch_detail(99).await;

        let state = store.snapshot();
        assert_eq!(state.current.as_ref().map(|a| a.id), Some(99));
        assert_eq!(state.offset, 20);
        assert!(state.has_more);
        assert_eq!(state.items.len(), 20);
        assert_eq!(h.fetcher.requests()[1].path, "articles/99/");
        assert_eq!(store.last_opened().map(|a| a.id), Some(99));
    }

    #[tokio::test]
    async fn test_fetch_detail_failure_records_error() {
        let h = Harness::new(ScriptedFetcher::new(failing(ApiError::NotFound)));
        let store = h.store::<Report>();

        store.fetch_detail(5).await;

        let state = store.snapshot();
        assert!(state.current.is_none());
        assert!(!state.is_detail_loading);
        assert_eq!(state.detail_error.as_deref(), Some("Content not found."));
        assert_eq!(state.error, None);
        // Reports do not remember a last-opened item.
        assert!(store.last_opened().is_none());
    }

    #[tokio::test]
    async fn test_fetch_detail_keeps_list_error() {
        let h = Harness::new(ScriptedFetcher::new(failing(ApiError::Server(503))));
        let store = h.store::<Article>();
        store.fetch_list(false).await;
        assert_eq!(store.snapshot().phase(), ListPhase::Failed);

        h.fetcher
            .respond_with(|_| Ok(serde_json::to_vec(&article_json(7, "NASA")).unwrap()));
        store.fetch_detail(7).await;

        let state = store.snapshot();
        assert_eq!(state.current.as_ref().map(|a| a.id), Some(7));
        assert_eq!(state.detail_error, None);
        assert_eq!(state.error.as_deref(), Some("Server error. Please try again later."));
        assert_eq!(state.phase(), ListPhase::Failed);
    }

    #[tokio::test]
    async fn test_load_more_drops_page_after_refresh() {
        let (fetcher, gate) = ScriptedFetcher::gated(paged(200));
        let h = Harness::new(fetcher);
        let store = Arc::new(h.store::<Article>());

        gate.add_permits(3);
        store.fetch_list(false).await;
        store.load_more().await;
        store.load_more().await;
        assert_eq!(store.snapshot().offset, 60);

        let refresh = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_list(true).await }
        });
        h.fetcher.wait_for_requests(4).await;

        let more = tokio::spawn({
            let store = store.clone();
            async move { store.load_more().await }
        });
        h.fetcher.wait_for_requests(5).await;
        assert_eq!(h.fetcher.requests()[4].param("offset"), Some("60"));

        // The gate is FIFO: the refresh lands first, then the stale page.
        gate.add_permits(1);
        refresh.await.unwrap();
        gate.add_permits(1);
        more.await.unwrap();

        let state = store.snapshot();
        let ids: Vec<i64> = state.items.iter().map(|a| a.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<i64>>());
        assert_eq!(state.offset, 20);
        assert!(!state.is_loading_more);
        assert_eq!(state.phase(), ListPhase::Loaded);

        // Pagination resumes from the refreshed cursor.
        gate.add_permits(1);
        store.load_more().await;
        let state = store.snapshot();
        assert_eq!(h.fetcher.requests()[5].param("offset"), Some("20"));
        assert_eq!(state.items.len(), 40);
        assert_eq!(state.items[20].id, 21);
    }

    #[tokio::test]
    async fn test_load_more_drops_page_after_reset() {
        let (fetcher, gate) = ScriptedFetcher::gated(paged(100));
        let h = Harness::new(fetcher);
        let store = Arc::new(h.store::<Article>());

        gate.add_permits(1);
        store.fetch_list(false).await;

        let more = tokio::spawn({
            let store = store.clone();
            async move { store.load_more().await }
        });
        h.fetcher.wait_for_requests(2).await;
        store.reset();
        assert_eq!(store.snapshot().phase(), ListPhase::LoadingMore);

        gate.add_permits(1);
        more.await.unwrap();

        let state = store.snapshot();
        assert!(state.items.is_empty());
        assert_eq!(state.offset, 0);
        assert_eq!(state.phase(), ListPhase::Idle);
    }

    #[tokio::test]
    async fn test_reset_restores_initial_state() {
        let h = Harness::new(ScriptedFetcher::new(paged(45)));
        let store = h.store::<Article>();
        store.set_filters([ArticleFilter::Featured(Some(true))]);
        store.fetch_list(false).await;

        store.reset();
        let state = store.snapshot();
        assert!(state.items.is_empty());
        assert_eq!(state.offset, 0);
        assert!(state.has_more);
        assert_eq!(state.phase(), ListPhase::Idle);
        assert_eq!(state.filters, ArticleFilters::default());
    }
}
