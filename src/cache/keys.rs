//! Namespaced storage keys. Each store touches only its own keys.

pub const SAVED_ITEMS: &str = "@space_pulse/saved_items";
pub const CACHED_ARTICLES: &str = "@space_pulse/cached_articles";
pub const CACHED_BLOGS: &str = "@space_pulse/cached_blogs";
pub const CACHED_REPORTS: &str = "@space_pulse/cached_reports";
pub const CACHED_FEATURED: &str = "@space_pulse/cached_featured";
pub const LAST_OPENED_ARTICLE: &str = "@space_pulse/last_opened_article";
pub const NEWS_SITES: &str = "@space_pulse/news_sites";
pub const SETTINGS: &str = "@space_pulse/settings";
pub const SEARCH_HISTORY: &str = "@space_pulse/search_history";

/// Disposable entries dropped by "clear cache". Bookmarks and settings survive.
pub const DISPOSABLE: &[&str] = &[
    CACHED_ARTICLES,
    CACHED_BLOGS,
    CACHED_REPORTS,
    CACHED_FEATURED,
    LAST_OPENED_ARTICLE,
    SEARCH_HISTORY,
];
