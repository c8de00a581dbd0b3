//! Observable application state, one store per concern.
//!
//! Stores own their state behind a mutex and hand out clones via
//! `snapshot()`. Async operations never hold a lock across an await point.

pub mod highlights;
pub mod history;
pub mod news_sources;
pub mod resource;
pub mod saved;
pub mod settings;

pub use highlights::{HighlightLimits, HighlightsState, HighlightsStore};
pub use history::SearchHistory;
pub use news_sources::{NewsSourcesState, NewsSourcesStore, NEWS_SITES_TTL};
pub use resource::{ListPhase, ListSettings, ListState, ResourceStore};
pub use saved::SavedItemsStore;
pub use settings::SettingsStore;
