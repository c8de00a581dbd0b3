//! # Space Pulse
//!
//! Client-side caching and state layer for the Spaceflight News API.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → ApiClient → state stores → CLI
//!                           ↕
//!                  ExpiringStore → Store (SQLite)
//! ```
//!
//! Stores fetch paginated articles, blogs and reports, fall back to cached
//! snapshots when the network fails, and keep bookmarks and settings on disk.
//!
//! ## Quick Start
//!
//! ```bash
//! # Latest articles from one publisher
//! space-pulse articles --site NASA --pages 2
//!
//! # Home screen strips
//! space-pulse home
//!
//! # Bookmark an article
//! space-pulse save article 24113
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all stores
/// over one shared cache and API client.
pub mod app;

/// Upstream API access.
///
/// - [`Fetcher`](api::Fetcher): Async trait for raw GETs
/// - [`HttpFetcher`](api::HttpFetcher): reqwest-based implementation
/// - [`ApiClient`](api::ApiClient): Typed list, detail and info calls
pub mod api;

/// JSON cache with expiry over a [`Store`](store::Store).
pub mod cache;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from `~/.config/space-pulse/config.toml`.
pub mod config;

/// Content models, filters and the [`Resource`](domain::Resource) trait.
pub mod domain;

/// Observable stores: lists, highlights, bookmarks, news sources,
/// settings and search history.
pub mod state;

/// Persistent key-value backends.
///
/// - [`Store`](store::Store): Trait defining storage operations
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
/// - [`MemoryStore`](store::MemoryStore): In-memory implementation
pub mod store;
