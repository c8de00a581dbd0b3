pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ContentType;

/// Upper bound for `articles --since`, roughly a century.
pub const MAX_SINCE_DAYS: i64 = 36_500;

#[derive(Parser)]
#[command(name = "space-pulse")]
#[command(about = "Spaceflight news from the terminal", long_about = None)]
pub struct Cli {
    /// Database file (default: platform data dir)
    #[arg(long, global = true, conflicts_with = "ephemeral")]
    pub db: Option<PathBuf>,

    /// Keep everything in memory for this run
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List articles
    Articles {
        /// Only articles from this news site
        #[arg(long)]
        site: Option<String>,

        /// Only featured articles
        #[arg(long)]
        featured: bool,

        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,

        /// Only articles published in the last N days
        #[arg(
            long,
            value_name = "DAYS",
            value_parser = clap::value_parser!(i64).range(0..=MAX_SINCE_DAYS)
        )]
        since: Option<i64>,

        /// Number of pages to load
        #[arg(short, long, default_value_t = 1)]
        pages: usize,

        /// Pull-to-refresh semantics
        #[arg(long)]
        refresh: bool,
    },
    /// List blog posts
    Blogs {
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },
    /// List reports
    Reports {
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },
    /// Show a single item
    Show {
        /// article, blog or report
        kind: ContentType,
        id: i64,

        /// Open the source page in the browser
        #[arg(long)]
        open: bool,
    },
    /// Featured, trending and launch coverage
    Home,
    /// List news sources or pick one for article listings
    Sites {
        #[arg(long, conflicts_with = "clear")]
        select: Option<String>,

        #[arg(long)]
        clear: bool,
    },
    /// Bookmark an item
    Save { kind: ContentType, id: i64 },
    /// Remove a bookmark
    Unsave { kind: ContentType, id: i64 },
    /// List bookmarks
    Saved {
        #[arg(long, conflicts_with = "clear")]
        kind: Option<ContentType>,

        /// Remove every bookmark
        #[arg(long)]
        clear: bool,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
    /// Drop cached content and search history
    ClearCache,
    /// Recent searches
    History {
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    ToggleDark,
    ToggleSystem,
    ToggleOffline,
    /// Change notification preferences
    Notify {
        #[arg(long)]
        breaking_news: Option<bool>,

        #[arg(long)]
        featured_articles: Option<bool>,

        #[arg(long)]
        daily_digest: Option<bool>,
    },
}
