use chrono::{DateTime, TimeDelta, Utc};

use crate::app::{AppContext, PulseError, Result};
use crate::cli::SettingsAction;
use crate::domain::{
    Article, ArticleFilter, ContentItem, ContentType, Filters, NotificationPatch, Resource,
    Settings,
};
use crate::state::ResourceStore;

pub struct ArticleListOptions {
    pub site: Option<String>,
    pub featured: bool,
    pub search: Option<String>,
    pub since_days: Option<i64>,
    pub pages: usize,
    pub refresh: bool,
}

pub async fn list_articles(ctx: &AppContext, opts: ArticleListOptions) -> Result<()> {
    let since = opts.since_days.map(published_after).transpose()?;
    ctx.articles.set_filters([
        ArticleFilter::NewsSite(opts.site),
        ArticleFilter::Featured(opts.featured.then_some(true)),
        ArticleFilter::PublishedAfter(since),
    ]);

    load_pages(&ctx.articles, opts.search.as_deref(), opts.refresh, opts.pages).await;
    print_list(&ctx.articles);
    Ok(())
}

/// Cutoff for "published in the last `days` days".
fn published_after(days: i64) -> Result<DateTime<Utc>> {
    TimeDelta::try_days(days)
        .and_then(|delta| Utc::now().checked_sub_signed(delta))
        .ok_or_else(|| PulseError::Config(format!("--since {} is out of range", days)))
}

pub async fn list_blogs(ctx: &AppContext, search: Option<&str>, pages: usize) -> Result<()> {
    load_pages(&ctx.blogs, search, false, pages).await;
    print_list(&ctx.blogs);
    Ok(())
}

pub async fn list_reports(ctx: &AppContext, search: Option<&str>, pages: usize) -> Result<()> {
    load_pages(&ctx.reports, search, false, pages).await;
    print_list(&ctx.reports);
    Ok(())
}

async fn load_pages<R: Resource>(
    store: &ResourceStore<R>,
    search: Option<&str>,
    refresh: bool,
    pages: usize,
) {
    match search {
        Some(query) => store.search(query).await,
        None => store.fetch_list(refresh).await,
    }

    for _ in 1..pages {
        if !store.snapshot().has_more {
            break;
        }
        store.load_more().await;
    }
}

fn print_list<R: Resource>(store: &ResourceStore<R>) {
    let state = store.snapshot();

    if let Some(ref error) = state.error {
        if state.items.is_empty() {
            eprintln!("{}", error);
        } else {
            eprintln!("{} Showing cached {}s.", error, R::KIND);
        }
    }

    if let Some(query) = state.filters.search() {
        println!("Results for \"{}\"\n", query);
    }

    if state.items.is_empty() {
        if state.error.is_none() {
            println!("No {}s", R::KIND);
        }
        return;
    }

    let shown = state.items.len();
    for item in state.items {
        print_row(&item.into_content());
    }

    println!(
        "\nShowing {} of {}{}",
        shown,
        state.total_count,
        if state.has_more { " (more available)" } else { "" }
    );
}

fn print_row(item: &ContentItem) {
    println!(
        "{:>6}  {}  {:<18}  {}",
        item.id(),
        item.published_at().format("%Y-%m-%d"),
        truncate(item.news_site(), 18),
        item.title()
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

async fn fetch_one<R: Resource>(store: &ResourceStore<R>, id: i64) -> Result<ContentItem> {
    store.fetch_detail(id).await;
    let state = store.snapshot();

    match state.current {
        Some(item) if item.id() == id => Ok(item.into_content()),
        _ => Err(match state.detail_error {
            Some(message) => PulseError::Other(message),
            None => PulseError::NotFound(format!("{} {}", R::KIND, id)),
        }),
    }
}

async fn fetch_item(ctx: &AppContext, kind: ContentType, id: i64) -> Result<ContentItem> {
    match kind {
        ContentType::Article => fetch_one(&ctx.articles, id).await,
        ContentType::Blog => fetch_one(&ctx.blogs, id).await,
        ContentType::Report => fetch_one(&ctx.reports, id).await,
    }
}

pub async fn show(ctx: &AppContext, kind: ContentType, id: i64, open: bool) -> Result<()> {
    let item = match fetch_item(ctx, kind, id).await {
        Ok(item) => item,
        Err(e) => {
            // Bookmarks keep a full copy, so they stay readable offline.
            let saved = ctx
                .saved
                .items()
                .into_iter()
                .find(|s| s.matches(id, kind));
            match saved {
                Some(saved) => {
                    eprintln!("{} Showing saved copy.", e);
                    saved.item
                }
                None => return Err(e),
            }
        }
    };

    println!("{}", item.title());
    println!(
        "{} · {}{}",
        item.news_site(),
        item.published_at().format("%Y-%m-%d %H:%M UTC"),
        if ctx.saved.is_saved(id, kind) { " · saved" } else { "" }
    );
    if let ContentItem::Article(ref article) = item {
        print_article_extras(article);
    }
    println!("\n{}\n\n{}", item.summary(), item.url());

    if open {
        open::that(item.url())?;
    }

    Ok(())
}

fn print_article_extras(article: &Article) {
    if !article.authors.is_empty() {
        let names: Vec<&str> = article.authors.iter().map(|a| a.name.as_str()).collect();
        println!("By {}", names.join(", "));
    }
    if !article.launches.is_empty() {
        println!("Launches: {}", article.launches.len());
    }
    if !article.events.is_empty() {
        println!("Events: {}", article.events.len());
    }
}

pub async fn home(ctx: &AppContext) -> Result<()> {
    futures::join!(
        ctx.highlights.fetch_featured(),
        ctx.highlights.fetch_trending(),
        ctx.highlights.fetch_launches(),
    );

    let state = ctx.highlights.snapshot();
    for (heading, articles) in [
        ("Featured", state.featured),
        ("Trending", state.trending),
        ("Launch coverage", state.launches),
    ] {
        println!("== {} ==", heading);
        if articles.is_empty() {
            println!("  (nothing right now)");
        }
        for article in articles {
            print_row(&article.into_content());
        }
        println!();
    }

    Ok(())
}

pub async fn sites(ctx: &AppContext, select: Option<String>, clear: bool) -> Result<()> {
    ctx.news_sources.fetch_news_sites().await;
    let state = ctx.news_sources.snapshot();
    if let Some(ref error) = state.error {
        eprintln!("{}", error);
    }

    if select.is_none() && !clear {
        if state.news_sites.is_empty() {
            println!("No news sources");
        }
        for site in &state.news_sites {
            println!("{}", site);
        }
        return Ok(());
    }

    if let Some(ref site) = select {
        if !state.news_sites.is_empty() && !state.news_sites.contains(site) {
            return Err(PulseError::NotFound(format!("news source {}", site)));
        }
    }

    ctx.news_sources.select_site(select);
    ctx.apply_selected_site();
    ctx.articles.fetch_list(false).await;
    print_list(&ctx.articles);
    Ok(())
}

pub async fn save(ctx: &AppContext, kind: ContentType, id: i64) -> Result<()> {
    if ctx.saved.is_saved(id, kind) {
        println!("Already saved: {} {}", kind, id);
        return Ok(());
    }

    let item = fetch_item(ctx, kind, id).await?;
    let title = item.title().to_string();
    if ctx.saved.save(item)? {
        println!("Saved: {}", title);
    }
    Ok(())
}

pub fn unsave(ctx: &AppContext, kind: ContentType, id: i64) -> Result<()> {
    if ctx.saved.remove(id, kind)? {
        println!("Removed {} {}", kind, id);
    } else {
        println!("Not saved: {} {}", kind, id);
    }
    Ok(())
}

pub fn list_saved(ctx: &AppContext, kind: Option<ContentType>) -> Result<()> {
    let items = match kind {
        Some(kind) => ctx.saved.by_type(kind),
        None => ctx.saved.items(),
    };

    if items.is_empty() {
        println!("No saved items");
        return Ok(());
    }

    for saved in items {
        println!(
            "{:<7} {:>6}  saved {}  {}",
            saved.content_type(),
            saved.id(),
            saved.saved_at.format("%Y-%m-%d"),
            saved.item.title()
        );
    }

    Ok(())
}

pub fn clear_saved(ctx: &AppContext) -> Result<()> {
    let count = ctx.saved.items().len();
    ctx.saved.clear_all()?;
    println!("Removed {} saved item{}", count, if count == 1 { "" } else { "s" });
    Ok(())
}

pub fn settings(ctx: &AppContext, action: Option<SettingsAction>) -> Result<()> {
    let settings = match action {
        None => ctx.settings.get(),
        Some(SettingsAction::ToggleDark) => ctx.settings.toggle_dark_mode()?,
        Some(SettingsAction::ToggleSystem) => ctx.settings.toggle_system_theme()?,
        Some(SettingsAction::ToggleOffline) => ctx.settings.toggle_offline_mode()?,
        Some(SettingsAction::Notify {
            breaking_news,
            featured_articles,
            daily_digest,
        }) => ctx.settings.update_notifications(NotificationPatch {
            breaking_news,
            featured_articles,
            daily_digest,
        })?,
    };

    print_settings(&settings);
    Ok(())
}

fn print_settings(settings: &Settings) {
    let on_off = |b: bool| if b { "on" } else { "off" };
    println!("dark mode          {}", on_off(settings.dark_mode));
    println!("use system theme   {}", on_off(settings.use_system_theme));
    println!("offline mode       {}", on_off(settings.offline_mode));
    println!("breaking news      {}", on_off(settings.notifications.breaking_news));
    println!("featured articles  {}", on_off(settings.notifications.featured_articles));
    println!("daily digest       {}", on_off(settings.notifications.daily_digest));
}

pub fn clear_cache(ctx: &AppContext) -> Result<()> {
    ctx.clear_cache();
    println!("Cache cleared");
    Ok(())
}

pub fn history(ctx: &AppContext, clear: bool) -> Result<()> {
    if clear {
        ctx.history.clear();
        println!("Search history cleared");
        return Ok(());
    }

    let recent = ctx.history.recent();
    if recent.is_empty() {
        println!("No recent searches");
    }
    for query in recent {
        println!("{}", query);
    }
    Ok(())
}
