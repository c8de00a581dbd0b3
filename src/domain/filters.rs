//! Per-resource filter sets.
//!
//! Each resource gets a closed struct listing exactly the predicates its
//! endpoint accepts, and a matching patch enum for partial updates. Applying
//! an article-only predicate to blogs does not type-check.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::api::ListQuery;

pub trait Filters: Clone + Default + fmt::Debug + PartialEq + Send + Sync + 'static {
    type Patch: Clone + fmt::Debug + Send + 'static;

    fn apply_patch(&mut self, patch: Self::Patch);

    fn search(&self) -> Option<&str>;

    fn set_search(&mut self, query: Option<String>);

    /// Write the active predicates into an outgoing list query.
    fn apply(&self, query: &mut ListQuery);
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn api_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFilters {
    pub news_site: Option<String>,
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub published_after: Option<DateTime<Utc>>,
    pub published_before: Option<DateTime<Utc>>,
    pub has_launch: Option<bool>,
    pub has_event: Option<bool>,
    pub title_contains: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArticleFilter {
    NewsSite(Option<String>),
    Search(Option<String>),
    Featured(Option<bool>),
    PublishedAfter(Option<DateTime<Utc>>),
    PublishedBefore(Option<DateTime<Utc>>),
    HasLaunch(Option<bool>),
    HasEvent(Option<bool>),
    TitleContains(Option<String>),
}

impl Filters for ArticleFilters {
    type Patch = ArticleFilter;

    fn apply_patch(&mut self, patch: ArticleFilter) {
        match patch {
            ArticleFilter::NewsSite(v) => self.news_site = non_empty(v),
            ArticleFilter::Search(v) => self.search = non_empty(v),
            ArticleFilter::Featured(v) => self.featured = v,
            ArticleFilter::PublishedAfter(v) => self.published_after = v,
            ArticleFilter::PublishedBefore(v) => self.published_before = v,
            ArticleFilter::HasLaunch(v) => self.has_launch = v,
            ArticleFilter::HasEvent(v) => self.has_event = v,
            ArticleFilter::TitleContains(v) => self.title_contains = non_empty(v),
        }
    }

    fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    fn set_search(&mut self, query: Option<String>) {
        self.search = non_empty(query);
    }

    fn apply(&self, query: &mut ListQuery) {
        if let Some(ref search) = self.search {
            query.push("search", search);
        }
        if let Some(ref site) = self.news_site {
            query.push("news_site", site);
        }
        if let Some(featured) = self.featured {
            query.push("is_featured", featured);
        }
        if let Some(ref after) = self.published_after {
            query.push("published_at_gte", api_timestamp(after));
        }
        if let Some(ref before) = self.published_before {
            query.push("published_at_lte", api_timestamp(before));
        }
        if let Some(has_launch) = self.has_launch {
            query.push("has_launch", has_launch);
        }
        if let Some(has_event) = self.has_event {
            query.push("has_event", has_event);
        }
        if let Some(ref title) = self.title_contains {
            query.push("title_contains", title);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogFilters {
    pub news_site: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlogFilter {
    NewsSite(Option<String>),
    Search(Option<String>),
}

impl Filters for BlogFilters {
    type Patch = BlogFilter;

    fn apply_patch(&mut self, patch: BlogFilter) {
        match patch {
            BlogFilter::NewsSite(v) => self.news_site = non_empty(v),
            BlogFilter::Search(v) => self.search = non_empty(v),
        }
    }

    fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    fn set_search(&mut self, query: Option<String>) {
        self.search = non_empty(query);
    }

    fn apply(&self, query: &mut ListQuery) {
        if let Some(ref search) = self.search {
            query.push("search", search);
        }
        if let Some(ref site) = self.news_site {
            query.push("news_site", site);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilters {
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportFilter {
    Search(Option<String>),
}

impl Filters for ReportFilters {
    type Patch = ReportFilter;

    fn apply_patch(&mut self, patch: ReportFilter) {
        match patch {
            ReportFilter::Search(v) => self.search = non_empty(v),
        }
    }

    fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    fn set_search(&mut self, query: Option<String>) {
        self.search = non_empty(query);
    }

    fn apply(&self, query: &mut ListQuery) {
        if let Some(ref search) = self.search {
            query.push("search", search);
        }
    }
}
