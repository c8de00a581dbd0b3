use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::keys;
use crate::domain::{
    Article, ArticleFilters, Blog, BlogFilters, ContentItem, ContentType, Filters, Report,
    ReportFilters,
};

/// A listable, fetchable content collection of the upstream API.
pub trait Resource: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    const KIND: ContentType;
    /// Collection path below the API root, with trailing slash.
    const PATH: &'static str;
    /// Where the first page of the last successful list fetch is kept.
    const SNAPSHOT_KEY: &'static str;
    /// Where the last opened detail is kept, if this resource remembers one.
    const LAST_OPENED_KEY: Option<&'static str> = None;

    type Filters: Filters;

    fn id(&self) -> i64;

    fn into_content(self) -> ContentItem;
}

impl Resource for Article {
    const KIND: ContentType = ContentType::Article;
    const PATH: &'static str = "articles/";
    const SNAPSHOT_KEY: &'static str = keys::CACHED_ARTICLES;
    const LAST_OPENED_KEY: Option<&'static str> = Some(keys::LAST_OPENED_ARTICLE);

    type Filters = ArticleFilters;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_content(self) -> ContentItem {
        ContentItem::Article(self)
    }
}

impl Resource for Blog {
    const KIND: ContentType = ContentType::Blog;
    const PATH: &'static str = "blogs/";
    const SNAPSHOT_KEY: &'static str = keys::CACHED_BLOGS;

    type Filters = BlogFilters;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_content(self) -> ContentItem {
        ContentItem::Blog(self)
    }
}

impl Resource for Report {
    const KIND: ContentType = ContentType::Report;
    const PATH: &'static str = "reports/";
    const SNAPSHOT_KEY: &'static str = keys::CACHED_REPORTS;

    type Filters = ReportFilters;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_content(self) -> ContentItem {
        ContentItem::Report(self)
    }
}
