use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::PulseError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSocials {
    #[serde(default)]
    pub x: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub mastodon: Option<String>,
    #[serde(default)]
    pub bluesky: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub socials: Option<AuthorSocials>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launch {
    pub launch_id: String,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: i64,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub news_site: String,
    #[serde(default)]
    pub summary: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub launches: Vec<Launch>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Same wire shape as [`Article`], served from `/blogs/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub news_site: String,
    #[serde(default)]
    pub summary: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub launches: Vec<Launch>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub news_site: String,
    #[serde(default)]
    pub summary: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Article,
    Blog,
    Report,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Article => "article",
            ContentType::Blog => "blog",
            ContentType::Report => "report",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "article" | "articles" => Ok(ContentType::Article),
            "blog" | "blogs" => Ok(ContentType::Blog),
            "report" | "reports" => Ok(ContentType::Report),
            other => Err(PulseError::Other(format!("Unknown content type: {}", other))),
        }
    }
}

/// Any one piece of content, tagged by its resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentItem {
    Article(Article),
    Blog(Blog),
    Report(Report),
}

impl ContentItem {
    pub fn id(&self) -> i64 {
        match self {
            ContentItem::Article(a) => a.id,
            ContentItem::Blog(b) => b.id,
            ContentItem::Report(r) => r.id,
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            ContentItem::Article(_) => ContentType::Article,
            ContentItem::Blog(_) => ContentType::Blog,
            ContentItem::Report(_) => ContentType::Report,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentItem::Article(a) => &a.title,
            ContentItem::Blog(b) => &b.title,
            ContentItem::Report(r) => &r.title,
        }
    }

    pub fn news_site(&self) -> &str {
        match self {
            ContentItem::Article(a) => &a.news_site,
            ContentItem::Blog(b) => &b.news_site,
            ContentItem::Report(r) => &r.news_site,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ContentItem::Article(a) => &a.url,
            ContentItem::Blog(b) => &b.url,
            ContentItem::Report(r) => &r.url,
        }
    }

    pub fn summary(&self) -> &str {
        match self {
            ContentItem::Article(a) => &a.summary,
            ContentItem::Blog(b) => &b.summary,
            ContentItem::Report(r) => &r.summary,
        }
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        match self {
            ContentItem::Article(a) => a.published_at,
            ContentItem::Blog(b) => b.published_at,
            ContentItem::Report(r) => r.published_at,
        }
    }
}
