pub mod content;
pub mod filters;
pub mod page;
pub mod resource;
pub mod saved;
pub mod settings;

pub use content::{Article, Author, AuthorSocials, Blog, ContentItem, ContentType, Event, Launch, Report};
pub use filters::{
    ArticleFilter, ArticleFilters, BlogFilter, BlogFilters, Filters, ReportFilter, ReportFilters,
};
pub use page::{Info, Page};
pub use resource::Resource;
pub use saved::SavedItem;
pub use settings::{NotificationPatch, NotificationPreferences, Settings};
