pub mod client;
pub mod http_fetcher;
pub mod query;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;
use thiserror::Error;

use crate::app::Result;

pub use client::ApiClient;
pub use http_fetcher::HttpFetcher;
pub use query::{ApiRequest, ListQuery};

pub const DEFAULT_BASE_URL: &str = "https://api.spaceflightnewsapi.net/v4";

/// Upstream failures, each carrying the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Invalid request. Please try again.")]
    BadRequest,

    #[error("Content not found.")]
    NotFound,

    #[error("Too many requests. Please wait a moment.")]
    RateLimited,

    #[error("Server error. Please try again later.")]
    Server(u16),

    #[error("Something went wrong. Please try again.")]
    Unexpected(u16),

    #[error("Request timeout. Please check your connection.")]
    Timeout,

    #[error("Network error. Please check your internet connection.")]
    Network,
}

impl ApiError {
    /// `None` for success statuses.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            400 => Some(ApiError::BadRequest),
            404 => Some(ApiError::NotFound),
            429 => Some(ApiError::RateLimited),
            500..=599 => Some(ApiError::Server(status)),
            other => Some(ApiError::Unexpected(other)),
        }
    }
}

/// Raw GET against the API root. Implementations turn non-success
/// statuses and transport failures into [`ApiError`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, request: &ApiRequest) -> Result<Vec<u8>>;
}
