use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::api::{ApiError, ApiRequest, Fetcher};
use crate::app::{PulseError, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_USER_AGENT: &str = concat!("space-pulse/", env!("CARGO_PKG_VERSION"));

pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_options(base_url, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    pub fn with_options(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        // Joining relative paths only keeps the last segment with a trailing slash.
        let base = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };

        Ok(Self { client, base })
    }

    pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.base.join(request.path.trim_start_matches('/'))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }
}

fn transport_error(err: reqwest::Error) -> PulseError {
    if err.is_timeout() {
        ApiError::Timeout.into()
    } else {
        ApiError::Network.into()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, request: &ApiRequest) -> Result<Vec<u8>> {
        let url = self.url_for(request)?;
        let started = Instant::now();
        debug!(%url, "api request");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(%url, error = %e, "api request failed");
            transport_error(e)
        })?;

        let status = response.status();
        if let Some(err) = ApiError::from_status(status.as_u16()) {
            warn!(%url, status = status.as_u16(), "api error response");
            return Err(err.into());
        }

        let body = response.bytes().await.map_err(transport_error)?.to_vec();
        debug!(
            %url,
            elapsed_ms = started.elapsed().as_millis() as u64,
            bytes = body.len(),
            "api response"
        );

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_keeps_version_segment() {
        let fetcher = HttpFetcher::new("https://api.spaceflightnewsapi.net/v4").unwrap();
        let mut request = ApiRequest::new("articles/42/");
        assert_eq!(
            fetcher.url_for(&request).unwrap().as_str(),
            "https://api.spaceflightnewsapi.net/v4/articles/42/"
        );

        request.path = "/info/".into();
        assert_eq!(
            fetcher.url_for(&request).unwrap().as_str(),
            "https://api.spaceflightnewsapi.net/v4/info/"
        );
    }

    #[test]
    fn test_url_for_encodes_query() {
        let fetcher = HttpFetcher::new("https://api.spaceflightnewsapi.net/v4/").unwrap();
        let mut request = ApiRequest::new("articles/");
        request.query.push(("search".into(), "mars rover".into()));
        request.query.push(("news_site".into(), "NASA".into()));

        let url = fetcher.url_for(&request).unwrap();
        assert_eq!(url.query(), Some("search=mars+rover&news_site=NASA"));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpFetcher::new("not a url"),
            Err(PulseError::InvalidUrl(_))
        ));
    }
}
