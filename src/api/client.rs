use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::api::{ApiRequest, Fetcher, ListQuery};
use crate::app::Result;
use crate::domain::{Info, Page, Resource};

/// Typed access to the list, detail and info endpoints.
#[derive(Clone)]
pub struct ApiClient {
    fetcher: Arc<dyn Fetcher>,
}

impl ApiClient {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn list<R: Resource>(&self, query: &ListQuery) -> Result<Page<R>> {
        self.get_json(query.to_request(R::PATH)).await
    }

    pub async fn detail<R: Resource>(&self, id: i64) -> Result<R> {
        self.get_json(ApiRequest::new(format!("{}{}/", R::PATH, id)))
            .await
    }

    pub async fn info(&self) -> Result<Info> {
        self.get_json(ApiRequest::new("info/")).await
    }

    pub async fn news_sites(&self) -> Result<Vec<String>> {
        Ok(self.info().await?.news_sites)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let body = self.fetcher.get(&request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
