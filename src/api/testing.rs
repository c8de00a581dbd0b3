//! In-process [`Fetcher`] for store tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Semaphore;

use crate::api::{ApiError, ApiRequest, Fetcher};
use crate::app::Result;

type Responder = Box<dyn Fn(&ApiRequest) -> Result<Vec<u8>> + Send + Sync>;

pub(crate) struct ScriptedFetcher {
    responder: Mutex<Responder>,
    requests: Mutex<Vec<ApiRequest>>,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedFetcher {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&ApiRequest) -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        Self {
            responder: Mutex::new(Box::new(responder)),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Requests park after being recorded until the returned semaphore
    /// hands out a permit.
    pub fn gated<F>(responder: F) -> (Self, Arc<Semaphore>)
    where
        F: Fn(&ApiRequest) -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        let gate = Arc::new(Semaphore::new(0));
        let mut fetcher = Self::new(responder);
        fetcher.gate = Some(gate.clone());
        (fetcher, gate)
    }

    pub fn respond_with<F>(&self, responder: F)
    where
        F: Fn(&ApiRequest) -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        *self.responder.lock().unwrap() = Box::new(responder);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub async fn wait_for_requests(&self, n: usize) {
        while self.request_count() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn get(&self, request: &ApiRequest) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        let responder = self.responder.lock().unwrap();
        responder(request)
    }
}

pub(crate) fn article_json(id: i64, news_site: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Item {}", id),
        "authors": [],
        "url": format!("https://example.com/{}", id),
        "image_url": null,
        "news_site": news_site,
        "summary": "summary",
        "published_at": "2024-10-01T12:00:00Z",
        "updated_at": "2024-10-01T12:00:00Z",
        "featured": false,
        "launches": [],
        "events": []
    })
}

pub(crate) fn page_body(results: Vec<Value>, count: u64, has_next: bool) -> Vec<u8> {
    let next = has_next.then(|| "https://api.example.com/next".to_string());
    serde_json::to_vec(&json!({
        "count": count,
        "next": next,
        "previous": null,
        "results": results,
    }))
    .unwrap()
}

/// Serves `total` items in server order, honouring `limit` and `offset`.
pub(crate) fn paged(total: usize) -> impl Fn(&ApiRequest) -> Result<Vec<u8>> + Send + Sync + 'static {
    move |request| {
        let limit: usize = request.param("limit").unwrap_or("20").parse().unwrap();
        let offset: usize = request.param("offset").unwrap_or("0").parse().unwrap();
        let site = request.param("news_site").unwrap_or("NASA").to_string();

        let end = (offset + limit).min(total);
        let results = (offset..end)
            .map(|i| article_json(i as i64 + 1, &site))
            .collect();
        Ok(page_body(results, total as u64, end < total))
    }
}

pub(crate) fn failing(err: ApiError) -> impl Fn(&ApiRequest) -> Result<Vec<u8>> + Send + Sync + 'static {
    move |_| Err(err.clone().into())
}
