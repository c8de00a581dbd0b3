use serde::{Deserialize, Serialize};

/// One page of a list endpoint. `next`/`previous` are opaque; only their
/// presence matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub version: Option<String>,
    pub news_sites: Vec<String>,
}
