use std::fmt;

pub const DEFAULT_ORDERING: &str = "-published_at";

/// Offset-paginated list request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: usize,
    pub offset: usize,
    pub ordering: &'static str,
    params: Vec<(&'static str, String)>,
}

impl ListQuery {
    pub fn page(limit: usize, offset: usize) -> Self {
        Self {
            limit,
            offset,
            ordering: DEFAULT_ORDERING,
            params: Vec::new(),
        }
    }

    /// Set a filter parameter, replacing an earlier value for the same key.
    pub fn push(&mut self, key: &'static str, value: impl fmt::Display) {
        let value = value.to_string();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
    }

    pub fn with(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.push(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_request(&self, path: &str) -> ApiRequest {
        let mut query = vec![
            ("limit".to_string(), self.limit.to_string()),
            ("offset".to_string(), self.offset.to_string()),
            ("ordering".to_string(), self.ordering.to_string()),
        ];
        query.extend(
            self.params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone())),
        );

        ApiRequest {
            path: path.to_string(),
            query,
        }
    }
}

/// A GET relative to the API root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_paging_first() {
        let request = ListQuery::page(20, 40)
            .with("news_site", "NASA")
            .to_request("articles/");

        assert_eq!(request.path, "articles/");
        assert_eq!(request.query[0], ("limit".into(), "20".into()));
        assert_eq!(request.param("offset"), Some("40"));
        assert_eq!(request.param("ordering"), Some("-published_at"));
        assert_eq!(request.param("news_site"), Some("NASA"));
    }

    #[test]
    fn test_push_replaces_existing_key() {
        let mut query = ListQuery::page(5, 0);
        query.push("search", "mars");
        query.push("search", "moon");
        assert_eq!(query.get("search"), Some("moon"));
        assert_eq!(query.to_request("blogs/").query.len(), 4);
    }
}
