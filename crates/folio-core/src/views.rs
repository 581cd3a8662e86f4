//! View counter payloads and the client-side fallback counter.

use serde::Deserialize;
use thiserror::Error;

pub const VIEWS_KEY: &str = "portfolio-views";

#[derive(Debug, Error)]
pub enum ViewsError {
    #[error("malformed views payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("views service error: {0}")]
    Service(String),
    #[error("views payload carried neither a count nor an error")]
    Empty,
}

/// Body of both `GET` and `POST /api/views`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ViewsResponse {
    pub views: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

pub fn parse_views(body: &str) -> Result<u64, ViewsError> {
    let resp: ViewsResponse = serde_json::from_str(body)?;
    if let Some(err) = resp.error {
        return Err(ViewsError::Service(err));
    }
    resp.views.ok_or(ViewsError::Empty)
}

/// Minimal string key-value storage (browser `localStorage` in the front end).
pub trait CounterStore {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&mut self, key: &str, value: &str);
}

/// Per-browser fallback used when the service cannot be reached.
pub struct LocalCounter<S: CounterStore> {
    store: S,
}

impl<S: CounterStore> LocalCounter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn current(&self) -> u64 {
        self.store
            .load(VIEWS_KEY)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Records one view and returns the new count.
    pub fn bump(&mut self) -> u64 {
        let next = self.current().saturating_add(1);
        self.store.store(VIEWS_KEY, &next.to_string());
        next
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

impl CounterStore for std::collections::HashMap<String, String> {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }
}
