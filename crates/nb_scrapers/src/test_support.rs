//! In-memory `PageFetcher` for tests in this and dependent crates.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::fetcher::{FetchFailure, PageFetcher};

/// Serves canned bodies keyed by URL; unknown URLs fail with 404.
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl PageFetcher for FixtureFetcher {
    async fn fetch_document(&self, url: &str) -> Result<String, FetchFailure> {
        self.pages.get(url).cloned().ok_or(FetchFailure::Status(404))
    }
}
