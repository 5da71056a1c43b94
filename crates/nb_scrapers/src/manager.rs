use std::sync::Arc;

use nb_core::{NewsItem, Source};
use crate::fetcher::PageFetcher;
use crate::scrapers::{default_scrapers, Scraper};

/// Runs the ordered scraping strategies for a source.
pub struct ScraperManager {
    fetcher: Arc<dyn PageFetcher>,
    scrapers: Vec<Box<dyn Scraper>>,
}

impl ScraperManager {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::with_scrapers(fetcher, default_scrapers())
    }

    pub fn with_scrapers(fetcher: Arc<dyn PageFetcher>, scrapers: Vec<Box<dyn Scraper>>) -> Self {
        Self { fetcher, scrapers }
    }

    /// Appends a strategy; it is tried after the existing ones.
    pub fn add_scraper(&mut self, scraper: Box<dyn Scraper>) {
        self.scrapers.push(scraper);
    }

    pub fn scraper_names(&self) -> Vec<&str> {
        self.scrapers.iter().map(|s| s.name()).collect()
    }

    /// Candidates from the first applicable strategy that yields any.
    pub async fn fetch_source_items(&self, source: &Source) -> Vec<NewsItem> {
        for scraper in self.scrapers.iter().filter(|s| s.can_handle(source)) {
            let items = scraper.fetch_items(source, self.fetcher.as_ref()).await;
            if !items.is_empty() {
                tracing::debug!("{}: {} candidates via {}", source.name, items.len(), scraper.name());
                return items;
            }
            tracing::debug!("{}: {} produced nothing", source.name, scraper.name());
        }
        Vec::new()
    }
}
