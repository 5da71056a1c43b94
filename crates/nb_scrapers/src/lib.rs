pub mod cli;
pub mod fetcher;
pub mod manager;
pub mod scrapers;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use fetcher::{extract_preview_image, FetchFailure, HttpFetcher, PageFetcher};
pub use manager::ScraperManager;
pub use scrapers::Scraper;
