use async_trait::async_trait;
use feed_rs::parser;
use nb_core::{is_political, NewsItem, Source};
use crate::fetcher::PageFetcher;
use crate::scrapers::Scraper;

/// Entries considered per feed.
pub const RSS_LIMIT: usize = 30;

#[derive(Debug, Clone, Default)]
pub struct RssScraper;

impl RssScraper {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Scraper for RssScraper {
    fn name(&self) -> &str {
        "rss"
    }

    fn can_handle(&self, source: &Source) -> bool {
        source.rss_url.as_deref().is_some_and(|u| !u.is_empty())
    }

    async fn fetch_items(&self, source: &Source, fetcher: &dyn PageFetcher) -> Vec<NewsItem> {
        let Some(rss_url) = source.rss_url.as_deref() else {
            return Vec::new();
        };

        match fetcher.fetch_document(rss_url).await {
            Ok(body) => parse_feed(&body, rss_url),
            Err(e) => {
                tracing::warn!("RSS error {}: {}", rss_url, e);
                Vec::new()
            }
        }
    }
}

/// Extracts candidates from the first `RSS_LIMIT` entries of a feed.
/// A malformed feed yields an empty list.
pub fn parse_feed(body: &str, rss_url: &str) -> Vec<NewsItem> {
    let feed = match parser::parse(body.as_bytes()) {
        Ok(feed) => feed,
        Err(e) => {
            tracing::warn!("RSS error {}: {}", rss_url, e);
            return Vec::new();
        }
    };

    feed.entries
        .into_iter()
        .take(RSS_LIMIT)
        .filter_map(|entry| {
            let link = entry.links.first().map(|l| l.href.trim().to_string())?;
            let title = entry.title.map(|t| t.content.trim().to_string())?;
            if link.is_empty() || title.is_empty() || is_political(&title) {
                return None;
            }

            let summary = entry
                .summary
                .map(|s| s.content.trim().to_string())
                .unwrap_or_default();

            Some(NewsItem { title, link, summary })
        })
        .collect()
}
