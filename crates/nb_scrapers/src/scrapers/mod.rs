use async_trait::async_trait;
use nb_core::{NewsItem, Source};
use crate::fetcher::PageFetcher;

pub mod generic;
pub mod html;
pub mod rss;
pub mod site;
pub mod travel;

pub use generic::GENERIC_LIMIT;
pub use html::HtmlScraper;
pub use rss::RssScraper;
pub use site::SiteProfile;

/// One way of turning a source into candidate items.
///
/// Strategies are tried in order by the `ScraperManager`; the first one
/// producing a non-empty list wins.
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Short label used in logs
    fn name(&self) -> &str;

    /// Returns true if this strategy applies to the source at all
    fn can_handle(&self, source: &Source) -> bool;

    /// Fetches and extracts candidates. Failures yield an empty list.
    async fn fetch_items(&self, source: &Source, fetcher: &dyn PageFetcher) -> Vec<NewsItem>;
}

/// Default strategy order: the source's feed, then its HTML listing.
pub fn default_scrapers() -> Vec<Box<dyn Scraper>> {
    vec![Box::new(RssScraper::new()), Box::new(HtmlScraper::new())]
}

/// Common utilities for HTML adapters
pub(crate) mod utils {
    use scraper::{ElementRef, Html, Selector};

    /// Parses a CSS selector, logging and skipping invalid ones.
    pub fn selector(css: &str) -> Option<Selector> {
        match Selector::parse(css) {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::debug!("Invalid selector {:?}: {:?}", css, e);
                None
            }
        }
    }

    /// Trimmed text content of an element.
    pub fn element_text(el: &ElementRef) -> String {
        el.text().collect::<String>().trim().to_string()
    }

    /// `(href, title)` for every anchor matched by `css`, in document order.
    pub fn anchors(document: &Html, css: &str) -> Vec<(Option<String>, String)> {
        let Some(selector) = selector(css) else {
            return Vec::new();
        };

        document
            .select(&selector)
            .map(|el| {
                let href = el.value().attr("href").map(str::to_string);
                (href, element_text(&el))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_anchors_in_document_order() {
        let html = r#"
            <article><a href="/a"> First </a></article>
            <article><a>No href</a></article>
            <article><a href="/b">Second <b>bold</b></a></article>
        "#;
        let document = Html::parse_document(html);

        let anchors = utils::anchors(&document, "article a");
        assert_eq!(anchors.len(), 3);
        assert_eq!(anchors[0], (Some("/a".to_string()), "First".to_string()));
        assert_eq!(anchors[1], (None, "No href".to_string()));
        assert_eq!(anchors[2], (Some("/b".to_string()), "Second bold".to_string()));
    }

    #[test]
    fn test_invalid_selector_yields_nothing() {
        let document = Html::parse_document("<a href='/x'>x</a>");
        assert!(utils::anchors(&document, "a[[").is_empty());
    }

    #[test]
    fn test_default_order() {
        let names: Vec<_> = default_scrapers().iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec!["rss", "html"]);
    }
}
