use async_trait::async_trait;
use nb_core::{NewsItem, Source};
use crate::fetcher::PageFetcher;
use crate::scrapers::generic::extract_generic;
use crate::scrapers::{travel, Scraper, SiteProfile};

/// Scrapes a source's HTML listing, choosing a site profile by host and
/// falling back to generic `article` extraction.
#[derive(Debug, Clone)]
pub struct HtmlScraper {
    profiles: Vec<SiteProfile>,
}

impl HtmlScraper {
    pub fn new() -> Self {
        Self::with_profiles(travel::get_profiles())
    }

    pub fn with_profiles(profiles: Vec<SiteProfile>) -> Self {
        Self { profiles }
    }

    pub fn profile_for(&self, source: &Source) -> Option<&SiteProfile> {
        let host = source.html_host();
        self.profiles.iter().find(|p| p.can_handle(&host))
    }

    /// Extracts candidates from an already fetched listing page.
    pub fn extract(&self, source: &Source, html: &str) -> Vec<NewsItem> {
        match self.profile_for(source) {
            Some(profile) => profile.extract(html, &source.html_url),
            None => extract_generic(html, &source.html_url),
        }
    }
}

impl Default for HtmlScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Scraper for HtmlScraper {
    fn name(&self) -> &str {
        "html"
    }

    fn can_handle(&self, _source: &Source) -> bool {
        true
    }

    async fn fetch_items(&self, source: &Source, fetcher: &dyn PageFetcher) -> Vec<NewsItem> {
        match fetcher.fetch_document(&source.html_url).await {
            Ok(body) => self.extract(source, &body),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixtureFetcher;

    #[test]
    fn test_profile_selection() {
        let scraper = HtmlScraper::new();

        let tourdom = Source::new("TourDom", None, "https://www.tourdom.ru/news/");
        assert_eq!(scraper.profile_for(&tourdom).map(|p| p.name), Some("TourDom"));

        let tourister = Source::new("Tourister", None, "https://www.tourister.ru/publications");
        assert_eq!(scraper.profile_for(&tourister).map(|p| p.name), Some("Tourister"));

        let other = Source::new("Blog", None, "https://blog.example.com/");
        assert!(scraper.profile_for(&other).is_none());
    }

    #[tokio::test]
    async fn test_unknown_host_uses_generic() {
        let fetcher = FixtureFetcher::new().with_page(
            "https://blog.example.com/",
            r#"<article><a href="/p/1">Any title works here</a></article>"#,
        );
        let source = Source::new("Blog", None, "https://blog.example.com/");

        let items = HtmlScraper::new().fetch_items(&source, &fetcher).await;
        assert_eq!(items, vec![NewsItem::headline("Any title works here", "https://blog.example.com/p/1")]);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_empty() {
        let source = Source::new("Blog", None, "https://blog.example.com/");
        assert!(HtmlScraper::new().fetch_items(&source, &FixtureFetcher::new()).await.is_empty());
    }
}
