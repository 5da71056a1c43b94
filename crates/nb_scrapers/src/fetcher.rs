//! HTTP access for listings, feeds and article pages.
//!
//! Failure is routine here: every call returns `Result<_, FetchFailure>` and
//! callers degrade to "no data" rather than propagating an error.

use std::time::Duration;

use async_trait::async_trait;
use nb_core::links::absolute;
use reqwest::{Client, Url};
use scraper::{Html, Selector};
use thiserror::Error;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// Meta properties checked for a preview image, most preferred first.
const PREVIEW_IMAGE_PROPERTIES: &[&str] = &["og:image:secure_url", "og:image"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("request failed: {0}")]
    Request(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("failed to read body: {0}")]
    Body(String),
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GETs `url` and returns the response body as text.
    async fn fetch_document(&self, url: &str) -> Result<String, FetchFailure>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> nb_core::Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_document(&self, url: &str) -> Result<String, FetchFailure> {
        let result = async {
            let response = self.client.get(url).send().await.map_err(|e| {
                if e.is_timeout() {
                    FetchFailure::Timeout
                } else {
                    FetchFailure::Request(e.to_string())
                }
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchFailure::Status(status.as_u16()));
            }

            response.text().await.map_err(|e| FetchFailure::Body(e.to_string()))
        }
        .await;

        if let Err(failure) = &result {
            tracing::warn!("GET failed {}: {}", url, failure);
        }
        result
    }
}

/// Fetches `url` and returns its preview image as an absolute http(s) URL,
/// if the page declares one. Best-effort: any failure yields `None`.
pub async fn extract_preview_image(fetcher: &dyn PageFetcher, url: &str) -> Option<String> {
    match fetcher.fetch_document(url).await {
        Ok(body) => find_preview_image(&body).and_then(|content| resolve_image_url(url, &content)),
        Err(e) => {
            tracing::warn!("[og:image] {} -> {}", url, e);
            None
        }
    }
}

/// Resolves a meta `content` value against the page it came from. Anything
/// that does not end up as an http(s) URL is dropped.
pub fn resolve_image_url(page_url: &str, content: &str) -> Option<String> {
    let resolved = absolute(page_url, content);
    match Url::parse(&resolved) {
        Ok(u) if matches!(u.scheme(), "http" | "https") && u.host_str().is_some() => Some(resolved),
        _ => {
            tracing::debug!("[og:image] {} -> unusable image {:?}", page_url, content);
            None
        }
    }
}

/// Looks for `og:image:secure_url`, then `og:image`, in the page's meta tags.
pub fn find_preview_image(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    PREVIEW_IMAGE_PROPERTIES.iter().find_map(|property| {
        let selector = Selector::parse(&format!("meta[property='{}']", property)).ok()?;
        document
            .select(&selector)
            .filter_map(|el| el.value().attr("content"))
            .map(str::trim)
            .find(|content| !content.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use crate::test_support::FixtureFetcher;
    use super::*;

    #[test]
    fn test_secure_url_preferred() {
        let html = r#"
            <html><head>
                <meta property="og:image" content="http://cdn.example.com/a.jpg">
                <meta property="og:image:secure_url" content=" https://cdn.example.com/a.jpg ">
            </head><body></body></html>
        "#;
        assert_eq!(
            find_preview_image(html).as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn test_falls_back_to_og_image() {
        let html = r#"<html><head><meta property="og:image" content="http://cdn.example.com/b.jpg"></head></html>"#;
        assert_eq!(
            find_preview_image(html).as_deref(),
            Some("http://cdn.example.com/b.jpg")
        );
    }

    #[test]
    fn test_no_preview_image() {
        let html = r#"<html><head><meta property="og:image" content="  "><title>x</title></head></html>"#;
        assert_eq!(find_preview_image(html), None);
    }

    #[tokio::test]
    async fn test_extract_preview_image_on_fetch_failure() {
        let fetcher = FixtureFetcher::new();
        assert_eq!(extract_preview_image(&fetcher, "https://example.com/missing").await, None);
    }

    #[tokio::test]
    async fn test_extract_preview_image_from_page() {
        let fetcher = FixtureFetcher::new().with_page(
            "https://example.com/a",
            r#"<meta property="og:image" content="https://example.com/a.png">"#,
        );
        assert_eq!(
            extract_preview_image(&fetcher, "https://example.com/a").await.as_deref(),
            Some("https://example.com/a.png")
        );
    }

    #[tokio::test]
    async fn test_relative_preview_image_is_resolved() {
        let fetcher = FixtureFetcher::new().with_page(
            "https://www.tourdom.ru/news/abc.html",
            r#"<meta property="og:image" content="/upload/iblock/1.jpg">"#,
        );
        assert_eq!(
            extract_preview_image(&fetcher, "https://www.tourdom.ru/news/abc.html").await.as_deref(),
            Some("https://www.tourdom.ru/upload/iblock/1.jpg")
        );
    }

    #[test]
    fn test_resolve_image_url() {
        let page = "https://www.tourister.ru/publications/42";
        assert_eq!(
            resolve_image_url(page, "//cdn.tourister.ru/a.png").as_deref(),
            Some("https://cdn.tourister.ru/a.png")
        );
        assert_eq!(
            resolve_image_url(page, "https://cdn.example.com/b.jpg").as_deref(),
            Some("https://cdn.example.com/b.jpg")
        );
        assert_eq!(resolve_image_url(page, "data:image/png;base64,AAAA"), None);
        assert_eq!(resolve_image_url("not a url", "/img/1.jpg"), None);
    }

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpFetcher::new().is_ok());
    }
}
