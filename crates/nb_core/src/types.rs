use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate news entry extracted from a source listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    /// May carry HTML markup or be empty.
    pub summary: String,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, link: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            summary: summary.into(),
        }
    }

    /// Item scraped from an HTML listing, which never has a summary.
    pub fn headline(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self::new(title, link, String::new())
    }
}

/// A configured news origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub rss_url: Option<String>,
    pub html_url: String,
}

impl Source {
    pub fn new(name: &str, rss_url: Option<&str>, html_url: &str) -> Self {
        Self {
            name: name.to_string(),
            rss_url: rss_url.map(str::to_string),
            html_url: html_url.to_string(),
        }
    }

    /// Host part of the HTML listing URL, empty when it cannot be parsed.
    pub fn html_host(&self) -> String {
        url::Url::parse(&self.html_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default()
    }
}

/// Durable proof that a link was already published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedRecord {
    pub url: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}
