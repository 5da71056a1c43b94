use std::collections::HashSet;
use std::ops::RangeInclusive;

use nb_core::links::{absolute, same_host};
use nb_core::{is_political, NewsItem};
use scraper::Html;
use super::utils;

/// Items returned per site-specific listing.
pub const SITE_LIMIT: usize = 25;

/// Accepted title length, in characters.
pub const TITLE_LENGTH: RangeInclusive<usize> = 15..=160;

/// Extraction rules tailored to one site's listing page.
#[derive(Debug, Clone, Copy)]
pub struct SiteProfile {
    pub name: &'static str,
    /// Host suffix the listing and its links must belong to.
    pub domain: &'static str,
    /// Path fragment every article link must contain.
    pub path_marker: &'static str,
    pub primary: &'static str,
    /// Tried only when the primary selector produced nothing.
    pub fallback: Option<&'static str>,
    /// Generic link labels ("read more") compared case-insensitively.
    pub denylist: &'static [&'static str],
}

impl SiteProfile {
    pub fn can_handle(&self, host: &str) -> bool {
        host.contains(self.domain)
    }

    pub fn extract(&self, html: &str, list_url: &str) -> Vec<NewsItem> {
        let document = Html::parse_document(html);

        let mut candidates = self.collect(&document, list_url, self.primary);
        if candidates.is_empty() {
            if let Some(fallback) = self.fallback {
                tracing::debug!("{}: primary selectors found nothing, trying fallback", self.name);
                candidates = self.collect(&document, list_url, fallback);
            }
        }

        let mut seen = HashSet::new();
        candidates
            .into_iter()
            .filter(|item| seen.insert(item.link.clone()))
            .filter(|item| !self.is_denylisted(&item.title))
            .take(SITE_LIMIT)
            .collect()
    }

    fn collect(&self, document: &Html, list_url: &str, css: &str) -> Vec<NewsItem> {
        utils::anchors(document, css)
            .into_iter()
            .filter_map(|(href, title)| {
                let href = href?;
                if title.is_empty() || is_political(&title) {
                    return None;
                }

                let link = absolute(list_url, &href);
                let accepted = link.contains(self.path_marker)
                    && same_host(&link, self.domain)
                    && TITLE_LENGTH.contains(&title.chars().count());

                accepted.then(|| NewsItem::headline(title, link))
            })
            .collect()
    }

    fn is_denylisted(&self, title: &str) -> bool {
        let lowered = title.to_lowercase();
        self.denylist.iter().any(|d| lowered == *d)
    }
}
