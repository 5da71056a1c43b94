use nb_core::links::absolute;
use nb_core::{is_political, NewsItem};
use scraper::Html;
use super::utils;

/// Items returned from a listing with no site-specific profile.
pub const GENERIC_LIMIT: usize = 20;

/// Takes every anchor inside an `article` element.
pub fn extract_generic(html: &str, list_url: &str) -> Vec<NewsItem> {
    let document = Html::parse_document(html);

    utils::anchors(&document, "article a[href]")
        .into_iter()
        .filter_map(|(href, title)| {
            let href = href?;
            if title.is_empty() || is_political(&title) {
                return None;
            }
            Some(NewsItem::headline(title, absolute(list_url, &href)))
        })
        .take(GENERIC_LIMIT)
        .collect()
}
