//! HTML captions for published posts.

use html_escape::{encode_double_quoted_attribute, encode_text};
use nb_core::NewsItem;
use scraper::Html;

/// Longest summary excerpt, in characters, including the ellipsis.
pub const SUMMARY_LIMIT: usize = 300;

const ELLIPSIS: char = '…';

/// Bold title, optional excerpt, then a read-more link labelled with the source.
pub fn build_caption(item: &NewsItem, source_name: &str) -> String {
    let mut parts = vec![format!("<b>{}</b>", encode_text(item.title.trim()))];

    let excerpt = plain_text(&item.summary);
    if !excerpt.is_empty() {
        parts.push(encode_text(&truncate(&excerpt, SUMMARY_LIMIT)).into_owned());
    }

    parts.push(format!(
        "\n<a href=\"{}\">Читать на {}</a>",
        encode_double_quoted_attribute(item.link.trim()),
        encode_text(source_name)
    ));

    parts.join("\n")
}

/// Text content of an HTML fragment with runs of whitespace collapsed.
pub fn plain_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment
        .root_element()
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cuts `text` to `limit` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit.saturating_sub(3)).collect();
    cut.push(ELLIPSIS);
    cut
}
