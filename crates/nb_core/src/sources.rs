use crate::types::Source;

/// Sources polled on every pass, in this order.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new(
            "TourDom",
            Some("https://www.tourdom.ru/news/rss/"),
            "https://www.tourdom.ru/news/",
        ),
        Source::new(
            "Tourister",
            Some("https://www.tourister.ru/publications/rss"),
            "https://www.tourister.ru/publications",
        ),
    ]
}

pub fn find_source<'a>(sources: &'a [Source], name: &str) -> Option<&'a Source> {
    sources.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}
