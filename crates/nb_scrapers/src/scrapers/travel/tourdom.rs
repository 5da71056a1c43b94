use crate::scrapers::SiteProfile;

pub const TOURDOM: SiteProfile = SiteProfile {
    name: "TourDom",
    domain: "tourdom.ru",
    path_marker: "/news/",
    primary: "article a[href], .news-list a[href], .news a[href]",
    fallback: Some("a[href*='/news/']"),
    denylist: &["новости", "читать далее", "ещё"],
};
