use crate::scrapers::SiteProfile;

pub const TOURISTER: SiteProfile = SiteProfile {
    name: "Tourister",
    domain: "tourister.ru",
    path_marker: "/publications/",
    primary: "a[href*='/publications/']",
    fallback: None,
    denylist: &["новости", "читать далее", "далее", "подробнее"],
};

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_URL: &str = "https://www.tourister.ru/publications";

    #[test]
    fn test_extract_publications() {
        let html = r#"
            <div class="pub">
                <a href="/publications/1234"><img src="x.jpg"></a>
                <a href="/publications/1234">Как провести выходные в Калининграде</a>
                <a href="/publications/1234">Подробнее</a>
                <a href="/publications/5678">Десять причин поехать на Алтай осенью</a>
                <a href="/world/europe">Европа: все направления для путешествий</a>
            </div>
        "#;

        let items = TOURISTER.extract(html, LIST_URL);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Как провести выходные в Калининграде");
        assert_eq!(items[0].link, "https://www.tourister.ru/publications/1234");
        assert_eq!(items[1].link, "https://www.tourister.ru/publications/5678");
    }

    #[test]
    fn test_no_matches_without_fallback() {
        let html = r#"<article><a href="/news/1">Новость без раздела публикаций на сайте</a></article>"#;
        assert!(TOURISTER.extract(html, LIST_URL).is_empty());
    }
}
