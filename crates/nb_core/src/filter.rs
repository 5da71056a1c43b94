//! Political-topic filter applied to candidate titles.

/// Keywords matched as lowercase substrings of a title.
pub const POLITICAL_KEYWORDS: &[&str] = &[
    "политика",
    "санкции",
    "президент",
    "правительство",
    "выборы",
    "протест",
    "митинг",
    "война",
    "конфликт",
    "дипломатия",
    "внешняя политика",
    "геополитика",
    "парламент",
    "депутат",
    "кремль",
    "белый дом",
    "угрозы",
    "международные отношения",
];

/// Checks `text` against the built-in keyword list.
pub fn is_political(text: &str) -> bool {
    let lowered = text.to_lowercase();
    POLITICAL_KEYWORDS.iter().any(|k| lowered.contains(k))
}
