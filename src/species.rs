// Species codes accepted by the `key` query parameter. 9 has no species.
const SPECIES: &[(i64, &str)] = &[
    (1, "アジ"),
    (2, "タチウオ"),
    (3, "イサキ"),
    (4, "カサゴ"),
    (5, "マダイ"),
    (6, "アオリイカ"),
    (7, "イシモチ"),
    (8, "クロダイ"),
    (10, "ヒイカ"),
    (11, "アイナメ"),
    (12, "サバ"),
];

/// Species name mapped to `code`, if any
pub fn lookup(code: i64) -> Option<&'static str> {
    SPECIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Species name mapped to `code`, or an empty string for unknown codes
pub fn name_for(code: i64) -> &'static str {
    lookup(code).unwrap_or_default()
}
