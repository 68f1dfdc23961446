// Data Dragon URL templates. `cdn` is always the versioned root, e.g.
// https://ddragon.leagueoflegends.com/cdn/14.25.1

pub fn champion_url(cdn: &str, locale: &str, champion_id: &str) -> String {
    format!("{}/data/{}/champion/{}.json", cdn, locale, champion_id)
}

pub fn item_catalog_url(cdn: &str, locale: &str) -> String {
    format!("{}/data/{}/item.json", cdn, locale)
}

pub fn item_icon_url(cdn: &str, item_id: &str) -> String {
    format!("{}/img/item/{}.png", cdn, item_id)
}

/// Data Dragon ids are capitalized (`Ahri`, `MonkeyKing`); accept any casing
/// for the first letter and keep the rest as given.
pub fn normalize_champion_id(input: &str) -> String {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
