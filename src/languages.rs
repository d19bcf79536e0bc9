use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default location of the language catalog document.
pub const LANGUAGES_URL: &str =
    "https://raw.githubusercontent.com/kamranahmedse/githunt/master/src/components/filters/language-filter/languages.json";

/// Catalog value of the "no filter" sentinel entry.
pub const ALL_LANGUAGES_VALUE: &str = "all";

const ALL_LANGUAGES_TITLE: &str = "All Languages";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to fetch languages")]
    Http(#[from] reqwest::Error),
    #[error("Failed to fetch languages")]
    Status(reqwest::StatusCode),
    #[error("Failed to parse language list")]
    Parse(#[from] serde_json::Error),
}

/// Rewrites the "All Languages" entry to the fixed `"all"` sentinel value.
/// The source document ships it with an ambiguous (sometimes empty) value.
pub fn normalize(mut entry: Language) -> Language {
    if entry.title == ALL_LANGUAGES_TITLE {
        entry.value = ALL_LANGUAGES_VALUE.to_string();
    }
    entry
}

/// Normalizes every entry and drops duplicate `value`s, keeping first-seen order.
pub fn dedup_languages(raw: Vec<Language>) -> Vec<Language> {
    let mut seen: Vec<Language> = Vec::with_capacity(raw.len());
    for entry in raw.into_iter().map(normalize) {
        if !seen.iter().any(|l| l.value == entry.value) {
            seen.push(entry);
        }
    }
    seen
}

/// Loads the language catalog. Runs once per session, at startup.
pub async fn fetch_languages(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<Language>, CatalogError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(CatalogError::Status(response.status()));
    }
    let body = response.text().await?;
    let raw: Vec<Language> = serde_json::from_str(&body)?;
    Ok(dedup_languages(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(title: &str, value: &str) -> Language {
        Language {
            title: title.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn normalize_rewrites_all_languages_sentinel() {
        assert_eq!(normalize(lang("All Languages", "")).value, "all");
        assert_eq!(normalize(lang("All Languages", "bogus")).value, "all");
    }

    #[test]
    fn normalize_leaves_concrete_languages_alone() {
        assert_eq!(normalize(lang("Rust", "Rust")), lang("Rust", "Rust"));
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let raw = vec![
            lang("Go", "Go"),
            lang("Rust", "Rust"),
            lang("Go (dupe)", "Go"),
            lang("Rust", "Rust"),
        ];
        let catalog = dedup_languages(raw);
        assert_eq!(catalog, vec![lang("Go", "Go"), lang("Rust", "Rust")]);
    }

    #[test]
    fn dedup_collapses_ambiguous_all_languages_entries() {
        let raw = vec![
            lang("All Languages", ""),
            lang("All Languages", "all"),
            lang("Go", "Go"),
        ];
        let catalog = dedup_languages(raw);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0], lang("All Languages", "all"));
    }

    #[test]
    fn dedup_scenario_from_raw_document() {
        let raw = vec![
            lang("All Languages", ""),
            lang("Go", "Go"),
            lang("Go", "Go"),
        ];
        let catalog = dedup_languages(raw);
        assert_eq!(
            catalog,
            vec![lang("All Languages", "all"), lang("Go", "Go")]
        );
    }
}
