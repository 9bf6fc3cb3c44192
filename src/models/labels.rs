//! Label texts the item pages are matched against.

use serde::{Deserialize, Serialize};

/// Label vocabulary for the item and details pages.
///
/// Bibliographic labels are compared case-insensitively after trailing
/// spaces and colons are removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelVocabulary {
    /// Roles merged into the Author field ("auteur", "scénario", "dessin")
    #[serde(default = "defaults::author")]
    pub author: Vec<String>,

    #[serde(default = "defaults::publisher")]
    pub publisher: Vec<String>,

    #[serde(default = "defaults::isbn")]
    pub isbn: Vec<String>,

    #[serde(default = "defaults::publication_date")]
    pub publication_date: Vec<String>,

    #[serde(default = "defaults::original_language")]
    pub original_language: Vec<String>,

    /// Text of the paragraph preceding the user's rating
    #[serde(default = "defaults::rating_marker")]
    pub rating_marker: String,

    /// Prefixes of the paragraph carrying the read date
    #[serde(default = "defaults::read_date_prefixes")]
    pub read_date_prefixes: Vec<String>,

    /// Label removed from the start of the synopsis
    #[serde(default = "defaults::summary_prefix")]
    pub summary_prefix: String,
}

impl Default for LabelVocabulary {
    fn default() -> Self {
        Self {
            author: defaults::author(),
            publisher: defaults::publisher(),
            isbn: defaults::isbn(),
            publication_date: defaults::publication_date(),
            original_language: defaults::original_language(),
            rating_marker: defaults::rating_marker(),
            read_date_prefixes: defaults::read_date_prefixes(),
            summary_prefix: defaults::summary_prefix(),
        }
    }
}

mod defaults {
    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    pub fn author() -> Vec<String> {
        strings(&["auteur", "auteurs", "scénario", "dessin"])
    }
    pub fn publisher() -> Vec<String> {
        strings(&["éditeur", "éditeurs"])
    }
    pub fn isbn() -> Vec<String> {
        strings(&["isbn"])
    }
    pub fn publication_date() -> Vec<String> {
        strings(&["date de publication"])
    }
    pub fn original_language() -> Vec<String> {
        strings(&["langue d'origine"])
    }
    pub fn rating_marker() -> String {
        "Ma note".into()
    }
    pub fn read_date_prefixes() -> Vec<String> {
        strings(&["Lue le", "Lu le"])
    }
    pub fn summary_prefix() -> String {
        "Résumé :".into()
    }
}
