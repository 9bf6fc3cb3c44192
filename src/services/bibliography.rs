//! Details page parsing: bibliographic fields.
//!
//! The details page lists `<span><span>Label :</span> values…</span>` pairs.
//! Labels are mapped to fields through a small rule table built from the
//! configured [`LabelVocabulary`].

use scraper::{ElementRef, Html};

use crate::models::{Bibliography, LabelVocabulary};
use crate::services::CompiledSelectors;
use crate::utils::element_text;
use crate::utils::isbn::IsbnLiterals;

/// Target of a label rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiblioField {
    /// Repeated author roles accumulate, comma separated
    Author,
    Publisher,
    Isbn,
    YearPublished,
    OriginalLanguage,
}

/// Maps a set of lowercase labels to a field.
#[derive(Debug, Clone)]
pub struct LabelRule {
    pub labels: Vec<String>,
    pub field: BiblioField,
}

impl LabelRule {
    fn new(labels: &[String], field: BiblioField) -> Self {
        Self {
            labels: labels.iter().map(|l| l.trim().to_lowercase()).collect(),
            field,
        }
    }

    fn matches(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// Rule table for a vocabulary.
pub fn label_rules(vocabulary: &LabelVocabulary) -> Vec<LabelRule> {
    vec![
        LabelRule::new(&vocabulary.author, BiblioField::Author),
        LabelRule::new(&vocabulary.publisher, BiblioField::Publisher),
        LabelRule::new(&vocabulary.isbn, BiblioField::Isbn),
        LabelRule::new(&vocabulary.publication_date, BiblioField::YearPublished),
        LabelRule::new(&vocabulary.original_language, BiblioField::OriginalLanguage),
    ]
}

/// Parser for the details page.
#[derive(Debug, Clone)]
pub struct BibliographyParser {
    selectors: CompiledSelectors,
    rules: Vec<LabelRule>,
    summary_prefix: String,
}

impl BibliographyParser {
    pub fn new(selectors: CompiledSelectors, vocabulary: &LabelVocabulary) -> Self {
        Self {
            selectors,
            rules: label_rules(vocabulary),
            summary_prefix: vocabulary.summary_prefix.clone(),
        }
    }

    pub fn parse(&self, document: &Html) -> Bibliography {
        let mut bibliography = Bibliography::default();

        if let Some(block) = document.select(&self.selectors.info_block).next() {
            for entry in child_elements(block).filter(|e| e.value().name() == "span") {
                let Some((label, value)) = label_and_value(entry) else {
                    continue;
                };
                if let Some(rule) = self.rules.iter().find(|r| r.matches(&label)) {
                    apply(&mut bibliography, rule.field, value);
                }
            }
        }

        bibliography.summary = document
            .select(&self.selectors.summary)
            .next()
            .map(|p| self.clean_summary(&element_text(&p)))
            .filter(|s| !s.is_empty());

        bibliography
    }

    fn clean_summary(&self, text: &str) -> String {
        text.strip_prefix(self.summary_prefix.as_str())
            .unwrap_or(text)
            .trim()
            .to_string()
    }
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Lowercased label and comma-joined values of one entry span.
fn label_and_value(entry: ElementRef<'_>) -> Option<(String, String)> {
    let label_tag = entry
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "span")?;

    let label = element_text(&label_tag)
        .trim_end_matches(|c: char| c.is_whitespace() || c == ':')
        .to_lowercase();

    let values: Vec<String> = child_elements(entry)
        .filter(|e| e.id() != label_tag.id())
        .filter(|e| matches!(e.value().name(), "a" | "span"))
        .map(|e| element_text(&e).replace(',', ""))
        .filter(|text| !text.is_empty())
        .collect();

    Some((label, values.join(", ")))
}

fn apply(bibliography: &mut Bibliography, field: BiblioField, value: String) {
    match field {
        BiblioField::Author => match &mut bibliography.author {
            Some(author) if !author.is_empty() => {
                if !value.is_empty() {
                    author.push_str(", ");
                    author.push_str(&value);
                }
            }
            _ => bibliography.author = Some(value),
        },
        BiblioField::Publisher => bibliography.publisher = Some(value),
        BiblioField::Isbn => bibliography.isbn = IsbnLiterals::from_raw(&value),
        BiblioField::YearPublished => bibliography.year_published = Some(value),
        BiblioField::OriginalLanguage => bibliography.original_language = Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Bibliography {
        BibliographyParser::new(CompiledSelectors::default(), &LabelVocabulary::default())
            .parse(&Html::parse_document(html))
    }

    #[test]
    fn test_full_details_page() {
        let bib = parse(include_str!("../../tests/fixtures/details_full.html"));

        assert_eq!(
            bib.author.as_deref(),
            Some("Juan Díaz Canales, Juanjo Guarnido")
        );
        assert_eq!(bib.publisher.as_deref(), Some("Dargaud"));
        assert_eq!(
            bib.isbn.as_ref().map(|i| i.isbn13_literal()),
            Some("=\"9782205051708\"".to_string())
        );
        assert_eq!(bib.year_published.as_deref(), Some("15 novembre 2000"));
        assert_eq!(bib.original_language.as_deref(), Some("Français"));
        assert_eq!(
            bib.summary.as_deref(),
            Some("Un chat détective enquête dans une Amérique des années cinquante.")
        );
    }

    #[test]
    fn test_author_roles_accumulate_in_order() {
        let bib = parse(
            r#"<div type="default">
                 <span><span>Dessin</span><a>B</a></span>
                 <span><span>SCÉNARIO :</span><a>A</a><a>C</a></span>
                 <span><span>Auteur</span><span>D, E</span></span>
               </div>"#,
        );
        assert_eq!(bib.author.as_deref(), Some("B, A, C, D E"));
    }

    #[test]
    fn test_multiple_publishers_are_joined() {
        let bib = parse(include_str!("../../tests/fixtures/details_no_isbn.html"));
        assert_eq!(bib.publisher.as_deref(), Some("Maison X, Maison Y"));
        assert_eq!(bib.author.as_deref(), Some("Anonyme"));
        assert!(bib.isbn.is_none());
        assert!(bib.summary.is_none());
    }

    #[test]
    fn test_missing_info_block() {
        let bib = parse("<html><body><p>Rien</p></body></html>");
        assert_eq!(bib, Bibliography::default());
    }

    #[test]
    fn test_unknown_labels_and_nested_spans_ignored() {
        let bib = parse(
            r#"<div type="default">
                 <span><span>Genre :</span><a>Polar</a></span>
                 <div><span><span>ISBN</span><span>9782205123456</span></span></div>
                 <span>no label here</span>
               </div>"#,
        );
        assert_eq!(bib, Bibliography::default());
    }

    #[test]
    fn test_label_rules_are_configurable() {
        let vocabulary = LabelVocabulary {
            author: vec!["Writer".to_string()],
            ..LabelVocabulary::default()
        };
        let parser = BibliographyParser::new(CompiledSelectors::default(), &vocabulary);
        let bib = parser.parse(&Html::parse_document(
            r#"<div type="default">
                 <span><span>writer:</span><a>Alan Moore</a></span>
                 <span><span>Auteur</span><a>Ignored</a></span>
               </div>"#,
        ));
        assert_eq!(bib.author.as_deref(), Some("Alan Moore"));
    }
}
