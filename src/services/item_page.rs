//! Item page parsing: the user's rating and read date.

use scraper::{ElementRef, Html};

use crate::error::{AppError, Result};
use crate::models::{LabelVocabulary, ReadingStatus};
use crate::services::CompiledSelectors;
use crate::utils::dates::DateLocale;
use crate::utils::element_text;

/// Upper bound of the exported rating scale.
pub const RATING_SCALE: f64 = 5.0;

/// Parser for the rating and read-date labels of an item page.
#[derive(Debug, Clone)]
pub struct ItemPageParser {
    selectors: CompiledSelectors,
    labels: LabelVocabulary,
    dates: DateLocale,
}

impl ItemPageParser {
    pub fn new(selectors: CompiledSelectors, labels: LabelVocabulary, dates: DateLocale) -> Self {
        Self {
            selectors,
            labels,
            dates,
        }
    }

    /// Extract rating and read date.
    ///
    /// Missing labels leave the field empty. Malformed values are logged and
    /// also leave the field empty.
    pub fn parse(&self, document: &Html) -> ReadingStatus {
        let rating = self.rating_text(document).and_then(|text| {
            convert_rating(&text)
                .map_err(|e| log::warn!("Ignoring rating: {e}"))
                .ok()
        });
        let date_read = self.date_text(document).and_then(|text| {
            self.dates
                .parse(&text)
                .map_err(|e| log::warn!("Ignoring read date: {e}"))
                .ok()
        });

        ReadingStatus { rating, date_read }
    }

    /// Text of the first paragraph after the rating marker.
    fn rating_text(&self, document: &Html) -> Option<String> {
        let marker = document
            .select(&self.selectors.label_paragraph)
            .find(|p| element_text(p).contains(&self.labels.rating_marker))?;

        let marker_tag = marker.value().name();
        marker
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|sibling| sibling.value().name() == marker_tag)
            .map(|value| element_text(&value))
    }

    /// Date part of the first paragraph starting with a read-date prefix.
    fn date_text(&self, document: &Html) -> Option<String> {
        document
            .select(&self.selectors.label_paragraph)
            .find_map(|p| {
                let text = element_text(&p);
                self.labels
                    .read_date_prefixes
                    .iter()
                    .filter(|prefix| !prefix.trim().is_empty())
                    .find_map(|prefix| text.strip_prefix(prefix.as_str()))
                    .map(|rest| rest.trim().to_string())
            })
    }
}

/// Convert `"<value>/<scale>"` to the 0-5 half-integer scale.
///
/// Halves are rounded to even, so 2.5 half-steps become 2.
pub fn convert_rating(text: &str) -> Result<f64> {
    let mut parts = text.split('/');
    let (Some(value), Some(scale), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AppError::parse("rating", format!("expected value/scale, got '{text}'")));
    };

    let value = parse_number(value)?;
    let scale = parse_number(scale)?;
    if scale <= 0.0 {
        return Err(AppError::parse("rating", format!("invalid scale in '{text}'")));
    }

    let half_steps = (value / scale * RATING_SCALE * 2.0).round_ties_even();
    Ok((half_steps / 2.0).clamp(0.0, RATING_SCALE))
}

fn parse_number(s: &str) -> Result<f64> {
    let s = s.trim().replace(',', ".");
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(AppError::parse("rating", format!("'{s}' is not a number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parser() -> ItemPageParser {
        ItemPageParser::new(
            CompiledSelectors::default(),
            LabelVocabulary::default(),
            DateLocale::default(),
        )
    }

    fn parse(html: &str) -> ReadingStatus {
        parser().parse(&Html::parse_document(html))
    }

    #[test]
    fn test_convert_rating_values() {
        assert_eq!(convert_rating("8/10").unwrap(), 4.0);
        assert_eq!(convert_rating("7/10").unwrap(), 3.5);
        assert_eq!(convert_rating("10/10").unwrap(), 5.0);
        assert_eq!(convert_rating("0/10").unwrap(), 0.0);
        assert_eq!(convert_rating(" 3 / 5 ").unwrap(), 3.0);
        assert_eq!(convert_rating("7,5/10").unwrap(), 4.0);
    }

    #[test]
    fn test_convert_rating_ties_to_even() {
        // 1/4 -> 2.5 half-steps
        assert_eq!(convert_rating("1/4").unwrap(), 1.0);
        // 3/4 -> 7.5 half-steps
        assert_eq!(convert_rating("3/4").unwrap(), 4.0);
    }

    #[test]
    fn test_convert_rating_always_on_half_grid() {
        for scale in 1..=20 {
            for value in 0..=scale {
                let rating = convert_rating(&format!("{value}/{scale}")).unwrap();
                assert!((0.0..=5.0).contains(&rating));
                assert_eq!((rating * 2.0).fract(), 0.0);
                let expected = (value as f64 / scale as f64 * 10.0).round_ties_even() / 2.0;
                assert_eq!(rating, expected);
            }
        }
    }

    #[test]
    fn test_convert_rating_rejects_malformed() {
        assert!(convert_rating("8").is_err());
        assert!(convert_rating("8/10/2").is_err());
        assert!(convert_rating("huit/10").is_err());
        assert!(convert_rating("8/0").is_err());
    }

    #[test]
    fn test_rated_page() {
        let status = parse(include_str!("../../tests/fixtures/item_rated.html"));
        assert_eq!(status.rating, Some(4.0));
        assert_eq!(status.date_read, NaiveDate::from_ymd_opt(2023, 3, 12));
    }

    #[test]
    fn test_rating_skips_non_paragraph_siblings() {
        let status = parse(include_str!("../../tests/fixtures/item_half_rating.html"));
        assert_eq!(status.rating, Some(3.5));
        assert_eq!(status.date_read, None);
    }

    #[test]
    fn test_unrated_page() {
        let status = parse(include_str!("../../tests/fixtures/item_unrated.html"));
        assert_eq!(status.rating, None);
        assert_eq!(status.date_read, NaiveDate::from_ymd_opt(2021, 5, 1));
    }

    #[test]
    fn test_malformed_values_become_none() {
        let status = parse(
            r#"<div><p>Ma note</p><p>--</p></div>
               <p>Lue le 42 mars 2023</p>"#,
        );
        assert_eq!(status, ReadingStatus::default());
    }

    #[test]
    fn test_marker_without_value_paragraph() {
        let status = parse(r#"<div><p>Ma note</p></div><p>8/10</p>"#);
        assert_eq!(status.rating, None);
    }

    #[test]
    fn test_blank_read_prefix_does_not_shadow_date() {
        let mut labels = LabelVocabulary::default();
        labels.read_date_prefixes.insert(0, String::new());
        let parser = ItemPageParser::new(CompiledSelectors::default(), labels, DateLocale::default());

        let status = parser.parse(&Html::parse_document(
            r#"<div><p>Ma note</p><p>8/10</p></div><p>Lue le 3 mars 2020</p>"#,
        ));
        assert_eq!(status.rating, Some(4.0));
        assert_eq!(status.date_read, NaiveDate::from_ymd_opt(2020, 3, 3));
    }

    #[test]
    fn test_masculine_read_prefix() {
        let status = parse(r#"<p>Lu le 3 janvier 2020</p>"#);
        assert_eq!(status.date_read, NaiveDate::from_ymd_opt(2020, 1, 3));
    }
}
