//! ISBN normalization and spreadsheet-safe literals.

use serde::{Deserialize, Serialize};

/// ISBN values as digit strings.
///
/// Spreadsheet importers coerce bare digit strings to numbers and drop leading
/// zeros, so both values are written as `="<digits>"` formulas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsbnLiterals {
    pub isbn13: String,
    /// `isbn13` without its 3-character prefix and trailing check digit
    pub isbn: String,
}

impl IsbnLiterals {
    /// Build from the raw ISBN label value.
    ///
    /// Only the first comma-separated value is used. Returns `None` when it
    /// holds no characters once hyphens and spaces are removed.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let first = raw.split(',').next()?.trim();
        let isbn13: String = first
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect();
        if isbn13.is_empty() {
            return None;
        }

        let chars: Vec<char> = isbn13.chars().collect();
        let isbn = if chars.len() > 4 {
            chars[3..chars.len() - 1].iter().collect()
        } else {
            String::new()
        };

        Some(Self { isbn13, isbn })
    }

    pub fn isbn13_literal(&self) -> String {
        spreadsheet_literal(&self.isbn13)
    }

    pub fn isbn_literal(&self) -> String {
        spreadsheet_literal(&self.isbn)
    }
}

/// Wrap a value as a spreadsheet string formula: `="value"`.
pub fn spreadsheet_literal(value: &str) -> String {
    format!("=\"{value}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isbn13_literal_keeps_all_digits() {
        let isbn = IsbnLiterals::from_raw("9782205123456").unwrap();
        assert_eq!(isbn.isbn13_literal(), "=\"9782205123456\"");
    }

    #[test]
    fn isbn_drops_prefix_and_check_digit() {
        let isbn = IsbnLiterals::from_raw("9782205123456").unwrap();
        assert_eq!(isbn.isbn, "220512345");
        assert_eq!(isbn.isbn_literal(), "=\"220512345\"");
    }

    #[test]
    fn takes_first_value_and_strips_hyphens() {
        let isbn = IsbnLiterals::from_raw("978-2-8001-1234-5, 978-2-8001-9999-9").unwrap();
        assert_eq!(isbn.isbn13, "9782800112345");
    }

    #[test]
    fn keeps_leading_zeros() {
        let isbn = IsbnLiterals::from_raw("0-306-40615-2").unwrap();
        assert_eq!(isbn.isbn13_literal(), "=\"0306406152\"");
        assert_eq!(isbn.isbn, "640615");
    }

    #[test]
    fn empty_value_is_no_isbn() {
        assert_eq!(IsbnLiterals::from_raw(""), None);
        assert_eq!(IsbnLiterals::from_raw(" - , 978"), None);
    }

    #[test]
    fn short_value_has_empty_isbn() {
        let isbn = IsbnLiterals::from_raw("1234").unwrap();
        assert_eq!(isbn.isbn13, "1234");
        assert_eq!(isbn.isbn, "");
    }
}
