//! Localized day-month-year date parsing.
//!
//! Month names come from configuration instead of the process locale, so
//! parsing behaves the same on every host.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::utils::normalize_whitespace;

/// Format used for `Date Read` and `Date Added`.
pub const OUTPUT_FORMAT: &str = "%Y/%m/%d";

static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?:er)?\s+(\S+)\s+(\d{4})$").expect("static date pattern")
});

/// Month-name table, January first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateLocale {
    #[serde(default = "french_months")]
    pub months: Vec<String>,
}

impl Default for DateLocale {
    fn default() -> Self {
        Self {
            months: french_months(),
        }
    }
}

fn french_months() -> Vec<String> {
    [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ]
    .iter()
    .map(|m| m.to_string())
    .collect()
}

impl DateLocale {
    /// 1-based month number for a month name, case-insensitive.
    pub fn month_number(&self, name: &str) -> Option<u32> {
        let name = name.to_lowercase();
        self.months
            .iter()
            .position(|m| m.to_lowercase() == name)
            .map(|idx| idx as u32 + 1)
    }

    /// Parse `"<day> <month name> <year>"`, e.g. `"12 mars 2023"` or `"1er mai 2021"`.
    pub fn parse(&self, text: &str) -> Result<NaiveDate> {
        let text = normalize_whitespace(text);
        let caps = DAY_MONTH_YEAR
            .captures(&text)
            .ok_or_else(|| AppError::parse("date", format!("unrecognized date '{text}'")))?;

        let day: u32 = caps[1]
            .parse()
            .map_err(|e| AppError::parse("date", format!("day in '{text}': {e}")))?;
        let month = self
            .month_number(&caps[2])
            .ok_or_else(|| AppError::parse("date", format!("unknown month in '{text}'")))?;
        let year: i32 = caps[3]
            .parse()
            .map_err(|e| AppError::parse("date", format!("year in '{text}': {e}")))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::parse("date", format!("invalid date '{text}'")))
    }
}

/// Render a date as `YYYY/MM/DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(OUTPUT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_french_dates() {
        let locale = DateLocale::default();
        let date = locale.parse("12 mars 2023").unwrap();
        assert_eq!(format_date(date), "2023/03/12");

        let date = locale.parse("3 Décembre 2019").unwrap();
        assert_eq!(format_date(date), "2019/12/03");

        let date = locale.parse("1er août 2021").unwrap();
        assert_eq!(format_date(date), "2021/08/01");
    }

    #[test]
    fn rejects_unknown_month() {
        let locale = DateLocale::default();
        assert!(matches!(
            locale.parse("12 march 2023"),
            Err(AppError::Parse { .. })
        ));
    }

    #[test]
    fn rejects_impossible_day() {
        let locale = DateLocale::default();
        assert!(locale.parse("31 février 2023").is_err());
        assert!(locale.parse("hier").is_err());
    }

    #[test]
    fn month_table_is_configurable() {
        let locale = DateLocale {
            months: [
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ]
            .iter()
            .map(|m| m.to_string())
            .collect(),
        };
        let date = locale.parse("5 july 2020").unwrap();
        assert_eq!(format_date(date), "2020/07/05");
    }
}
