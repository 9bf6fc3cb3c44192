//! Per-item export policy.
//!
//! The exporter grew out of two scripts that disagreed on a handful of
//! defaults. Both behaviours are kept as named presets of one pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Which item page is requested first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FetchOrder {
    /// Rating/date page, then the `/details` page
    #[default]
    RatingFirst,
    /// `/details` page, then the rating/date page
    DetailsFirst,
}

/// What `Date Read` becomes when the item page shows no read date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DateReadFallback {
    #[default]
    Empty,
    Today,
}

/// How `Date Added` is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DateAddedRule {
    /// The read date when known, today otherwise
    #[default]
    DateReadOrToday,
    /// Always the export date
    Today,
}

/// Field defaults and ordering applied to every exported item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPolicy {
    #[serde(default)]
    pub fetch_order: FetchOrder,

    #[serde(default)]
    pub date_read_fallback: DateReadFallback,

    #[serde(default)]
    pub date_added: DateAddedRule,

    #[serde(default = "default_read_count")]
    pub read_count: u32,

    #[serde(default)]
    pub owned_copies: u32,
}

fn default_read_count() -> u32 {
    1
}

impl Default for ItemPolicy {
    fn default() -> Self {
        ProfilePreset::Standard.policy()
    }
}

/// Named item policy presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProfilePreset {
    /// Rating page first; missing read date stays empty; added = read date or today; not owned
    #[default]
    Standard,
    /// Details page first; missing read date becomes today; added = today; one owned copy
    DetailsFirst,
}

impl ProfilePreset {
    pub fn policy(self) -> ItemPolicy {
        match self {
            ProfilePreset::Standard => ItemPolicy {
                fetch_order: FetchOrder::RatingFirst,
                date_read_fallback: DateReadFallback::Empty,
                date_added: DateAddedRule::DateReadOrToday,
                read_count: 1,
                owned_copies: 0,
            },
            ProfilePreset::DetailsFirst => ItemPolicy {
                fetch_order: FetchOrder::DetailsFirst,
                date_read_fallback: DateReadFallback::Today,
                date_added: DateAddedRule::Today,
                read_count: 1,
                owned_copies: 1,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfilePreset::Standard => "standard",
            ProfilePreset::DetailsFirst => "details-first",
        }
    }
}

impl fmt::Display for ProfilePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfilePreset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(ProfilePreset::Standard),
            "details-first" | "details_first" => Ok(ProfilePreset::DetailsFirst),
            other => Err(AppError::config(format!("Unknown profile: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_on_documented_fields() {
        let standard = ProfilePreset::Standard.policy();
        let details = ProfilePreset::DetailsFirst.policy();

        assert_eq!(standard.fetch_order, FetchOrder::RatingFirst);
        assert_eq!(details.fetch_order, FetchOrder::DetailsFirst);
        assert_eq!(standard.date_read_fallback, DateReadFallback::Empty);
        assert_eq!(details.date_read_fallback, DateReadFallback::Today);
        assert_eq!(standard.owned_copies, 0);
        assert_eq!(details.owned_copies, 1);
        assert_eq!(standard.read_count, details.read_count);
    }

    #[test]
    fn preset_from_str() {
        assert_eq!("Standard".parse::<ProfilePreset>().unwrap(), ProfilePreset::Standard);
        assert_eq!(
            "details-first".parse::<ProfilePreset>().unwrap(),
            ProfilePreset::DetailsFirst
        );
        assert!("legacy".parse::<ProfilePreset>().is_err());
    }
}
