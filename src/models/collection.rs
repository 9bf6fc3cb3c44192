//! Collection types exposed by the catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A collection universe, each mapped to the catalog's numeric identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Comics,
    Books,
}

impl CollectionKind {
    /// Numeric `universe` query value.
    pub fn universe_id(self) -> u32 {
        match self {
            CollectionKind::Comics => 6,
            CollectionKind::Books => 2,
        }
    }

    /// Label used by the site.
    pub fn label(self) -> &'static str {
        match self {
            CollectionKind::Comics => "BD",
            CollectionKind::Books => "Livres",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKind::Comics => "comics",
            CollectionKind::Books => "books",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "comics" | "bd" => Ok(CollectionKind::Comics),
            "books" | "livres" => Ok(CollectionKind::Books),
            other => Err(AppError::config(format!("Unknown collection: {other}"))),
        }
    }
}
