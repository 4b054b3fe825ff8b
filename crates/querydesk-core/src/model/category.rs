use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::QueryDeskError;

/// Topic a query is filed under
///
/// The set is closed: it mirrors the options the submission form offers.
/// Widening it is a product decision that lands here first, so boundary
/// strings outside the set fail validation instead of minting ad-hoc
/// categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryCategory {
    Academic,
    Hostel,
    Sports,
}

impl QueryCategory {
    /// Canonical name of this category
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryCategory::Academic => "Academic",
            QueryCategory::Hostel => "Hostel",
            QueryCategory::Sports => "Sports",
        }
    }

    /// All categories the submission form offers
    pub fn all() -> [QueryCategory; 3] {
        [
            QueryCategory::Academic,
            QueryCategory::Hostel,
            QueryCategory::Sports,
        ]
    }
}

impl fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryCategory {
    type Err = QueryDeskError;

    /// Parse a category name case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "academic" => Ok(QueryCategory::Academic),
            "hostel" => Ok(QueryCategory::Hostel),
            "sports" => Ok(QueryCategory::Sports),
            _ => Err(QueryDeskError::UnknownCategory {
                value: s.to_string(),
            }),
        }
    }
}
