use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::QueryDeskError;

/// Lifecycle status of a query
///
/// Every query starts in `Pending`. The transition table is intentionally
/// permissive: any enumerated status may move to any enumerated status,
/// including re-opening a closed query (`Closed` back to `Pending`) and
/// self-transitions. Membership in this set is the only rule the engine
/// enforces; a string outside the set is rejected with `InvalidStatus`
/// before any record is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryStatus {
    /// Submitted, not yet picked up by a reviewer
    Pending,
    /// A reviewer is actively working the query
    InProgress,
    /// At least one response has been recorded
    Answered,
    /// Reviewed and declined
    Rejected,
    /// Lifecycle finished; the response log is retained
    Closed,
}

impl QueryStatus {
    /// Canonical name of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStatus::Pending => "Pending",
            QueryStatus::InProgress => "InProgress",
            QueryStatus::Answered => "Answered",
            QueryStatus::Rejected => "Rejected",
            QueryStatus::Closed => "Closed",
        }
    }

    /// All statuses in lifecycle order
    pub fn all() -> [QueryStatus; 5] {
        [
            QueryStatus::Pending,
            QueryStatus::InProgress,
            QueryStatus::Answered,
            QueryStatus::Rejected,
            QueryStatus::Closed,
        ]
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryStatus {
    type Err = QueryDeskError;

    /// Parse a status name case-insensitively
    ///
    /// `InProgress` also accepts the spaced, hyphenated, and underscored
    /// spellings legacy clients produced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(QueryStatus::Pending),
            "inprogress" | "in progress" | "in-progress" | "in_progress" => {
                Ok(QueryStatus::InProgress)
            }
            "answered" => Ok(QueryStatus::Answered),
            "rejected" => Ok(QueryStatus::Rejected),
            "closed" => Ok(QueryStatus::Closed),
            _ => Err(QueryDeskError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Status predicate for dashboard list views
///
/// `All` is the identity filter; `Only(status)` keeps exactly the queries
/// currently in that status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    All,
    Only(QueryStatus),
}

impl StatusFilter {
    /// Whether a query in `status` passes this filter
    pub fn matches(&self, status: QueryStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = QueryDeskError;

    /// Parse `"all"` (any case) or a status name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse::<QueryStatus>().map(StatusFilter::Only)
        }
    }
}
