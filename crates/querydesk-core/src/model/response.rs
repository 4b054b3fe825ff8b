use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One official response in a query's append-only response log
///
/// Responses are never edited, reordered, or removed once appended; a
/// correction is a new response. The timestamp is assigned by the append
/// path, never taken from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Response body (stored as written; validated non-empty after trimming)
    pub text: String,

    /// Identifier of the official who responded
    pub responded_by: String,

    /// Timestamp assigned when the response was appended
    pub responded_at: DateTime<Utc>,
}

impl Response {
    /// Create a response stamped with the current time
    pub fn new(text: impl Into<String>, responded_by: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            responded_by: responded_by.into(),
            responded_at: Utc::now(),
        }
    }
}
