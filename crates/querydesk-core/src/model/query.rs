use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::QueryCategory;
use super::response::Response;
use super::status::QueryStatus;

/// A student query and its full lifecycle state
///
/// `id`, `student_id`, `submitted_at`, `category`, and `description` are
/// fixed at creation; there is no edit operation. `status` moves through
/// the permissive lifecycle table and `responses` only ever grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Unique identifier (UUID v7, assigned by the store)
    pub id: String,

    /// Identifier of the submitting student
    pub student_id: String,

    /// When the query was submitted
    pub submitted_at: DateTime<Utc>,

    /// Topic the query is filed under
    pub category: QueryCategory,

    /// The student's written query or complaint
    pub description: String,

    /// Current lifecycle status
    pub status: QueryStatus,

    /// Append-only response log, oldest first
    pub responses: Vec<Response>,
}

impl Query {
    /// Create a new query in the initial `Pending` state with no responses
    pub fn new(
        id: String,
        student_id: String,
        submitted_at: DateTime<Utc>,
        category: QueryCategory,
        description: String,
    ) -> Self {
        Self {
            id,
            student_id,
            submitted_at,
            category,
            description,
            status: QueryStatus::Pending,
            responses: Vec::new(),
        }
    }

    /// Number of responses recorded so far
    pub fn response_count(&self) -> usize {
        self.responses.len()
    }

    /// The most recently appended response, if any
    pub fn latest_response(&self) -> Option<&Response> {
        self.responses.last()
    }

    /// Whether the query has not been closed
    pub fn is_open(&self) -> bool {
        self.status != QueryStatus::Closed
    }
}

/// Creation draft for a query
///
/// Drafts carry no id and no status; the store assigns both. A draft
/// without an explicit `submitted_at` gets the store's clock at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuery {
    pub student_id: String,
    pub submitted_at: Option<DateTime<Utc>>,
    pub category: QueryCategory,
    pub description: String,
}

impl NewQuery {
    /// Create a draft with the store-assigned submission time
    pub fn new(
        student_id: impl Into<String>,
        category: QueryCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            submitted_at: None,
            category,
            description: description.into(),
        }
    }

    /// Use the submission time the client supplied
    pub fn with_submitted_at(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.submitted_at = Some(submitted_at);
        self
    }
}
