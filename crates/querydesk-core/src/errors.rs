use thiserror::Error;

/// Result type alias using QueryDeskError
pub type Result<T> = std::result::Result<T, QueryDeskError>;

/// Canonical error kind taxonomy
///
/// Every failure the engine can produce folds into exactly one of these
/// kinds. Each kind maps to a stable error code that callers can use for
/// programmatic handling, testing, and external API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input failed a field-validation rule
    Validation,
    /// The referenced query does not exist (or was already deleted)
    NotFound,
    /// Status value outside the enumerated lifecycle set
    InvalidStatus,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "ERR_VALIDATION",
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::InvalidStatus => "ERR_INVALID_STATUS",
        }
    }
}

/// Error taxonomy for QueryDesk operations
///
/// Variants carry the offending field, value, or entity id so callers can
/// report precisely. `kind()` collapses them into the canonical taxonomy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryDeskError {
    // ===== Validation Errors =====
    /// Required field is empty or whitespace-only
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Category value outside the closed category set
    #[error("Unknown category: {value}")]
    UnknownCategory { value: String },

    /// Response text is empty or whitespace-only
    #[error("Response text cannot be empty")]
    EmptyResponseText,

    // ===== Lookup Errors =====
    /// Query not found in the store
    #[error("Query not found: {query_id}")]
    QueryNotFound { query_id: String },

    // ===== Status Errors =====
    /// Status value outside the enumerated lifecycle set
    #[error("Invalid status: {value}")]
    InvalidStatus { value: String },
}

impl QueryDeskError {
    /// Get the canonical kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryDeskError::MissingField { .. } => ErrorKind::Validation,
            QueryDeskError::UnknownCategory { .. } => ErrorKind::Validation,
            QueryDeskError::EmptyResponseText => ErrorKind::Validation,
            QueryDeskError::QueryNotFound { .. } => ErrorKind::NotFound,
            QueryDeskError::InvalidStatus { .. } => ErrorKind::InvalidStatus,
        }
    }

    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
