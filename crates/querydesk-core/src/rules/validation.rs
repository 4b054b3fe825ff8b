use crate::errors::{QueryDeskError, Result};
use crate::model::NewQuery;

/// Require a field to be non-empty after trimming
///
/// # Errors
/// Returns `MissingField` naming the offending field.
pub fn require_field(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QueryDeskError::MissingField { field });
    }
    Ok(())
}

/// Validate a creation draft before it touches the store
///
/// Checks `student_id` and `description` for emptiness. The category is
/// already typed by the time a draft exists, and the submission time is
/// either client-supplied or filled in at creation, so neither needs a
/// rule here.
///
/// # Errors
/// Returns `MissingField` for the first empty required field.
pub fn validate_new_query(draft: &NewQuery) -> Result<()> {
    require_field(&draft.student_id, "student_id")?;
    require_field(&draft.description, "description")?;
    Ok(())
}

/// Validate response text before it is appended to a query's log
///
/// Whitespace-only text is rejected; text that survives the check is
/// stored exactly as written.
///
/// # Errors
/// Returns `EmptyResponseText` if the text trims to nothing.
pub fn validate_response_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(QueryDeskError::EmptyResponseText);
    }
    Ok(())
}
