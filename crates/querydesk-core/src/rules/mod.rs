pub mod validation;

pub use validation::{require_field, validate_new_query, validate_response_text};
