//! Canonical schema constants for structured logging
//!
//! These constants keep field keys and event names consistent across all
//! operations, so log consumers never chase spelling drift.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_QUERY_ID: &str = "query_id";
pub const FIELD_STUDENT_ID: &str = "student_id";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_RESPONSE_COUNT: &str = "response_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
