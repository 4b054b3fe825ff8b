//! QueryDesk Core - domain model for the query lifecycle engine
//!
//! This crate provides the foundational types and rules for QueryDesk,
//! including:
//! - Query and Response models with the append-only response log
//! - The status lifecycle set with its permissive transition table
//! - The closed category set offered by the submission form
//! - Field-validation rules and the canonical error taxonomy
//! - The structured logging facility (init profiles, op macros, test capture)
//!
//! Pure logic only - shared state lives in `querydesk-store` and the
//! service facade in `querydesk-engine`.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use errors::{ErrorKind, QueryDeskError, Result};
pub use model::{NewQuery, Query, QueryCategory, QueryStatus, Response, StatusFilter};
