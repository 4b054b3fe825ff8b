//! QueryDesk Engine - the query service facade and synchronization layer
//!
//! This crate ties the domain model and the store into the surface
//! dashboards actually call:
//! - `QueryService`: submit, list, respond, change status, delete
//! - Pure sequence views for local narrowing (`filter_by_status`,
//!   `search_by_text`, `most_recent`)
//! - `PollingView`: the reconcile-by-replacement polling contract with
//!   its 30 second default interval
//!
//! The engine is fully synchronous and drives no timers of its own;
//! polling cadence belongs to the embedding application.

pub mod service;
pub mod sync;
pub mod views;

pub use service::QueryService;
pub use sync::{PollScope, PollingView, DEFAULT_POLL_INTERVAL};
pub use views::{filter_by_status, most_recent, search_by_text};
