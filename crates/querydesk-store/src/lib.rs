//! QueryDesk Store - thread-safe keyed storage for query records
//!
//! This crate provides the system of record for query lifecycle state:
//! - `QueryStore`: create, point-read, filtered listing, per-record atomic
//!   update, and hard delete
//! - `QueryFilter`: the predicate set accepted by listings
//!
//! Listings are insertion-ordered and recomputed against current state on
//! every call. Concurrent updates to one record serialize; updates to
//! different records proceed independently.

pub mod filter;
pub mod store;

pub use filter::QueryFilter;
pub use store::QueryStore;
