//! Pure sequence views over query slices
//!
//! Dashboards narrow and rank fetched lists locally with these helpers.
//! Every view leaves its input untouched and returns owned copies, so a
//! cached poll result can be re-narrowed any number of times.

use querydesk_core::model::{Query, StatusFilter};

/// Keep the queries passing a status filter, preserving input order
///
/// `StatusFilter::All` is the identity view.
pub fn filter_by_status(queries: &[Query], filter: &StatusFilter) -> Vec<Query> {
    queries
        .iter()
        .filter(|query| filter.matches(query.status))
        .cloned()
        .collect()
}

/// Keep the queries whose description or category name contains the term
///
/// Matching is case-insensitive substring. An empty term is the identity
/// view; whitespace terms are searched literally, not trimmed.
pub fn search_by_text(queries: &[Query], term: &str) -> Vec<Query> {
    if term.is_empty() {
        return queries.to_vec();
    }
    let needle = term.to_lowercase();
    queries
        .iter()
        .filter(|query| {
            query.description.to_lowercase().contains(&needle)
                || query.category.as_str().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// The `limit` most recently submitted queries, newest first
///
/// The sort is stable, so queries submitted at the same instant keep
/// their input order. Applying the view to its own output returns the
/// same sequence.
pub fn most_recent(queries: &[Query], limit: usize) -> Vec<Query> {
    let mut ranked = queries.to_vec();
    ranked.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    ranked.truncate(limit);
    ranked
}
