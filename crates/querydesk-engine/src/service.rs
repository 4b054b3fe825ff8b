use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};

use querydesk_core::errors::Result;
use querydesk_core::model::{NewQuery, Query, QueryCategory, QueryStatus, Response};
use querydesk_core::rules::validation::validate_response_text;
use querydesk_core::{log_op_end, log_op_error, log_op_start};
use querydesk_store::{QueryFilter, QueryStore};

/// Facade over the query store for dashboards and transports
///
/// The service owns no state beyond the shared store handle: cloning it
/// hands another component a view of the same records. Boundary strings
/// (category, status) are parsed here, so everything behind the facade
/// works on typed values. Every mutation returns the full updated record;
/// callers refresh their local copy from the return value instead of
/// issuing a follow-up read.
#[derive(Clone)]
pub struct QueryService {
    store: Arc<QueryStore>,
}

impl QueryService {
    /// Create a service over a fresh empty store
    pub fn new() -> Self {
        Self {
            store: Arc::new(QueryStore::new()),
        }
    }

    /// Create a service over an existing store handle
    pub fn with_store(store: Arc<QueryStore>) -> Self {
        Self { store }
    }

    /// Submit a new query on behalf of a student
    ///
    /// `category` arrives as the raw form value and is parsed against the
    /// closed category set. `date` is the submission time the client
    /// supplies; when absent the store assigns the current instant. The
    /// returned record is in `Pending` with an empty response log.
    ///
    /// # Errors
    /// Returns `UnknownCategory` for a category outside the set, or
    /// `MissingField` when `student_id` or `description` is empty. Nothing
    /// is stored on failure.
    pub fn submit_query(
        &self,
        student_id: &str,
        date: Option<DateTime<Utc>>,
        category: &str,
        description: &str,
    ) -> Result<Query> {
        let started = Instant::now();
        log_op_start!("submit_query", student_id = student_id, category = category);

        let outcome = category.parse::<QueryCategory>().and_then(|category| {
            let mut draft = NewQuery::new(student_id, category, description);
            if let Some(date) = date {
                draft = draft.with_submitted_at(date);
            }
            self.store.create(draft)
        });

        match &outcome {
            Ok(query) => log_op_end!(
                "submit_query",
                duration_ms = started.elapsed().as_millis() as u64,
                query_id = query.id.as_str()
            ),
            Err(err) => log_op_error!(
                "submit_query",
                err,
                duration_ms = started.elapsed().as_millis() as u64,
                student_id = student_id
            ),
        }

        outcome
    }

    /// List one student's queries, oldest submission first
    pub fn list_for_student(&self, student_id: &str) -> Vec<Query> {
        self.store.list(&QueryFilter::for_student(student_id))
    }

    /// List every query in the system, oldest submission first
    pub fn list_all(&self) -> Vec<Query> {
        self.store.list(&QueryFilter::all())
    }

    /// Read one query by id
    ///
    /// # Errors
    /// Returns `QueryNotFound` if no record has this id.
    pub fn get_query(&self, query_id: &str) -> Result<Query> {
        self.store.get(query_id)
    }

    /// Move a query to a new lifecycle status
    ///
    /// `new_status` arrives as the raw form value. Any enumerated status
    /// may be assigned from any other, including re-opening a closed
    /// query; only strings outside the set are rejected, with the record
    /// untouched.
    ///
    /// # Errors
    /// Returns `InvalidStatus` for a status outside the set, or
    /// `QueryNotFound` if no record has this id.
    pub fn change_status(&self, query_id: &str, new_status: &str) -> Result<Query> {
        let started = Instant::now();
        log_op_start!("change_status", query_id = query_id, status = new_status);

        let outcome = new_status.parse::<QueryStatus>().and_then(|status| {
            self.store.update(query_id, |query| {
                query.status = status;
            })
        });

        match &outcome {
            Ok(query) => log_op_end!(
                "change_status",
                duration_ms = started.elapsed().as_millis() as u64,
                query_id = query.id.as_str(),
                status = query.status.as_str()
            ),
            Err(err) => log_op_error!(
                "change_status",
                err,
                duration_ms = started.elapsed().as_millis() as u64,
                query_id = query_id
            ),
        }

        outcome
    }

    /// Append an official response and mark the query answered
    ///
    /// The append and the `Answered` transition commit as one atomic
    /// update: no interleaving can observe the response without the
    /// status, or lose either under concurrent responds. The response
    /// timestamp is assigned inside the update, never taken from the
    /// caller.
    ///
    /// # Errors
    /// Returns `EmptyResponseText` if `text` trims to nothing (checked
    /// before the record is touched), or `QueryNotFound` if no record has
    /// this id.
    pub fn respond(&self, query_id: &str, text: &str, responded_by: &str) -> Result<Query> {
        let started = Instant::now();
        log_op_start!("respond", query_id = query_id);

        let outcome = validate_response_text(text).and_then(|()| {
            self.store.update(query_id, |query| {
                query.responses.push(Response::new(text, responded_by));
                query.status = QueryStatus::Answered;
            })
        });

        match &outcome {
            Ok(query) => log_op_end!(
                "respond",
                duration_ms = started.elapsed().as_millis() as u64,
                query_id = query.id.as_str(),
                response_count = query.response_count() as u64
            ),
            Err(err) => log_op_error!(
                "respond",
                err,
                duration_ms = started.elapsed().as_millis() as u64,
                query_id = query_id
            ),
        }

        outcome
    }

    /// Remove a query permanently
    ///
    /// Removal is hard and unsignalled: polling dashboards drop the
    /// record at their next refresh. A repeated delete of the same id
    /// fails.
    ///
    /// # Errors
    /// Returns `QueryNotFound` if no record has this id.
    pub fn delete_query(&self, query_id: &str) -> Result<()> {
        let started = Instant::now();
        log_op_start!("delete_query", query_id = query_id);

        let outcome = self.store.delete(query_id);

        match &outcome {
            Ok(()) => log_op_end!(
                "delete_query",
                duration_ms = started.elapsed().as_millis() as u64,
                query_id = query_id
            ),
            Err(err) => log_op_error!(
                "delete_query",
                err,
                duration_ms = started.elapsed().as_millis() as u64,
                query_id = query_id
            ),
        }

        outcome
    }
}

impl Default for QueryService {
    fn default() -> Self {
        Self::new()
    }
}
