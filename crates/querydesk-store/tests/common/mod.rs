use querydesk_core::model::{NewQuery, Query, QueryCategory};
use querydesk_store::QueryStore;

/// Create a new empty store for testing
#[allow(dead_code)]
pub fn new_store() -> QueryStore {
    QueryStore::new()
}

/// Build a valid draft with the given owner and description
#[allow(dead_code)]
pub fn draft(student_id: &str, description: &str) -> NewQuery {
    NewQuery::new(student_id, QueryCategory::Academic, description)
}

/// Create a record and return the stored copy
#[allow(dead_code)]
pub fn seed_query(store: &QueryStore, student_id: &str, description: &str) -> Query {
    store
        .create(draft(student_id, description))
        .expect("seed query should be valid")
}
