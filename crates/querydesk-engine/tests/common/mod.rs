use querydesk_core::model::Query;
use querydesk_engine::QueryService;

/// Create a service over a fresh empty store
#[allow(dead_code)]
pub fn new_service() -> QueryService {
    QueryService::new()
}

/// Submit a valid query with the store-assigned submission time
#[allow(dead_code)]
pub fn submit(
    service: &QueryService,
    student_id: &str,
    category: &str,
    description: &str,
) -> Query {
    service
        .submit_query(student_id, None, category, description)
        .expect("test submission should be valid")
}
