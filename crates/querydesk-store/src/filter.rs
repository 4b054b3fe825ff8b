use querydesk_core::model::{Query, QueryStatus};

/// Predicate set for store listings
///
/// An unset field matches every record, so `QueryFilter::all()` is the
/// identity filter. Set fields must all match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFilter {
    /// Keep only queries submitted by this student
    pub student_id: Option<String>,
    /// Keep only queries currently in this status
    pub status: Option<QueryStatus>,
}

impl QueryFilter {
    /// Match every record
    pub fn all() -> Self {
        Self::default()
    }

    /// Match one student's records
    pub fn for_student(student_id: impl Into<String>) -> Self {
        Self {
            student_id: Some(student_id.into()),
            status: None,
        }
    }

    /// Additionally require a status
    pub fn with_status(mut self, status: QueryStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether a record passes every set predicate
    pub fn matches(&self, query: &Query) -> bool {
        if let Some(student_id) = &self.student_id {
            if &query.student_id != student_id {
                return false;
            }
        }
        if let Some(status) = self.status {
            if query.status != status {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use querydesk_core::model::QueryCategory;

    fn query_for(student_id: &str, status: QueryStatus) -> Query {
        let mut query = Query::new(
            "q-1".to_string(),
            student_id.to_string(),
            Utc::now(),
            QueryCategory::Academic,
            "Sample".to_string(),
        );
        query.status = status;
        query
    }

    #[test]
    fn test_all_matches_everything() {
        let filter = QueryFilter::all();
        assert!(filter.matches(&query_for("student-1", QueryStatus::Pending)));
        assert!(filter.matches(&query_for("student-2", QueryStatus::Closed)));
    }

    #[test]
    fn test_for_student_matches_owner_only() {
        let filter = QueryFilter::for_student("student-1");
        assert!(filter.matches(&query_for("student-1", QueryStatus::Pending)));
        assert!(!filter.matches(&query_for("student-2", QueryStatus::Pending)));
    }

    #[test]
    fn test_with_status_requires_both_predicates() {
        let filter = QueryFilter::for_student("student-1").with_status(QueryStatus::Answered);
        assert!(filter.matches(&query_for("student-1", QueryStatus::Answered)));
        assert!(!filter.matches(&query_for("student-1", QueryStatus::Pending)));
        assert!(!filter.matches(&query_for("student-2", QueryStatus::Answered)));
    }
}
