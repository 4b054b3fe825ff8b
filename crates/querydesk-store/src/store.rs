use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use querydesk_core::errors::{QueryDeskError, Result};
use querydesk_core::model::{NewQuery, Query};
use querydesk_core::rules::validation::validate_new_query;

use crate::filter::QueryFilter;

/// One stored record with its insertion sequence number
struct Slot {
    seq: u64,
    record: Mutex<Query>,
}

/// Thread-safe in-memory store for query records
///
/// Each record lives behind its own mutex, under a read-write-locked map.
/// `update` holds the map read lock plus the record mutex for the whole
/// mutation, so updates to one id serialize while updates to different
/// ids run on independent mutexes. `create` and `delete` take the map
/// write lock, which waits out in-flight updates before the map changes
/// shape; an update can therefore never land on a removed record.
pub struct QueryStore {
    slots: RwLock<HashMap<String, Slot>>,
    next_seq: AtomicU64,
}

// Committed state is always whole: mutations land as a full-record swap,
// so a poisoned guard still holds a consistent record.
fn read_slots(slots: &RwLock<HashMap<String, Slot>>) -> RwLockReadGuard<'_, HashMap<String, Slot>> {
    slots.read().unwrap_or_else(|e| e.into_inner())
}

fn write_slots(
    slots: &RwLock<HashMap<String, Slot>>,
) -> RwLockWriteGuard<'_, HashMap<String, Slot>> {
    slots.write().unwrap_or_else(|e| e.into_inner())
}

fn lock_record(record: &Mutex<Query>) -> MutexGuard<'_, Query> {
    record.lock().unwrap_or_else(|e| e.into_inner())
}

impl QueryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Create a query record from a draft
    ///
    /// Validates the draft, assigns a fresh UUID v7 id, fills the
    /// submission time with the current instant when the draft leaves it
    /// unset, and stores the record in the initial `Pending` state with an
    /// empty response log. Nothing is stored when validation fails.
    ///
    /// # Errors
    /// Returns `MissingField` if `student_id` or `description` is empty.
    pub fn create(&self, draft: NewQuery) -> Result<Query> {
        validate_new_query(&draft)?;

        let id = Uuid::now_v7().to_string();
        let submitted_at = draft.submitted_at.unwrap_or_else(Utc::now);
        let query = Query::new(
            id,
            draft.student_id,
            submitted_at,
            draft.category,
            draft.description,
        );

        let mut slots = write_slots(&self.slots);
        // Sequence numbers are taken under the write lock, so insertion
        // order and sequence order agree.
        let slot = Slot {
            seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
            record: Mutex::new(query.clone()),
        };
        slots.insert(query.id.clone(), slot);
        debug!(query_id = %query.id, student_id = %query.student_id, "query record created");

        Ok(query)
    }

    /// Read one record by id
    ///
    /// # Errors
    /// Returns `QueryNotFound` if no record has this id.
    pub fn get(&self, id: &str) -> Result<Query> {
        let slots = read_slots(&self.slots);
        let slot = slots.get(id).ok_or_else(|| QueryDeskError::QueryNotFound {
            query_id: id.to_string(),
        })?;
        let query = lock_record(&slot.record).clone();
        Ok(query)
    }

    /// List records matching a filter, in insertion order
    ///
    /// Every call re-evaluates against current state; nothing is cached
    /// between calls.
    pub fn list(&self, filter: &QueryFilter) -> Vec<Query> {
        let slots = read_slots(&self.slots);
        let mut entries: Vec<(u64, Query)> = slots
            .values()
            .map(|slot| (slot.seq, lock_record(&slot.record).clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries
            .into_iter()
            .map(|(_, query)| query)
            .filter(|query| filter.matches(query))
            .collect()
    }

    /// Apply a mutation to exactly one record and return the updated copy
    ///
    /// The mutator runs on a scratch copy; the stored record is replaced
    /// only after it returns, so a panicking mutator leaves the record as
    /// it was. The record mutex is held across the whole mutation, which
    /// serializes concurrent updates to the same id.
    ///
    /// # Errors
    /// Returns `QueryNotFound` if no record has this id.
    pub fn update<F>(&self, id: &str, mutate: F) -> Result<Query>
    where
        F: FnOnce(&mut Query),
    {
        let slots = read_slots(&self.slots);
        let slot = slots.get(id).ok_or_else(|| QueryDeskError::QueryNotFound {
            query_id: id.to_string(),
        })?;

        let mut record = lock_record(&slot.record);
        let mut next = record.clone();
        mutate(&mut next);
        *record = next;

        Ok(record.clone())
    }

    /// Remove one record permanently
    ///
    /// Removal is hard: the record and its response log are gone, and a
    /// repeated delete of the same id fails. Ids are never reused.
    ///
    /// # Errors
    /// Returns `QueryNotFound` if no record has this id.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut slots = write_slots(&self.slots);
        match slots.remove(id) {
            Some(_) => {
                debug!(query_id = %id, "query record deleted");
                Ok(())
            }
            None => Err(QueryDeskError::QueryNotFound {
                query_id: id.to_string(),
            }),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        read_slots(&self.slots).len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QueryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use querydesk_core::model::{QueryCategory, QueryStatus};

    fn draft(student_id: &str, description: &str) -> NewQuery {
        NewQuery::new(student_id, QueryCategory::Hostel, description)
    }

    #[test]
    fn test_create_assigns_id_and_pending_status() {
        let store = QueryStore::new();
        let query = store.create(draft("student-1", "No hot water")).unwrap();

        assert!(!query.id.is_empty());
        assert_eq!(query.status, QueryStatus::Pending);
        assert!(query.responses.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_rejects_invalid_draft_without_storing() {
        let store = QueryStore::new();
        let result = store.create(draft("", "No hot water"));

        assert!(matches!(
            result,
            Err(QueryDeskError::MissingField { field: "student_id" })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_round_trips_created_record() {
        let store = QueryStore::new();
        let created = store.create(draft("student-1", "No hot water")).unwrap();
        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_get_unknown_id_fails() {
        let store = QueryStore::new();
        let result = store.get("no-such-id");
        assert!(matches!(result, Err(QueryDeskError::QueryNotFound { .. })));
    }

    #[test]
    fn test_update_returns_mutated_copy() {
        let store = QueryStore::new();
        let created = store.create(draft("student-1", "No hot water")).unwrap();

        let updated = store
            .update(&created.id, |query| {
                query.status = QueryStatus::InProgress;
            })
            .unwrap();

        assert_eq!(updated.status, QueryStatus::InProgress);
        assert_eq!(store.get(&created.id).unwrap().status, QueryStatus::InProgress);
    }

    #[test]
    fn test_delete_then_get_fails() {
        let store = QueryStore::new();
        let created = store.create(draft("student-1", "No hot water")).unwrap();

        store.delete(&created.id).unwrap();
        assert!(store.get(&created.id).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_repeated_delete_fails() {
        let store = QueryStore::new();
        let created = store.create(draft("student-1", "No hot water")).unwrap();

        store.delete(&created.id).unwrap();
        let second = store.delete(&created.id);
        assert!(matches!(second, Err(QueryDeskError::QueryNotFound { .. })));
    }
}
