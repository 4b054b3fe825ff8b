mod common;

use std::sync::{Arc, Barrier};
use std::thread;

use common::{draft, new_store, seed_query};
use querydesk_core::model::{QueryStatus, Response};
use querydesk_core::QueryDeskError;
use querydesk_store::{QueryFilter, QueryStore};

// ===== SAME-RECORD SERIALIZATION TESTS =====

#[test]
fn test_concurrent_appends_to_one_record_are_all_kept() {
    let store = Arc::new(new_store());
    let query = seed_query(&store, "student-1", "Wifi down in block B");

    let thread_count = 8;
    let barrier = Arc::new(Barrier::new(thread_count));
    let mut handles = Vec::new();

    for worker in 0..thread_count {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        let query_id = query.id.clone();
        handles.push(thread::spawn(move || {
            barrier.wait();
            store
                .update(&query_id, |record| {
                    record.responses.push(Response::new(
                        format!("note from worker {}", worker),
                        format!("official-{}", worker),
                    ));
                    record.status = QueryStatus::Answered;
                })
                .unwrap();
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let stored = store.get(&query.id).unwrap();
    assert_eq!(stored.response_count(), thread_count);
    assert_eq!(stored.status, QueryStatus::Answered);

    // Every worker's append survived exactly once
    for worker in 0..thread_count {
        let text = format!("note from worker {}", worker);
        let occurrences = stored.responses.iter().filter(|r| r.text == text).count();
        assert_eq!(occurrences, 1, "Append from worker {} was lost or duplicated", worker);
    }
}

#[test]
fn test_concurrent_status_writes_settle_on_one_of_them() {
    let store = Arc::new(new_store());
    let query = seed_query(&store, "student-1", "Wifi down in block B");

    let barrier = Arc::new(Barrier::new(2));
    let writers = [QueryStatus::InProgress, QueryStatus::Rejected];
    let mut handles = Vec::new();

    for status in writers {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        let query_id = query.id.clone();
        handles.push(thread::spawn(move || {
            barrier.wait();
            store
                .update(&query_id, |record| {
                    record.status = status;
                })
                .unwrap();
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let final_status = store.get(&query.id).unwrap().status;
    assert!(
        writers.contains(&final_status),
        "Final status {:?} was written by neither thread",
        final_status
    );
}

// ===== INDEPENDENT-RECORD TESTS =====

#[test]
fn test_updates_to_different_records_do_not_interfere() {
    let store = Arc::new(new_store());
    let queries: Vec<_> = (0..4)
        .map(|i| seed_query(&store, &format!("student-{}", i), "Parallel record"))
        .collect();

    let appends_per_record = 10;
    let barrier = Arc::new(Barrier::new(queries.len()));
    let mut handles = Vec::new();

    for query in &queries {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        let query_id = query.id.clone();
        handles.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..appends_per_record {
                store
                    .update(&query_id, |record| {
                        record
                            .responses
                            .push(Response::new(format!("note {}", i), "official-1"));
                    })
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    for query in &queries {
        let stored = store.get(&query.id).unwrap();
        assert_eq!(stored.response_count(), appends_per_record);
        assert_eq!(stored.student_id, query.student_id);
    }
}

#[test]
fn test_concurrent_creates_all_land() {
    let store = Arc::new(new_store());
    let thread_count = 8;
    let barrier = Arc::new(Barrier::new(thread_count));
    let mut handles = Vec::new();

    for worker in 0..thread_count {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            store
                .create(draft(
                    &format!("student-{}", worker),
                    "Created under contention",
                ))
                .unwrap()
        }));
    }

    let mut ids: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().id)
        .collect();
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), thread_count, "Ids must be unique");
    assert_eq!(store.len(), thread_count);
    assert_eq!(store.list(&QueryFilter::all()).len(), thread_count);
}

// ===== DELETE RACE TESTS =====

#[test]
fn test_delete_racing_updates_never_revives_the_record() {
    let store = Arc::new(new_store());
    let query = seed_query(&store, "student-1", "Soon to be deleted");

    let updater_count = 6;
    let barrier = Arc::new(Barrier::new(updater_count + 1));
    let mut handles = Vec::new();

    for worker in 0..updater_count {
        let store: Arc<QueryStore> = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        let query_id = query.id.clone();
        handles.push(thread::spawn(move || {
            barrier.wait();
            store.update(&query_id, |record| {
                record
                    .responses
                    .push(Response::new(format!("late note {}", worker), "official-1"));
            })
        }));
    }

    let deleter = {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        let query_id = query.id.clone();
        thread::spawn(move || {
            barrier.wait();
            store.delete(&query_id).unwrap();
        })
    };

    // Each update either landed before the delete or observed the record gone
    for handle in handles {
        match handle.join().unwrap() {
            Ok(updated) => assert_eq!(updated.id, query.id),
            Err(err) => assert!(matches!(err, QueryDeskError::QueryNotFound { .. })),
        }
    }
    deleter.join().unwrap();

    assert!(matches!(
        store.get(&query.id),
        Err(QueryDeskError::QueryNotFound { .. })
    ));
    assert!(store.is_empty());
}
