//! Query Lifecycle Demonstration
//!
//! This example walks a query through the full lifecycle the service exposes.
//!
//! Key concepts illustrated:
//! 1. Submission with server-assigned ids and timestamps
//! 2. Status changes (any transition between known statuses is allowed)
//! 3. Responding (append to the log, status forced to Answered)
//! 4. Read-side views (filter, search, ranking)
//! 5. Polling synchronization for dashboards
//! 6. Error taxonomy and atomic failure

#![allow(clippy::unwrap_used, clippy::expect_used)]

use querydesk_core::logging_facility::{init, Profile};
use querydesk_core::model::{QueryStatus, StatusFilter};
use querydesk_engine::{filter_by_status, most_recent, search_by_text, PollingView, QueryService};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    println!("=== QueryDesk Lifecycle Demo ===\n");

    let service = QueryService::new();

    // ===== Part 1: Submission =====
    println!("## Part 1: Submission\n");

    let hostel = service.submit_query(
        "STU-1001",
        None,
        "hostel",
        "No hot water in block C since Tuesday",
    )?;
    println!("✓ Submitted hostel query {}", hostel.id);

    let academic = service.submit_query(
        "STU-1002",
        None,
        "Academic",
        "Midterm grade missing for CS201",
    )?;
    println!("✓ Submitted academic query {}", academic.id);

    let sports = service.submit_query(
        "STU-1001",
        None,
        "SPORTS",
        "Basketball court floodlights are out",
    )?;
    println!("✓ Submitted sports query {} (category parsed case-insensitively)", sports.id);

    assert_eq!(hostel.status, QueryStatus::Pending);
    assert!(hostel.responses.is_empty());
    println!("New queries start Pending with an empty response log");
    println!("Store now holds {} queries\n", service.list_all().len());

    // ===== Part 2: Status Changes =====
    println!("## Part 2: Status Changes\n");

    let picked_up = service.change_status(&hostel.id, "in progress")?;
    println!("✓ Hostel query moved to {}", picked_up.status);

    let rejected = service.change_status(&sports.id, "rejected")?;
    println!("✓ Sports query moved to {}", rejected.status);

    // Any transition between known statuses is accepted, so a rejected
    // query can be reopened without ceremony.
    let reopened = service.change_status(&sports.id, "pending")?;
    println!("✓ Sports query reopened to {}\n", reopened.status);

    // ===== Part 3: Responding =====
    println!("## Part 3: Responding\n");

    let answered = service.respond(&hostel.id, "Boiler repaired, hot water restored", "warden")?;
    println!("✓ Warden responded to hostel query");
    assert_eq!(answered.status, QueryStatus::Answered);
    assert_eq!(answered.responses.len(), 1);
    println!("Responding forces the status to {}", answered.status);

    let followed_up = service.respond(&hostel.id, "Follow-up: pressure checked today", "warden")?;
    assert_eq!(followed_up.responses.len(), 2);
    println!("The response log is append-only: {} entries\n", followed_up.responses.len());

    // ===== Part 4: Views =====
    println!("## Part 4: Views\n");

    let all = service.list_all();

    let pending = filter_by_status(&all, &StatusFilter::Only(QueryStatus::Pending));
    println!("Pending queries: {}", pending.len());

    let hits = search_by_text(&all, "floodlights");
    println!("Search for 'floodlights' found {} hit(s)", hits.len());

    let newest = most_recent(&all, 2);
    println!("Two most recent submissions:");
    for query in &newest {
        println!("  - {} ({})", query.description, query.submitted_at);
    }
    println!();

    // ===== Part 5: Polling =====
    println!("## Part 5: Polling\n");

    let mut dashboard = PollingView::for_student("STU-1001");
    let seen = dashboard.refresh(&service);
    println!("STU-1001's dashboard sees {} queries after refresh", seen.len());

    // The cache serves reads until the next poll, even while the
    // backend moves on.
    service.change_status(&sports.id, "in progress")?;
    let cached_status = dashboard
        .queries()
        .iter()
        .find(|q| q.id == sports.id)
        .unwrap()
        .status;
    println!("Cached copy still shows {} before the next poll", cached_status);

    let seen = dashboard.refresh(&service);
    let fresh_status = seen.iter().find(|q| q.id == sports.id).unwrap().status;
    println!("✓ After refresh the dashboard shows {}\n", fresh_status);

    // ===== Part 6: Errors and Deletion =====
    println!("## Part 6: Errors and Deletion\n");

    let result = service.submit_query("STU-1003", None, "cafeteria", "Menu never changes");
    assert!(result.is_err(), "Unknown category should fail");
    if let Err(err) = result {
        println!("✗ Submission rejected: {} ({})", err, err.code());
    }
    assert_eq!(service.list_all().len(), 3);
    println!("Failed submissions store nothing");

    service.delete_query(&academic.id)?;
    println!("✓ Deleted academic query {}", academic.id);

    let result = service.get_query(&academic.id);
    assert!(result.is_err(), "Deleted query should be gone");
    if let Err(err) = result {
        println!("✗ Lookup after delete: {} ({})", err, err.code());
    }
    println!();

    // ===== Summary =====
    println!("## Summary\n");
    println!("Demonstrated:");
    println!("  ✓ Submission with server-assigned ids");
    println!("  ✓ Unrestricted status transitions");
    println!("  ✓ Append-only response log forcing Answered");
    println!("  ✓ Filter, search, and recency views");
    println!("  ✓ Poll-based dashboard refresh");
    println!("  ✓ Atomic failures and hard deletion");
    println!("\nAll {} queries in final state:", service.list_all().len());
    for query in service.list_all() {
        println!("  - [{}] {} ({})", query.status, query.description, query.id);
    }

    Ok(())
}
