//! Polling synchronization for dashboards
//!
//! The engine pushes nothing: dashboards approximate real-time by
//! re-fetching on a fixed interval and replacing their local list
//! wholesale. `PollingView` packages that contract; the caller owns the
//! schedule and drives `refresh` whenever `is_due` says the interval has
//! elapsed. Dropping the view is cancellation - the engine holds no
//! subscription state on its behalf.

use std::time::{Duration, Instant};

use querydesk_core::model::Query;

use crate::service::QueryService;

/// Refresh interval dashboards use unless tuned otherwise
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// What a polling view watches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollScope {
    /// Every query in the system (reviewer dashboards)
    AllQueries,
    /// One student's queries (student dashboards)
    Student(String),
}

/// A dashboard's locally cached list plus its refresh bookkeeping
///
/// `refresh` replaces the cached list with a fresh fetch; there is no
/// incremental merge, so deletions and external edits disappear or
/// appear wholesale. Between refreshes the cache serves reads and may be
/// stale by up to one interval.
#[derive(Debug, Clone)]
pub struct PollingView {
    scope: PollScope,
    interval: Duration,
    queries: Vec<Query>,
    last_refreshed: Option<Instant>,
}

impl PollingView {
    /// Watch every query in the system
    pub fn for_all() -> Self {
        Self {
            scope: PollScope::AllQueries,
            interval: DEFAULT_POLL_INTERVAL,
            queries: Vec::new(),
            last_refreshed: None,
        }
    }

    /// Watch one student's queries
    pub fn for_student(student_id: impl Into<String>) -> Self {
        Self {
            scope: PollScope::Student(student_id.into()),
            interval: DEFAULT_POLL_INTERVAL,
            queries: Vec::new(),
            last_refreshed: None,
        }
    }

    /// Tune the refresh interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// The scope this view watches
    pub fn scope(&self) -> &PollScope {
        &self.scope
    }

    /// The configured refresh interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The cached list from the last refresh (empty before the first)
    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// When the view last refreshed, if it ever has
    pub fn last_refreshed(&self) -> Option<Instant> {
        self.last_refreshed
    }

    /// Whether the interval has elapsed at `now`
    ///
    /// A view that has never refreshed is always due.
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_refreshed {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    /// Re-fetch and replace the cached list
    ///
    /// Always a full replacement against current state, never a merge.
    pub fn refresh(&mut self, service: &QueryService) -> &[Query] {
        self.queries = match &self.scope {
            PollScope::AllQueries => service.list_all(),
            PollScope::Student(student_id) => service.list_for_student(student_id),
        };
        self.last_refreshed = Some(Instant::now());
        &self.queries
    }
}
