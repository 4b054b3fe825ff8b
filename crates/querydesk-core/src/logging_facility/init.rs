//! Subscriber installation for the logging facility
//!
//! One process-wide subscriber, installed once. The profile picks the
//! output shape; `RUST_LOG` overrides the default filter in every
//! profile.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use super::test_capture;

/// Output profile for the process-wide subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines, `querydesk=debug` unless the environment says otherwise
    Development,
    /// JSON lines, `querydesk=info` unless the environment says otherwise
    Production,
    /// In-memory capture for test assertions
    Test,
}

static INIT_ONCE: Once = Once::new();

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the process-wide subscriber for `profile`
///
/// Call once at startup. Later calls are no-ops regardless of the
/// profile they pass, so a test harness and the code under test can both
/// call this without stepping on each other.
///
/// # Example
///
/// ```
/// use querydesk_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(filter_or("querydesk=debug"))
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter_or("querydesk=info"))
                .init();
        }
        Profile::Test => {
            // Events go to the in-memory capture instead of stdout.
            test_capture::init_test_capture();
        }
    });
}
