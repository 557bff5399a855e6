//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use chrono::Utc;

use crate::log::jsonl::CycleRecord;

/// Create a minimal `CycleRecord` for testing with zeroed phase values.
#[must_use]
pub fn make_test_record(iteration: u32, input: &str, action: i64) -> CycleRecord {
    CycleRecord {
        iteration,
        timestamp: Utc::now(),
        input: input.to_string(),
        ripples: 0,
        thought: 0,
        prediction: 0,
        action,
        feedback: 0,
        prediction_error: 0,
        state: 0,
    }
}
