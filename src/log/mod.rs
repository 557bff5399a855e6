//! Logging and observability
//!
//! This module provides JSONL logging for cycle execution history.

pub mod jsonl;

pub use jsonl::{CycleRecord, JsonlLogger};
