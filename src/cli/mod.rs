//! CLI output formatting
//!
//! Provides human-readable terminal display for cycle execution.

pub mod display;

pub use display::CycleDisplay;
