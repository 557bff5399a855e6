//! Resonance - Active Resonance Protocol cycle runner
//!
//! Resonance sequences a four-phase cognitive cycle (Look In, Spiral Up,
//! Flow Out, Return) over a pluggable set of collaborators, folding
//! feedback into a single latent state between cycles.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod cycle;
pub mod log;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use cli::CycleDisplay;
pub use cycle::collaborators::{Collaborators, Signal};
pub use cycle::config::ResonanceConfig;
pub use cycle::orchestrator::{CycleTrace, Orchestrator};
pub use cycle::reference::ReferenceCollaborators;
pub use log::{CycleRecord, JsonlLogger};
