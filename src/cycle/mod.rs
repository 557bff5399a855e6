//! Cycle management
//!
//! This module handles the collaborator capability set, cycle
//! configuration, and orchestration.

pub mod collaborators;
pub mod config;
pub mod orchestrator;
pub mod reference;
