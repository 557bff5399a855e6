//! Cycle orchestrator
//!
//! Runs one pass of the four-phase cycle per call, threading each
//! phase's output into the next and committing the new latent state
//! only after every phase has produced its value.

use anyhow::Result;

use crate::cycle::collaborators::{Collaborators, Signal};

/// Every intermediate value produced by one completed cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTrace {
    /// Context ripples returned by retrieval
    pub ripples: Signal,
    /// Previous latent state plus ripples
    pub thought: Signal,
    /// Expanded prediction
    pub prediction: Signal,
    /// Emitted action (what [`Orchestrator::run_cycle`] returns)
    pub action: Signal,
    /// Feedback signal obtained from outside
    pub feedback: Signal,
    /// Feedback minus prediction
    pub prediction_error: Signal,
    /// Latent state after integration
    pub state: Signal,
}

/// Sequences the four-phase cycle over a collaborator bundle
///
/// Owns the latent state. Each cycle reads the state left by the
/// previous completed cycle and commits a new one exactly once, at the
/// very end; a failing collaborator aborts the cycle with the state
/// untouched. `run_cycle` takes `&mut self`, so cycles on one
/// orchestrator cannot interleave.
pub struct Orchestrator<C: Collaborators> {
    state: Signal,
    collaborators: C,
}

impl<C: Collaborators> Orchestrator<C> {
    /// Create an orchestrator with the given initial latent state
    #[must_use]
    pub const fn new(initial_state: Signal, collaborators: C) -> Self {
        Self {
            state: initial_state,
            collaborators,
        }
    }

    /// Current latent state
    #[must_use]
    pub const fn state(&self) -> Signal {
        self.state
    }

    /// Shared access to the collaborator bundle
    #[must_use]
    pub const fn collaborators(&self) -> &C {
        &self.collaborators
    }

    /// Exclusive access to the collaborator bundle
    pub fn collaborators_mut(&mut self) -> &mut C {
        &mut self.collaborators
    }

    /// Run one cycle for the given input and return the emitted action.
    pub fn run_cycle(&mut self, input: &C::Input) -> Result<Signal> {
        Ok(self.run_cycle_traced(input)?.action)
    }

    /// Run one cycle and return every intermediate phase value.
    ///
    /// Phase order is fixed: retrieve, expand, emit, `obtain_feedback`,
    /// `update_weights`, integrate. Each phase consumes the previous
    /// phase's output, so the order is a data dependency, not a
    /// convention.
    pub fn run_cycle_traced(&mut self, input: &C::Input) -> Result<CycleTrace> {
        // Phase 1: Look In
        let ripples = self.collaborators.retrieve(input)?;
        let thought = self.state + ripples;

        // Phase 2: Spiral Up
        let prediction = self.collaborators.expand(thought)?;

        // Phase 3: Flow Out
        let action = self.collaborators.emit(prediction)?;

        let feedback = self.collaborators.obtain_feedback()?;

        // Phase 4: Return
        let prediction_error = feedback - prediction;
        self.collaborators.update_weights(prediction_error)?;
        let state = self.collaborators.integrate(thought, prediction_error)?;

        // Single commit point; an error in any phase above leaves the
        // previous state in place.
        self.state = state;

        Ok(CycleTrace {
            ripples,
            thought,
            prediction,
            action,
            feedback,
            prediction_error,
            state,
        })
    }
}
