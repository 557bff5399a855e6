//! The collaborator capability set
//!
//! Defines the pluggable hooks the orchestrator sequences each cycle.
//! Concrete implementations supply the actual retrieval, expansion,
//! emission, feedback, and learning behavior.

use anyhow::Result;

/// The numeric representation shared by all cycle values.
///
/// State, ripples, thoughts, predictions, actions, feedback, and
/// prediction errors are all signed 64-bit scalars.
pub type Signal = i64;

/// The pluggable capability set sequenced by the orchestrator.
///
/// One implementation bundles the four collaborator roles of the Active
/// Resonance Protocol:
/// - **Reservoir**: [`retrieve`](Self::retrieve) — associative lookup (Look In)
/// - **Reactor**: [`expand`](Self::expand) — forward prediction (Spiral Up)
/// - **Aperture**: [`emit`](Self::emit) — collapses a prediction into an
///   action (Flow Out)
/// - **Loom**: [`update_weights`](Self::update_weights) and
///   [`integrate`](Self::integrate) — the Return phase
///
/// plus [`obtain_feedback`](Self::obtain_feedback), the synchronous
/// acquisition of a ground-truth signal between Flow Out and Return.
///
/// Any hook may fail; the orchestrator propagates the failure without
/// committing state.
pub trait Collaborators {
    /// The opaque user input fed into retrieval.
    type Input: ?Sized;

    /// Retrieve context ripples associated with the given input.
    fn retrieve(&mut self, input: &Self::Input) -> Result<Signal>;

    /// Expand the current thought into a prediction.
    fn expand(&mut self, thought: Signal) -> Result<Signal>;

    /// Collapse a prediction into an externally visible action.
    fn emit(&mut self, prediction: Signal) -> Result<Signal>;

    /// Obtain a feedback signal from the outside world.
    fn obtain_feedback(&mut self) -> Result<Signal>;

    /// Adjust internal parameters based on the prediction error.
    fn update_weights(&mut self, error: Signal) -> Result<()>;

    /// Fold this cycle's thought and error into the next latent state.
    fn integrate(&mut self, thought: Signal, error: Signal) -> Result<Signal>;
}
