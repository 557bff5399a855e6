//! Reference collaborators
//!
//! A deterministic bundle with toy arithmetic in every role: code-point
//! retrieval, linear expansion, modular emission, a preset feedback
//! queue, and additive integration. Used by the CLI harness and as an
//! executable description of the cycle's data flow.

use std::collections::VecDeque;

use anyhow::{bail, Result};

use crate::cycle::collaborators::{Collaborators, Signal};
use crate::cycle::config::ResonanceConfig;

/// Deterministic collaborator bundle over string inputs
#[derive(Debug)]
pub struct ReferenceCollaborators {
    gain: Signal,
    modulus: Signal,
    feedback_queue: VecDeque<Signal>,
    error_log: Vec<Signal>,
}

impl ReferenceCollaborators {
    /// Create a bundle with the default gain (2) and modulus (256) and
    /// the given preset feedback queue.
    #[must_use]
    pub fn new<I: IntoIterator<Item = Signal>>(feedback: I) -> Self {
        Self {
            gain: 2,
            modulus: 256,
            feedback_queue: feedback.into_iter().collect(),
            error_log: Vec::new(),
        }
    }

    /// Create a bundle from a parsed configuration.
    #[must_use]
    pub fn from_config(config: &ResonanceConfig) -> Self {
        Self {
            gain: config.reference.gain,
            modulus: config.reference.modulus,
            feedback_queue: config.feedback.iter().copied().collect(),
            error_log: Vec::new(),
        }
    }

    /// Prediction errors recorded by `update_weights`, oldest first.
    #[must_use]
    pub fn error_log(&self) -> &[Signal] {
        &self.error_log
    }

    /// Number of feedback values still queued.
    #[must_use]
    pub fn feedback_remaining(&self) -> usize {
        self.feedback_queue.len()
    }
}

impl Collaborators for ReferenceCollaborators {
    type Input = str;

    /// Sum of the input's Unicode code points.
    fn retrieve(&mut self, input: &str) -> Result<Signal> {
        Ok(input.chars().map(|c| Signal::from(u32::from(c))).sum())
    }

    fn expand(&mut self, thought: Signal) -> Result<Signal> {
        Ok(self.gain * thought)
    }

    /// Euclidean remainder keeps the action in `0..modulus` even when
    /// the accumulated state drives the prediction negative.
    fn emit(&mut self, prediction: Signal) -> Result<Signal> {
        Ok(prediction.rem_euclid(self.modulus))
    }

    fn obtain_feedback(&mut self) -> Result<Signal> {
        match self.feedback_queue.pop_front() {
            Some(feedback) => Ok(feedback),
            None => bail!("feedback queue exhausted"),
        }
    }

    fn update_weights(&mut self, error: Signal) -> Result<()> {
        self.error_log.push(error);
        Ok(())
    }

    fn integrate(&mut self, thought: Signal, error: Signal) -> Result<Signal> {
        Ok(thought + error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieve_sums_code_points() {
        let mut bundle = ReferenceCollaborators::new([]);
        assert_eq!(bundle.retrieve("hi").unwrap(), 104 + 105);
        assert_eq!(bundle.retrieve("bye").unwrap(), 98 + 121 + 101);
        assert_eq!(bundle.retrieve("").unwrap(), 0);
    }

    #[test]
    fn test_retrieve_handles_non_ascii() {
        let mut bundle = ReferenceCollaborators::new([]);
        // U+00E9 LATIN SMALL LETTER E WITH ACUTE
        assert_eq!(bundle.retrieve("é").unwrap(), 0xE9);
    }

    #[test]
    fn test_expand_applies_gain() {
        let mut bundle = ReferenceCollaborators::new([]);
        assert_eq!(bundle.expand(209).unwrap(), 418);
        assert_eq!(bundle.expand(-5).unwrap(), -10);
    }

    #[test]
    fn test_emit_wraps_into_modulus_range() {
        let mut bundle = ReferenceCollaborators::new([]);
        assert_eq!(bundle.emit(418).unwrap(), 162);
        assert_eq!(bundle.emit(242).unwrap(), 242);
        // Negative predictions still land in 0..256
        assert_eq!(bundle.emit(-1).unwrap(), 255);
    }

    #[test]
    fn test_obtain_feedback_pops_in_order() {
        let mut bundle = ReferenceCollaborators::new([10, 20]);
        assert_eq!(bundle.obtain_feedback().unwrap(), 10);
        assert_eq!(bundle.obtain_feedback().unwrap(), 20);
        assert_eq!(bundle.feedback_remaining(), 0);
    }

    #[test]
    fn test_obtain_feedback_fails_when_queue_is_empty() {
        let mut bundle = ReferenceCollaborators::new([]);
        let err = bundle.obtain_feedback().unwrap_err();
        assert!(err.to_string().contains("exhausted"));
    }

    #[test]
    fn test_update_weights_appends_to_error_log() {
        let mut bundle = ReferenceCollaborators::new([]);
        bundle.update_weights(-408).unwrap();
        bundle.update_weights(-222).unwrap();
        assert_eq!(bundle.error_log(), &[-408, -222]);
    }

    #[test]
    fn test_integrate_adds_thought_and_error() {
        let mut bundle = ReferenceCollaborators::new([]);
        assert_eq!(bundle.integrate(209, -408).unwrap(), -199);
    }

    #[test]
    fn test_from_config_picks_up_settings() {
        let config = ResonanceConfig::parse(
            r"
feedback = [1, 2, 3]

[reference]
gain = 3
modulus = 100
",
        )
        .unwrap();

        let mut bundle = ReferenceCollaborators::from_config(&config);
        assert_eq!(bundle.expand(5).unwrap(), 15);
        assert_eq!(bundle.emit(250).unwrap(), 50);
        assert_eq!(bundle.feedback_remaining(), 3);
    }
}
