//! Rich CLI display for cycle execution
//!
//! Renders each cycle's phase values as human-readable terminal output.
//! All output goes to stderr so stdout stays clean for the emitted
//! actions.

use colored::Colorize;

use crate::cycle::orchestrator::CycleTrace;

/// Display handler for cycle execution output
pub struct CycleDisplay {
    iteration: u32,
    input: String,
}

impl CycleDisplay {
    /// Create a new display handler for one cycle
    #[must_use]
    pub fn new(iteration: u32, input: &str) -> Self {
        Self {
            iteration,
            input: input.to_string(),
        }
    }

    /// Print the cycle header at the start of execution
    pub fn print_header(&self) {
        eprintln!(
            "\n{} {}",
            "===".bold().cyan(),
            format!("Cycle {}: {:?}", self.iteration, self.input)
                .bold()
                .cyan()
        );
        eprintln!("{}", "─".repeat(50).dimmed());
    }

    /// Render the four phases of a completed cycle
    pub fn render_trace(&self, trace: &CycleTrace) {
        eprintln!(
            "  {} ripples {} | thought {}",
            "Look In  ".blue().bold(),
            trace.ripples,
            trace.thought
        );
        eprintln!(
            "  {} prediction {}",
            "Spiral Up".magenta().bold(),
            trace.prediction
        );
        eprintln!("  {} action {}", "Flow Out ".green().bold(), trace.action);
        eprintln!(
            "  {} feedback {} | error {} | state {}",
            "Return   ".yellow().bold(),
            trace.feedback,
            trace.prediction_error,
            trace.state
        );
        eprintln!();
    }

    /// Render a failed cycle
    pub fn render_failure(&self, err: &anyhow::Error) {
        eprintln!("  {} {err:#}", "✗".red().bold());
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn sample_trace() -> CycleTrace {
        CycleTrace {
            ripples: 209,
            thought: 209,
            prediction: 418,
            action: 162,
            feedback: 10,
            prediction_error: -408,
            state: -199,
        }
    }

    #[test]
    fn test_new_display() {
        let display = CycleDisplay::new(1, "hi");
        assert_eq!(display.iteration, 1);
        assert_eq!(display.input, "hi");
    }

    // Rendering goes to stderr; these verify it doesn't panic.
    #[test]
    fn test_render_trace_no_panic() {
        let display = CycleDisplay::new(1, "hi");
        display.print_header();
        display.render_trace(&sample_trace());
    }

    #[test]
    fn test_render_failure_no_panic() {
        let display = CycleDisplay::new(3, "hi");
        display.render_failure(&anyhow!("feedback queue exhausted"));
    }
}
