//! Resonance - Active Resonance Protocol cycle runner
//!
//! CLI entry point for the resonance orchestrator.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use resonance::cli::CycleDisplay;
use resonance::cycle::config::ResonanceConfig;
use resonance::cycle::orchestrator::{CycleTrace, Orchestrator};
use resonance::cycle::reference::ReferenceCollaborators;
use resonance::log::{CycleRecord, JsonlLogger};

/// Active Resonance Protocol cycle runner
///
/// Feeds each input through one four-phase cycle (Look In, Spiral Up,
/// Flow Out, Return) over the reference collaborators, printing the
/// emitted actions to stdout and a phase trace to stderr.
#[derive(Parser, Debug)]
#[command(name = "resonance", version, about)]
struct Cli {
    /// Input to run a cycle for (repeat for multiple cycles)
    #[arg(long = "input", required = true)]
    inputs: Vec<String>,

    /// Path to the resonance.toml configuration file
    #[arg(long, default_value = "resonance.toml")]
    config: PathBuf,

    /// Feedback values for the reference collaborators, overriding the
    /// config queue (comma-separated)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    feedback: Option<Vec<i64>>,

    /// Directory for log files (.resonance by default)
    #[arg(long, default_value = ".resonance")]
    log_dir: PathBuf,
}

/// Load the configuration, falling back to defaults when the file is absent.
fn load_config(path: &Path) -> Result<ResonanceConfig> {
    if path.exists() {
        ResonanceConfig::from_path(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))
    } else {
        Ok(ResonanceConfig::default())
    }
}

/// Build a `CycleRecord` from a completed trace for JSONL logging.
fn build_record(iteration: u32, input: &str, trace: &CycleTrace) -> CycleRecord {
    CycleRecord {
        iteration,
        timestamp: chrono::Utc::now(),
        input: input.to_string(),
        ripples: trace.ripples,
        thought: trace.thought,
        prediction: trace.prediction,
        action: trace.action,
        feedback: trace.feedback,
        prediction_error: trace.prediction_error,
        state: trace.state,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(feedback) = cli.feedback {
        config.feedback = feedback;
    }

    let collaborators = ReferenceCollaborators::from_config(&config);
    let mut orchestrator = Orchestrator::new(config.agent.initial_state, collaborators);
    let logger = JsonlLogger::new(&cli.log_dir).context("Failed to initialize JSONL logger")?;

    let mut iteration: u32 = 1;
    for input in &cli.inputs {
        let display = CycleDisplay::new(iteration, input);
        display.print_header();

        let trace = match orchestrator.run_cycle_traced(input) {
            Ok(trace) => trace,
            Err(err) => {
                display.render_failure(&err);
                return Err(err.context(format!("Cycle {iteration} ('{input}') failed")));
            }
        };

        display.render_trace(&trace);
        logger
            .append(&build_record(iteration, input, &trace))
            .context("Failed to write to JSONL log")?;

        // stdout carries only the emitted actions, one per cycle
        println!("{}", trace.action);

        iteration += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_record_copies_trace_values() {
        let trace = CycleTrace {
            ripples: 209,
            thought: 209,
            prediction: 418,
            action: 162,
            feedback: 10,
            prediction_error: -408,
            state: -199,
        };

        let record = build_record(1, "hi", &trace);
        assert_eq!(record.iteration, 1);
        assert_eq!(record.input, "hi");
        assert_eq!(record.ripples, 209);
        assert_eq!(record.thought, 209);
        assert_eq!(record.prediction, 418);
        assert_eq!(record.action, 162);
        assert_eq!(record.feedback, 10);
        assert_eq!(record.prediction_error, -408);
        assert_eq!(record.state, -199);
    }

    #[test]
    fn test_load_config_falls_back_to_defaults_when_absent() {
        let config = load_config(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config, ResonanceConfig::default());
    }

    #[test]
    fn test_cli_parses_repeated_inputs_and_feedback() {
        let cli = Cli::parse_from([
            "resonance",
            "--input",
            "hi",
            "--input",
            "bye",
            "--feedback",
            "10,-20",
        ]);
        assert_eq!(cli.inputs, vec!["hi", "bye"]);
        assert_eq!(cli.feedback, Some(vec![10, -20]));
        assert_eq!(cli.config, PathBuf::from("resonance.toml"));
        assert_eq!(cli.log_dir, PathBuf::from(".resonance"));
    }
}
