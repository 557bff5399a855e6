//! JSONL (JSON Lines) logging for cycle execution history
//!
//! Provides append-only logging of cycle records to
//! `.resonance/log.jsonl`

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use crate::cycle::collaborators::Signal;

/// The full record of a single executed cycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CycleRecord {
    /// The iteration number (1-indexed)
    pub iteration: u32,
    /// ISO 8601 timestamp of when the cycle completed
    pub timestamp: DateTime<Utc>,
    /// The user input the cycle was run for
    pub input: String,
    /// Context ripples returned by retrieval
    pub ripples: Signal,
    /// Previous latent state plus ripples
    pub thought: Signal,
    /// Expanded prediction
    pub prediction: Signal,
    /// Emitted action
    pub action: Signal,
    /// Feedback signal obtained from outside
    pub feedback: Signal,
    /// Feedback minus prediction
    pub prediction_error: Signal,
    /// Latent state after integration
    pub state: Signal,
}

/// JSONL logger for cycle execution history
///
/// Provides append-only logging to `.resonance/log.jsonl`.
/// Each line is a JSON object representing a single cycle record.
pub struct JsonlLogger {
    log_path: PathBuf,
}

impl JsonlLogger {
    /// Create a new JSONL logger
    ///
    /// # Arguments
    /// * `log_dir` - Directory where log.jsonl will be stored
    ///   (typically `.resonance`)
    ///
    /// # Errors
    /// Returns an error if the log directory cannot be created
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let log_dir = log_dir.as_ref();

        // Create the log directory if it doesn't exist
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let log_path = log_dir.join("log.jsonl");

        Ok(Self { log_path })
    }

    /// Append a cycle record to the log
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be opened or created
    /// - The record cannot be serialized to JSON
    /// - Writing to the file fails
    pub fn append(&self, record: &CycleRecord) -> Result<()> {
        // Open file in append mode, create if it doesn't exist
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        let json =
            serde_json::to_string(record).context("Failed to serialize cycle record to JSON")?;

        writeln!(file, "{json}").context("Failed to write to log file")?;

        Ok(())
    }

    /// Read all cycle records from the log, in chronological order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be read
    /// - Any line cannot be parsed as valid JSON
    pub fn read_all(&self) -> Result<Vec<CycleRecord>> {
        // If log file doesn't exist yet, return empty vector
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)
            .with_context(|| format!("Failed to read log file: {}", self.log_path.display()))?;

        let mut records = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let record: CycleRecord = serde_json::from_str(line)
                .with_context(|| format!("Failed to parse line {} as JSON", line_num + 1))?;

            records.push(record);
        }

        Ok(records)
    }

    /// Get the path to the log file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
