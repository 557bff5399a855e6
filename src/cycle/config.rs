//! Cycle configuration parser
//!
//! Parses `resonance.toml` into agent and reference-collaborator
//! settings.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cycle::collaborators::Signal;

/// Agent settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentConfig {
    /// Latent state the orchestrator starts from (default: 0)
    #[serde(default)]
    pub initial_state: Signal,
}

/// Reference-collaborator settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceConfig {
    /// Multiplier applied by expansion (default: 2)
    #[serde(default = "default_gain")]
    pub gain: Signal,
    /// Modulus applied by emission (default: 256)
    #[serde(default = "default_modulus")]
    pub modulus: Signal,
}

const fn default_gain() -> Signal {
    2
}

const fn default_modulus() -> Signal {
    256
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            gain: default_gain(),
            modulus: default_modulus(),
        }
    }
}

/// Top-level configuration parsed from resonance.toml
///
/// The `feedback` key must come before the `[agent]` and `[reference]`
/// tables in the file (TOML top-level key placement).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResonanceConfig {
    /// Preset feedback queue, consumed one value per cycle
    #[serde(default)]
    pub feedback: Vec<Signal>,
    /// Agent settings
    #[serde(default)]
    pub agent: AgentConfig,
    /// Reference-collaborator settings
    #[serde(default)]
    pub reference: ReferenceConfig,
}

impl ResonanceConfig {
    /// Parse a resonance.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse resonance.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse resonance.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.reference.modulus <= 0 {
            bail!(
                "Emission modulus must be positive, got {}",
                self.reference.modulus
            );
        }
        Ok(())
    }
}
