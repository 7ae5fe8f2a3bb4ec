//! Declarative sequencer configuration.
//!
//! Hosts that describe their wizards in data (a JSON file shipped with the
//! front end, a field in a larger settings document) deserialize a
//! [`SequencerConfig`] and turn it into a builder. Hooks and observers are
//! code, not data, so they are attached to the builder afterwards.

use crate::builder::{BuildError, StepSequencerBuilder};
use crate::core::{Gate, Step};
use crate::sequencer::StepSequencer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a sequencer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid sequencer configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Serializable description of a step sequence.
///
/// # Example
///
/// ```rust
/// use stepwise::SequencerConfig;
///
/// let config: SequencerConfig<String> = SequencerConfig::from_json(
///     r#"{ "steps": ["account", "profile", "confirm"], "linear": true }"#,
/// )
/// .unwrap();
///
/// let wizard = config.build().unwrap();
/// assert!(wizard.is_linear());
/// assert_eq!(wizard.current(), "account");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SequencerConfig<S: Step> {
    /// Ordered step identifiers (required, non-empty)
    pub steps: Vec<S>,

    /// Starting step; unknown values fall back to the first step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<S>,

    /// Restrict jumps to visited steps plus the next unvisited one
    #[serde(default)]
    pub linear: bool,
}

impl<S: Step> SequencerConfig<S> {
    pub fn new(steps: Vec<S>) -> Self {
        Self {
            steps,
            initial: None,
            linear: false,
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn gate(&self) -> Gate {
        Gate::from_linear(self.linear)
    }

    /// Turn the configuration into a builder so hooks and observers can be
    /// attached before building.
    pub fn into_builder(self) -> StepSequencerBuilder<S> {
        StepSequencerBuilder::new(self.steps)
            .initial_opt(self.initial)
            .gate(Gate::from_linear(self.linear))
    }

    pub fn build(self) -> Result<StepSequencer<S>, BuildError> {
        self.into_builder().build()
    }
}

/// Parse and build in one go.
pub fn load_json<S: Step>(json: &str) -> Result<StepSequencer<S>, ConfigError> {
    Ok(SequencerConfig::from_json(json)?.build()?)
}
