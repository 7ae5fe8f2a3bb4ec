//! Build errors for step sequencers.

use thiserror::Error;

/// Errors that can occur when building a step sequencer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Step list is empty. Provide at least one step before .build()")]
    EmptySteps,
}
