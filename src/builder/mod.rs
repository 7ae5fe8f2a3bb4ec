//! Builder API for ergonomic sequencer construction.
//!
//! This module provides a fluent builder and a macro for creating
//! sequencers with minimal boilerplate. Validation happens eagerly in
//! `build()`, so an invalid configuration never yields a sequencer.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StepSequencerBuilder;

use crate::core::Step;
use crate::sequencer::StepSequencer;

/// Create a sequencer with linear jump gating enabled.
///
/// # Example
///
/// ```
/// use stepwise::builder::linear;
///
/// let mut checkout = linear::<String, _>(["cart", "shipping", "payment"]).unwrap();
///
/// // Payment has not been reached yet.
/// assert!(checkout.jump(&"payment".to_string()).is_unchanged());
/// ```
pub fn linear<S, I>(steps: I) -> Result<StepSequencer<S>, BuildError>
where
    S: Step,
    I: IntoIterator,
    I::Item: Into<S>,
{
    StepSequencer::builder(steps).linear(true).build()
}

/// Create a sequencer that starts at `initial` (or the first step if
/// `initial` is not part of `steps`).
///
/// # Example
///
/// ```
/// use stepwise::builder::starting_at;
///
/// let wizard = starting_at::<String, _, _>(["a", "b", "c"], "b").unwrap();
/// assert_eq!(wizard.index(), 1);
/// ```
pub fn starting_at<S, I, T>(steps: I, initial: T) -> Result<StepSequencer<S>, BuildError>
where
    S: Step,
    I: IntoIterator,
    I::Item: Into<S>,
    T: Into<S>,
{
    StepSequencer::builder(steps).initial(initial).build()
}
