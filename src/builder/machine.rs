//! Builder for constructing step sequencers.

use crate::builder::error::BuildError;
use crate::core::{Gate, Step, StepSnapshot};
use crate::sequencer::{CompletionHook, HookError, SnapshotObserver, StepSequencer};

/// Builder for constructing step sequencers with a fluent API.
pub struct StepSequencerBuilder<S: Step> {
    steps: Vec<S>,
    initial: Option<S>,
    gate: Gate,
    on_complete: Option<CompletionHook>,
    observers: Vec<SnapshotObserver<S>>,
}

impl<S: Step> StepSequencerBuilder<S> {
    /// Create a new builder over `steps` (required, non-empty).
    pub fn new<I>(steps: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<S>,
    {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
            initial: None,
            gate: Gate::Free,
            on_complete: None,
            observers: Vec::new(),
        }
    }

    /// Set the starting step. Unknown steps fall back to the first one.
    pub fn initial(mut self, step: impl Into<S>) -> Self {
        self.initial = Some(step.into());
        self
    }

    /// Set the starting step if one is given.
    pub fn initial_opt(mut self, step: Option<S>) -> Self {
        self.initial = step;
        self
    }

    /// Enable or disable linear jump gating (default: disabled).
    pub fn linear(mut self, linear: bool) -> Self {
        self.gate = Gate::from_linear(linear);
        self
    }

    pub fn gate(mut self, gate: Gate) -> Self {
        self.gate = gate;
        self
    }

    /// Run `hook` every time advance is requested on the last step.
    pub fn on_complete<F>(self, mut hook: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.try_on_complete(move || {
            hook();
            Ok::<(), HookError>(())
        })
    }

    /// Fallible completion hook. Its error is returned from `advance`.
    pub fn try_on_complete<F, E>(mut self, mut hook: F) -> Self
    where
        F: FnMut() -> Result<(), E> + Send + 'static,
        E: Into<HookError>,
    {
        let hook: CompletionHook =
            Box::new(move || -> Result<(), HookError> { hook().map_err(Into::into) });
        self.on_complete = Some(hook);
        self
    }

    /// Register an observer (optional, repeatable).
    pub fn observe<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&StepSnapshot<'_, S>) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the sequencer.
    /// Returns an error if the step list is empty.
    pub fn build(self) -> Result<StepSequencer<S>, BuildError> {
        if self.steps.is_empty() {
            return Err(BuildError::EmptySteps);
        }

        Ok(StepSequencer::from_parts(
            self.steps,
            self.initial,
            self.gate,
            self.on_complete,
            self.observers,
        ))
    }
}
