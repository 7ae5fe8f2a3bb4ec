//! Sequencer that owns a step list and drives the cursor.

use crate::builder::{BuildError, StepSequencerBuilder};
use crate::core::{position_of, resolve_initial, Cursor, Gate, Step, StepSnapshot};
use crate::sequencer::transition::{
    Blocked, HookError, Navigation, SequencerError, TransitionOutcome,
};
use std::fmt;

/// Hook invoked when advance is requested on the last step.
pub type CompletionHook = Box<dyn FnMut() -> Result<(), HookError> + Send>;

/// Callback receiving a fresh snapshot after every operation.
pub type SnapshotObserver<S> = Box<dyn FnMut(&StepSnapshot<'_, S>) + Send>;

/// State machine over an ordered list of steps.
///
/// Positions are the states; advance, retreat, jump and reset are the
/// transitions. No position is absorbing: advance on the last step reports
/// [`TransitionOutcome::Completed`] and stays put.
///
/// # Example
///
/// ```rust
/// use stepwise::{StepSequencer, TransitionOutcome};
///
/// let mut wizard = StepSequencer::<String>::builder(["account", "profile", "confirm"])
///     .build()
///     .unwrap();
///
/// assert_eq!(wizard.current(), "account");
/// wizard.advance().unwrap();
/// wizard.advance().unwrap();
/// assert!(wizard.is_last());
///
/// assert_eq!(wizard.advance().unwrap(), TransitionOutcome::Completed);
/// assert_eq!(wizard.index(), 2);
/// ```
pub struct StepSequencer<S: Step> {
    steps: Vec<S>,
    initial: Option<S>,
    gate: Gate,
    cursor: Cursor,
    on_complete: Option<CompletionHook>,
    observers: Vec<SnapshotObserver<S>>,
}

impl<S: Step> StepSequencer<S> {
    /// Start building a sequencer over `steps`.
    pub fn builder<I>(steps: I) -> StepSequencerBuilder<S>
    where
        I: IntoIterator,
        I::Item: Into<S>,
    {
        StepSequencerBuilder::new(steps)
    }

    /// Sequencer with default options: first step, no gating, no hook.
    pub fn new<I>(steps: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<S>,
    {
        Self::builder(steps).build()
    }

    /// Assemble a sequencer from validated parts. `steps` must be non-empty.
    pub(crate) fn from_parts(
        steps: Vec<S>,
        initial: Option<S>,
        gate: Gate,
        on_complete: Option<CompletionHook>,
        observers: Vec<SnapshotObserver<S>>,
    ) -> Self {
        debug_assert!(!steps.is_empty());

        let start = resolve_initial(&steps, initial.as_ref());
        if let Some(step) = initial.as_ref() {
            if position_of(&steps, step).is_none() {
                tracing::warn!(
                    initial = step.name(),
                    "initial step not found, starting at the first step"
                );
            }
        }

        tracing::debug!(
            steps = steps.len(),
            start,
            linear = gate.is_linear(),
            "step sequencer created"
        );

        Self {
            steps,
            initial,
            gate,
            cursor: Cursor::new(start),
            on_complete,
            observers,
        }
    }

    /// Register an observer that receives a snapshot after every operation.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&StepSnapshot<'_, S>) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Current snapshot (pure).
    pub fn snapshot(&self) -> StepSnapshot<'_, S> {
        StepSnapshot::derive(&self.steps, self.cursor)
    }

    pub fn current(&self) -> &S {
        &self.steps[self.cursor.index()]
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    /// Greatest position reached through advance or jump since the last reset.
    pub fn furthest(&self) -> usize {
        self.cursor.furthest()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The step list exactly as configured.
    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn is_first(&self) -> bool {
        self.snapshot().is_first
    }

    pub fn is_last(&self) -> bool {
        self.snapshot().is_last
    }

    pub fn progress(&self) -> f64 {
        self.snapshot().progress
    }

    pub fn gate(&self) -> Gate {
        self.gate
    }

    pub fn is_linear(&self) -> bool {
        self.gate.is_linear()
    }

    /// Position reset returns to.
    pub fn initial_index(&self) -> usize {
        resolve_initial(&self.steps, self.initial.as_ref())
    }

    /// First position holding `step`.
    pub fn position_of(&self, step: &S) -> Option<usize> {
        position_of(&self.steps, step)
    }

    /// Whether [`jump`](Self::jump) to `target` would move the cursor.
    pub fn can_jump(&self, target: &S) -> bool {
        self.position_of(target)
            .is_some_and(|to| self.gate.permits(to, self.cursor.furthest()))
    }

    /// Whether `index` has been visited or is the next unvisited position.
    ///
    /// Independent of the gate, so free-mode UIs can still render progress.
    pub fn is_reachable(&self, index: usize) -> bool {
        index < self.steps.len() && self.cursor.is_reachable(index)
    }

    /// Move to the next step.
    ///
    /// On the last step the cursor stays put, observers are notified, and the
    /// completion hook runs once. A failing hook is returned as
    /// [`SequencerError::CompletionFailed`]; the cursor is unchanged either way.
    pub fn advance(&mut self) -> Result<TransitionOutcome, SequencerError> {
        let from = self.cursor.index();
        let Some(next) = self.cursor.advance(self.steps.len()) else {
            tracing::debug!(step = self.current().name(), "advance on last step");
            self.notify();
            self.complete()?;
            return Ok(TransitionOutcome::Completed);
        };

        self.cursor = next;
        Ok(self.finish(
            "advance",
            TransitionOutcome::Moved {
                from,
                to: next.index(),
            },
        ))
    }

    /// Move to the previous step, stopping at the first.
    pub fn retreat(&mut self) -> TransitionOutcome {
        let from = self.cursor.index();
        let outcome = match self.cursor.retreat() {
            Some(prev) => {
                self.cursor = prev;
                TransitionOutcome::Moved {
                    from,
                    to: prev.index(),
                }
            }
            None => TransitionOutcome::Unchanged(Blocked::AtFirst),
        };
        self.finish("retreat", outcome)
    }

    /// Move to the first step equal to `target`.
    ///
    /// Unknown targets are ignored. In linear mode, targets beyond
    /// `furthest + 1` are ignored as well.
    pub fn jump(&mut self, target: &S) -> TransitionOutcome {
        let from = self.cursor.index();
        let outcome = match self.position_of(target) {
            None => TransitionOutcome::Unchanged(Blocked::UnknownTarget),
            Some(to) => match self.cursor.jump(to, self.gate) {
                Some(next) => {
                    self.cursor = next;
                    TransitionOutcome::Moved { from, to }
                }
                None => TransitionOutcome::Unchanged(Blocked::Gated {
                    target: to,
                    furthest: self.cursor.furthest(),
                }),
            },
        };
        self.finish("jump", outcome)
    }

    /// Return to the initial step and collapse the high-water mark onto it.
    pub fn reset(&mut self) -> TransitionOutcome {
        let from = self.cursor.index();
        let to = self.initial_index();
        self.cursor = Cursor::new(to);
        self.finish("reset", TransitionOutcome::Moved { from, to })
    }

    /// Dispatch a navigation request.
    pub fn apply(
        &mut self,
        navigation: Navigation<S>,
    ) -> Result<TransitionOutcome, SequencerError> {
        match navigation {
            Navigation::Advance => self.advance(),
            Navigation::Retreat => Ok(self.retreat()),
            Navigation::Jump(target) => Ok(self.jump(&target)),
            Navigation::Reset => Ok(self.reset()),
        }
    }

    fn finish(&mut self, operation: &'static str, outcome: TransitionOutcome) -> TransitionOutcome {
        match outcome {
            TransitionOutcome::Moved { from, to } => tracing::debug!(
                operation,
                from,
                to,
                furthest = self.cursor.furthest(),
                step = self.current().name(),
                "step transition"
            ),
            TransitionOutcome::Unchanged(reason) => {
                tracing::trace!(operation, ?reason, "step transition ignored")
            }
            TransitionOutcome::Completed => {}
        }
        self.notify();
        outcome
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = StepSnapshot::derive(&self.steps, self.cursor);
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }

    fn complete(&mut self) -> Result<(), SequencerError> {
        let Some(hook) = self.on_complete.as_mut() else {
            return Ok(());
        };
        if let Err(source) = hook() {
            let step = self.current().name().to_string();
            tracing::error!(step = %step, error = %source, "completion hook failed");
            return Err(SequencerError::CompletionFailed { step, source });
        }
        Ok(())
    }
}

impl<S: Step> fmt::Debug for StepSequencer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepSequencer")
            .field("steps", &self.steps)
            .field("initial", &self.initial)
            .field("gate", &self.gate)
            .field("cursor", &self.cursor)
            .field("on_complete", &self.on_complete.is_some())
            .field("observers", &self.observers.len())
            .finish()
    }
}
