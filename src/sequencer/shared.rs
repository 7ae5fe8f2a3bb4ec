//! Thread-safe handle around a sequencer.
//!
//! `StepSequencer` mutates through `&mut self`, which is enough for a single
//! owner. Hosts that dispatch navigation from several threads share a
//! `SharedSequencer` instead: every operation takes the lock for the whole
//! read-modify-write, hook and observer calls included.

use crate::core::{Step, StepSnapshot};
use crate::sequencer::machine::StepSequencer;
use crate::sequencer::transition::{Navigation, SequencerError, TransitionOutcome};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Cloneable, lock-protected handle to one [`StepSequencer`].
///
/// # Example
///
/// ```rust
/// use stepwise::{SharedSequencer, StepSequencer};
/// use std::thread;
///
/// let wizard = StepSequencer::<String>::new(["a", "b", "c", "d"]).unwrap();
/// let shared = SharedSequencer::new(wizard);
///
/// let handles: Vec<_> = (0..3)
///     .map(|_| {
///         let shared = shared.clone();
///         thread::spawn(move || shared.advance().unwrap())
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(shared.index(), 3);
/// ```
///
/// # Deadlocks
///
/// The lock is not reentrant and is held while the completion hook and the
/// observers run. A hook or observer that calls back into the same handle
/// (for example to reset the wizard on completion) deadlocks. Match on
/// [`TransitionOutcome::Completed`] after `advance` returns instead:
///
/// ```rust
/// use stepwise::{SharedSequencer, StepSequencer, TransitionOutcome};
///
/// let shared = SharedSequencer::new(StepSequencer::<String>::new(["a", "b"]).unwrap());
/// shared.advance().unwrap();
///
/// if shared.advance().unwrap() == TransitionOutcome::Completed {
///     shared.reset();
/// }
/// assert_eq!(shared.index(), 0);
/// ```
pub struct SharedSequencer<S: Step> {
    inner: Arc<Mutex<StepSequencer<S>>>,
}

impl<S: Step> Clone for SharedSequencer<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Step> SharedSequencer<S> {
    pub fn new(sequencer: StepSequencer<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sequencer)),
        }
    }

    /// Advance under the lock. The completion hook runs while it is held;
    /// see [Deadlocks](Self#deadlocks).
    pub fn advance(&self) -> Result<TransitionOutcome, SequencerError> {
        self.inner.lock().advance()
    }

    pub fn retreat(&self) -> TransitionOutcome {
        self.inner.lock().retreat()
    }

    pub fn jump(&self, target: &S) -> TransitionOutcome {
        self.inner.lock().jump(target)
    }

    pub fn reset(&self) -> TransitionOutcome {
        self.inner.lock().reset()
    }

    /// Dispatch a navigation request under the lock.
    pub fn apply(&self, navigation: Navigation<S>) -> Result<TransitionOutcome, SequencerError> {
        self.inner.lock().apply(navigation)
    }

    pub fn index(&self) -> usize {
        self.inner.lock().index()
    }

    pub fn furthest(&self) -> usize {
        self.inner.lock().furthest()
    }

    /// Clone of the current step.
    pub fn current(&self) -> S {
        self.inner.lock().current().clone()
    }

    /// Read a consistent snapshot while holding the lock.
    pub fn with_snapshot<R>(&self, read: impl FnOnce(&StepSnapshot<'_, S>) -> R) -> R {
        let guard = self.inner.lock();
        read(&guard.snapshot())
    }

    /// Lock for a batch of operations that must not interleave with others.
    pub fn lock(&self) -> MutexGuard<'_, StepSequencer<S>> {
        self.inner.lock()
    }
}

impl<S: Step> From<StepSequencer<S>> for SharedSequencer<S> {
    fn from(sequencer: StepSequencer<S>) -> Self {
        Self::new(sequencer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn shared(linear: bool) -> SharedSequencer<String> {
        StepSequencer::<String>::builder(["account", "profile", "review", "confirm"])
            .linear(linear)
            .build()
            .unwrap()
            .into()
    }

    #[test]
    fn clones_share_state() {
        let a = shared(false);
        let b = a.clone();

        a.advance().unwrap();
        assert_eq!(b.index(), 1);
        assert_eq!(b.current(), "profile");
    }

    #[test]
    fn concurrent_advances_never_skip_or_overflow() {
        let wizard = shared(false);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let wizard = wizard.clone();
                thread::spawn(move || {
                    for _ in 0..10 {
                        wizard.advance().unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(wizard.index(), 3);
        assert_eq!(wizard.furthest(), 3);
    }

    #[test]
    fn snapshot_is_consistent_under_lock() {
        let wizard = shared(true);
        wizard.advance().unwrap();

        let (index, furthest, current) =
            wizard.with_snapshot(|s| (s.index, s.furthest, s.current.clone()));
        assert_eq!((index, furthest), (1, 1));
        assert_eq!(current, "profile");
    }

    #[test]
    fn batch_operations_under_one_lock() {
        let wizard = shared(true);
        {
            let mut guard = wizard.lock();
            guard.advance().unwrap();
            guard.jump(&"review".to_string());
        }
        assert_eq!(wizard.index(), 2);
    }

    #[test]
    fn apply_through_handle() {
        let wizard = shared(true);
        let outcome = wizard.apply(Navigation::Jump("confirm".to_string())).unwrap();
        assert!(outcome.is_unchanged());
        assert_eq!(wizard.reset(), TransitionOutcome::Moved { from: 0, to: 0 });
    }

    #[test]
    fn completion_handled_after_lock_is_released() {
        let wizard = shared(false);
        let completions = Arc::new(Mutex::new(0));
        let seen = Arc::clone(&completions);
        wizard.lock().subscribe(move |snapshot| {
            if snapshot.is_last {
                *seen.lock() += 1;
            }
        });

        for _ in 0..3 {
            wizard.advance().unwrap();
        }
        let outcome = wizard.advance().unwrap();
        assert_eq!(outcome, TransitionOutcome::Completed);

        // The lock is free again, so completion logic may use the handle.
        if outcome.is_completed() {
            wizard.reset();
        }
        assert_eq!(wizard.index(), 0);
        assert_eq!(wizard.furthest(), 0);
        assert_eq!(*completions.lock(), 2);
    }
}
