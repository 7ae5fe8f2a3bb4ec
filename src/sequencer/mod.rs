//! Imperative shell around the pure core.
//!
//! The sequencer owns the step list and cursor, and is the only place where
//! side effects happen:
//!
//! - **Completion hook**: runs when advance is requested on the last step
//! - **Observers**: receive a fresh snapshot after every operation
//! - **Logging**: transitions are reported through `tracing`
//!
//! Every operation also returns a [`TransitionOutcome`], so callers can
//! react to completion or refused requests without registering a hook.

mod machine;
mod shared;
mod transition;

pub use machine::{CompletionHook, SnapshotObserver, StepSequencer};
pub use shared::SharedSequencer;
pub use transition::{Blocked, HookError, Navigation, SequencerError, TransitionOutcome};
