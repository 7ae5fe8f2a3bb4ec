//! Stepwise: a small state machine for multi-step UI flows
//!
//! Stepwise follows the "pure core, imperative shell" philosophy. Given an
//! ordered list of named steps it tracks the current step and the furthest
//! step reached, and exposes four navigation operations: advance, retreat,
//! jump and reset. All transition rules live in pure functions over a
//! [`Cursor`](core::Cursor); the [`StepSequencer`] shell owns the state and
//! runs the completion hook, observers and logging.
//!
//! # Core Concepts
//!
//! - **Step**: identifier of one position, via the `Step` trait
//! - **Cursor**: current index plus the high-water mark `furthest`
//! - **Gate**: linear mode only lets jumps land on visited steps or the next
//!   unvisited one; advance and retreat are never gated
//! - **Snapshot**: immutable read view handed to observers after every operation
//! - **Outcome**: every operation reports what it did, including completion
//!
//! # Example
//!
//! ```rust
//! use stepwise::{StepSequencer, TransitionOutcome};
//!
//! let mut wizard = StepSequencer::<String>::builder(["account", "profile", "review", "confirm"])
//!     .linear(true)
//!     .build()
//!     .unwrap();
//!
//! // Linear mode: confirm is too far ahead.
//! assert!(wizard.jump(&"confirm".to_string()).is_unchanged());
//!
//! wizard.advance().unwrap();
//! assert_eq!(wizard.current(), "profile");
//!
//! // One step beyond the furthest visited step is allowed.
//! assert!(wizard.jump(&"review".to_string()).is_moved());
//! assert_eq!(wizard.index(), 2);
//!
//! wizard.advance().unwrap();
//! assert_eq!(wizard.advance().unwrap(), TransitionOutcome::Completed);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod sequencer;

// Re-export commonly used types
pub use builder::{BuildError, StepSequencerBuilder};
pub use config::{ConfigError, SequencerConfig};
pub use core::{Cursor, Gate, Step, StepSnapshot};
pub use sequencer::{
    Blocked, Navigation, SequencerError, SharedSequencer, StepSequencer, TransitionOutcome,
};
