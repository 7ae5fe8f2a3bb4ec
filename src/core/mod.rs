//! Core sequencer types and logic.
//!
//! This module contains the pure functional core of the sequencer:
//! - Step identifiers via the `Step` trait
//! - The `Cursor` value and its transition functions
//! - The `Gate` jump policy
//! - `StepSnapshot` derivation
//!
//! Nothing in this module performs side effects; hooks, observers and
//! logging live in [`crate::sequencer`].

mod cursor;
mod gate;
mod snapshot;
mod state;

pub use cursor::Cursor;
pub use gate::Gate;
pub use snapshot::{progress, StepSnapshot};
pub use state::{position_of, resolve_initial, Step};
