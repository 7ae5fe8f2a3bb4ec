//! Read-only view of a sequencer.
//!
//! A snapshot is a pure projection of the step list and the cursor. It
//! borrows the step list, so `snapshot.steps` is the very slice the
//! sequencer was built with.

use super::cursor::Cursor;
use super::state::Step;
use serde::Serialize;

/// Fraction of the sequence completed at `index`.
///
/// Sequences with a single step always report `1.0`. Otherwise the result
/// is `index / (len - 1)`, exactly `0.0` on the first step and exactly
/// `1.0` on the last.
///
/// # Example
///
/// ```rust
/// use stepwise::core::progress;
///
/// assert_eq!(progress(0, 1), 1.0);
/// assert_eq!(progress(0, 4), 0.0);
/// assert_eq!(progress(3, 4), 1.0);
/// assert!((progress(1, 4) - 1.0 / 3.0).abs() < f64::EPSILON);
/// ```
pub fn progress(index: usize, len: usize) -> f64 {
    if len <= 1 {
        1.0
    } else {
        index as f64 / (len - 1) as f64
    }
}

/// Immutable snapshot handed to observers after every operation.
///
/// Serializes with camelCase field names (`isFirst`, `isLast`, ...) so it
/// can be passed straight to a web front end.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepSnapshot<'a, S: Step> {
    pub current: &'a S,
    pub index: usize,
    pub furthest: usize,
    pub steps: &'a [S],
    pub is_first: bool,
    pub is_last: bool,
    pub progress: f64,
}

impl<'a, S: Step> StepSnapshot<'a, S> {
    /// Derive a snapshot from the step list and cursor.
    ///
    /// `steps` must be non-empty and the cursor in range; the sequencer
    /// guarantees both.
    pub(crate) fn derive(steps: &'a [S], cursor: Cursor) -> Self {
        let index = cursor.index();
        let len = steps.len();
        Self {
            current: &steps[index],
            index,
            furthest: cursor.furthest(),
            steps,
            is_first: index == 0,
            is_last: index + 1 == len,
            progress: progress(index, len),
        }
    }
}

// Manual impls: deriving would require `S: Copy`.
impl<S: Step> Clone for StepSnapshot<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Step> Copy for StepSnapshot<'_, S> {}
