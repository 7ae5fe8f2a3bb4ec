//! Cursor and high-water mark for a step sequence.
//!
//! `Cursor` is a plain value: every transition returns a new cursor (or
//! `None` when the transition does not apply) and never mutates in place.
//! The sequencer owns exactly one cursor and swaps it wholesale, so the
//! `(index, furthest)` pair is never observed half-updated.

use super::gate::Gate;
use serde::Serialize;

/// Current position plus the furthest position ever reached.
///
/// Invariants, given the sequence length `len` the cursor was built for:
/// - `index < len` and `furthest < len`
/// - `furthest` never decreases except through [`Cursor::new`] (reset)
///
/// # Example
///
/// ```rust
/// use stepwise::core::{Cursor, Gate};
///
/// let cursor = Cursor::new(0);
/// let cursor = cursor.advance(4).unwrap();
/// assert_eq!(cursor.index(), 1);
/// assert_eq!(cursor.furthest(), 1);
///
/// let cursor = cursor.retreat().unwrap();
/// assert_eq!(cursor.index(), 0);
/// assert_eq!(cursor.furthest(), 1);
///
/// // Linear gating allows one step beyond the furthest visited.
/// assert!(cursor.jump(2, Gate::Linear).is_some());
/// assert!(cursor.jump(3, Gate::Linear).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Cursor {
    index: usize,
    furthest: usize,
}

impl Cursor {
    /// Cursor parked at `start`, with the high-water mark collapsed onto it.
    pub fn new(start: usize) -> Self {
        Self {
            index: start,
            furthest: start,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn furthest(&self) -> usize {
        self.furthest
    }

    /// Move one step forward.
    ///
    /// Returns `None` when already on the last of `len` steps.
    pub fn advance(self, len: usize) -> Option<Self> {
        let next = self.index + 1;
        if next >= len {
            return None;
        }
        Some(self.moved_to(next))
    }

    /// Move one step back. Returns `None` on the first step.
    ///
    /// The high-water mark is left untouched.
    pub fn retreat(self) -> Option<Self> {
        let prev = self.index.checked_sub(1)?;
        Some(Self {
            index: prev,
            furthest: self.furthest,
        })
    }

    /// Move to `target` if the gate permits it.
    ///
    /// `target` must already be a valid position; resolving identifiers is
    /// the caller's job.
    pub fn jump(self, target: usize, gate: Gate) -> Option<Self> {
        gate.permits(target, self.furthest).then(|| self.moved_to(target))
    }

    /// Whether `target` has been visited or is the next unvisited position.
    pub fn is_reachable(&self, target: usize) -> bool {
        Gate::Linear.permits(target, self.furthest)
    }

    fn moved_to(self, index: usize) -> Self {
        Self {
            index,
            furthest: self.furthest.max(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cursor_starts_collapsed() {
        let cursor = Cursor::new(2);
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.furthest(), 2);
    }

    #[test]
    fn advance_extends_furthest() {
        let cursor = Cursor::new(0).advance(3).unwrap().advance(3).unwrap();
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.furthest(), 2);
    }

    #[test]
    fn advance_stops_on_last() {
        let cursor = Cursor::new(2);
        assert!(cursor.advance(3).is_none());
    }

    #[test]
    fn advance_on_single_step_sequence_is_none() {
        assert!(Cursor::new(0).advance(1).is_none());
    }

    #[test]
    fn retreat_keeps_furthest() {
        let cursor = Cursor::new(0).advance(4).unwrap().advance(4).unwrap();
        let cursor = cursor.retreat().unwrap().retreat().unwrap();
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.furthest(), 2);
    }

    #[test]
    fn retreat_from_first_is_none() {
        assert!(Cursor::new(0).retreat().is_none());
    }

    #[test]
    fn advance_after_retreat_does_not_lower_furthest() {
        let cursor = Cursor::new(0)
            .advance(4)
            .unwrap()
            .advance(4)
            .unwrap()
            .retreat()
            .unwrap()
            .advance(4)
            .unwrap();
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.furthest(), 2);
    }

    #[test]
    fn free_jump_goes_anywhere() {
        let cursor = Cursor::new(0).jump(3, Gate::Free).unwrap();
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.furthest(), 3);
    }

    #[test]
    fn backward_jump_keeps_furthest() {
        let cursor = Cursor::new(3).jump(1, Gate::Linear).unwrap();
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.furthest(), 3);
    }

    #[test]
    fn linear_jump_is_gated_on_furthest_not_index() {
        let cursor = Cursor::new(0)
            .advance(5)
            .unwrap()
            .advance(5)
            .unwrap()
            .retreat()
            .unwrap()
            .retreat()
            .unwrap();
        assert_eq!(cursor.index(), 0);

        // furthest is 2, so 3 is reachable even though index is 0
        assert_eq!(cursor.jump(3, Gate::Linear).unwrap().index(), 3);
        assert!(cursor.jump(4, Gate::Linear).is_none());
    }

    #[test]
    fn is_reachable_matches_linear_gate() {
        let cursor = Cursor::new(1);
        assert!(cursor.is_reachable(0));
        assert!(cursor.is_reachable(2));
        assert!(!cursor.is_reachable(3));
    }
}
