//! Gating policy for jumps.
//!
//! The gate is a pure predicate over `(target, furthest)`. It only ever
//! applies to jumps; advancing and retreating are never gated.

use serde::{Deserialize, Serialize};

/// Policy deciding which positions a jump may land on.
///
/// # Example
///
/// ```rust
/// use stepwise::core::Gate;
///
/// let gate = Gate::from_linear(true);
///
/// // Visited steps and the next unvisited step are allowed...
/// assert!(gate.permits(0, 1));
/// assert!(gate.permits(2, 1));
/// // ...anything further is not.
/// assert!(!gate.permits(3, 1));
///
/// assert!(Gate::Free.permits(3, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    /// Any existing step may be jumped to.
    #[default]
    Free,

    /// Only visited steps, or exactly one step past the furthest visited.
    Linear,
}

impl Gate {
    pub fn from_linear(linear: bool) -> Self {
        if linear {
            Self::Linear
        } else {
            Self::Free
        }
    }

    pub fn is_linear(self) -> bool {
        matches!(self, Self::Linear)
    }

    /// Check whether a jump to `target` is allowed given the high-water mark.
    pub fn permits(self, target: usize, furthest: usize) -> bool {
        match self {
            Self::Free => true,
            Self::Linear => target <= furthest.saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_gate_allows_everything() {
        for target in 0..10 {
            assert!(Gate::Free.permits(target, 0));
        }
    }

    #[test]
    fn linear_gate_allows_visited_and_next() {
        let gate = Gate::Linear;

        assert!(gate.permits(0, 2));
        assert!(gate.permits(2, 2));
        assert!(gate.permits(3, 2));
        assert!(!gate.permits(4, 2));
    }

    #[test]
    fn linear_gate_does_not_overflow() {
        assert!(Gate::Linear.permits(usize::MAX, usize::MAX));
    }

    #[test]
    fn from_linear_selects_policy() {
        assert_eq!(Gate::from_linear(true), Gate::Linear);
        assert_eq!(Gate::from_linear(false), Gate::Free);
        assert_eq!(Gate::default(), Gate::Free);
        assert!(Gate::Linear.is_linear());
        assert!(!Gate::Free.is_linear());
    }

    #[test]
    fn gate_is_deterministic() {
        let gate = Gate::Linear;
        assert_eq!(gate.permits(3, 1), gate.permits(3, 1));
    }
}
