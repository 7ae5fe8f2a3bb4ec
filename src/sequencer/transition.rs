//! Navigation requests and their outcomes.

use crate::core::Step;
use serde::{Deserialize, Serialize};

/// A navigation request routed through [`StepSequencer::apply`].
///
/// [`StepSequencer::apply`]: crate::sequencer::StepSequencer::apply
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", rename_all = "snake_case")]
pub enum Navigation<S: Step> {
    /// Move to the next step (`next`).
    Advance,

    /// Move to the previous step (`back`).
    Retreat,

    /// Move to a named step (`goTo`).
    Jump(S),

    /// Return to the initial step and forget progress.
    Reset,
}

/// Why a navigation request left the cursor where it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blocked {
    /// Retreat requested on the first step.
    AtFirst,

    /// Jump target is not part of the sequence.
    UnknownTarget,

    /// Linear mode refused a jump past `furthest + 1`.
    Gated { target: usize, furthest: usize },
}

/// What an operation did to the cursor.
///
/// Blocked requests are not errors: stale or speculative requests from the
/// UI are expected, so they report `Unchanged` and leave state alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionOutcome {
    /// The cursor was set to `to`. `from == to` is possible for jumps to the
    /// current step and for resets that land where the cursor already was.
    Moved { from: usize, to: usize },

    /// Advance was requested on the last step. The cursor did not move and
    /// the completion hook (if any) has run.
    Completed,

    /// Nothing changed.
    Unchanged(Blocked),
}

impl TransitionOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged(_))
    }

    /// The reason a request was refused, if it was.
    pub fn blocked(&self) -> Option<Blocked> {
        match self {
            Self::Unchanged(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Boxed error returned by a failing completion hook.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by sequencer operations.
#[derive(Debug, thiserror::Error)]
pub enum SequencerError {
    #[error("Completion hook failed on step '{step}'")]
    CompletionFailed {
        step: String,
        #[source]
        source: HookError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_predicates() {
        let moved = TransitionOutcome::Moved { from: 0, to: 1 };
        assert!(moved.is_moved());
        assert!(!moved.is_completed());
        assert!(moved.blocked().is_none());

        assert!(TransitionOutcome::Completed.is_completed());

        let gated = TransitionOutcome::Unchanged(Blocked::Gated {
            target: 3,
            furthest: 0,
        });
        assert!(gated.is_unchanged());
        assert_eq!(
            gated.blocked(),
            Some(Blocked::Gated {
                target: 3,
                furthest: 0
            })
        );
    }

    #[test]
    fn navigation_deserializes_from_json() {
        let nav: Navigation<String> = serde_json::from_str(r#"{"jump":"review"}"#).unwrap();
        assert_eq!(nav, Navigation::Jump("review".to_string()));

        let nav: Navigation<String> = serde_json::from_str(r#""advance""#).unwrap();
        assert_eq!(nav, Navigation::Advance);
    }

    #[test]
    fn outcome_serializes_snake_case() {
        let json = serde_json::to_string(&TransitionOutcome::Unchanged(Blocked::UnknownTarget))
            .unwrap();
        assert_eq!(json, r#"{"unchanged":"unknown_target"}"#);
    }

    #[test]
    fn completion_error_keeps_source() {
        use std::error::Error as _;

        let err = SequencerError::CompletionFailed {
            step: "confirm".to_string(),
            source: "submit failed".into(),
        };

        assert_eq!(err.to_string(), "Completion hook failed on step 'confirm'");
        assert_eq!(err.source().unwrap().to_string(), "submit failed");
    }
}
