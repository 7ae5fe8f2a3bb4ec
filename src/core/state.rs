//! Core Step trait for sequencer step identifiers.
//!
//! Every step in a sequence is identified by a value implementing [`Step`].
//! `String` implements it out of the box; enums can derive an implementation
//! through the [`step_enum!`](crate::step_enum) macro.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for step identifiers.
///
/// All methods are pure. Identifiers are compared with `PartialEq` when
/// resolving the initial step and jump targets, using first-match semantics.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into configuration and outcomes
/// - `PartialEq`: lookups compare identifiers by equality
/// - `Debug`: identifiers show up in diagnostics and log events
/// - `Serialize` + `Deserialize`: identifiers can be loaded from configuration
///   and shipped to a front end inside snapshots
///
/// # Example
///
/// ```rust
/// use stepwise::core::Step;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum SignupStep {
///     Account,
///     Profile,
///     Confirm,
/// }
///
/// impl Step for SignupStep {
///     fn name(&self) -> &str {
///         match self {
///             Self::Account => "account",
///             Self::Profile => "profile",
///             Self::Confirm => "confirm",
///         }
///     }
/// }
///
/// assert_eq!(SignupStep::Profile.name(), "profile");
/// ```
pub trait Step:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the step's name for display/logging.
    fn name(&self) -> &str;
}

impl Step for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// Position of the first step equal to `target`.
pub fn position_of<S: Step>(steps: &[S], target: &S) -> Option<usize> {
    steps.iter().position(|step| step == target)
}

/// Resolve the starting index for a sequence.
///
/// Falls back to `0` when `initial` is omitted or does not appear in `steps`.
pub fn resolve_initial<S: Step>(steps: &[S], initial: Option<&S>) -> usize {
    initial
        .and_then(|step| position_of(steps, step))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestStep {
        Account,
        Profile,
        Review,
        Confirm,
    }

    impl Step for TestStep {
        fn name(&self) -> &str {
            match self {
                Self::Account => "account",
                Self::Profile => "profile",
                Self::Review => "review",
                Self::Confirm => "confirm",
            }
        }
    }

    fn steps() -> Vec<TestStep> {
        vec![
            TestStep::Account,
            TestStep::Profile,
            TestStep::Review,
            TestStep::Confirm,
        ]
    }

    #[test]
    fn step_name_returns_correct_value() {
        assert_eq!(TestStep::Account.name(), "account");
        assert_eq!(TestStep::Confirm.name(), "confirm");
        assert_eq!("review".to_string().name(), "review");
    }

    #[test]
    fn position_of_finds_first_match() {
        let steps = vec!["a".to_string(), "b".to_string(), "a".to_string()];

        assert_eq!(position_of(&steps, &"a".to_string()), Some(0));
        assert_eq!(position_of(&steps, &"b".to_string()), Some(1));
        assert_eq!(position_of(&steps, &"c".to_string()), None);
    }

    #[test]
    fn resolve_initial_defaults_to_zero() {
        assert_eq!(resolve_initial(&steps(), None), 0);
    }

    #[test]
    fn resolve_initial_uses_position() {
        assert_eq!(resolve_initial(&steps(), Some(&TestStep::Review)), 2);
    }

    #[test]
    fn resolve_initial_falls_back_when_missing() {
        let steps = vec![TestStep::Account, TestStep::Profile];
        assert_eq!(resolve_initial(&steps, Some(&TestStep::Confirm)), 0);
    }

    #[test]
    fn step_serializes_correctly() {
        let step = TestStep::Profile;
        let json = serde_json::to_string(&step).unwrap();
        let deserialized: TestStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, deserialized);
    }
}
