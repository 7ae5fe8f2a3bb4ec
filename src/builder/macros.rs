//! Macros for ergonomic step definitions.

/// Generate a step enum with a `Step` implementation.
///
/// Variants are named after themselves and listed, in declaration order, in
/// an associated `ALL` constant that can seed a sequencer.
///
/// The generated enum derives `serde::Serialize` and `serde::Deserialize`,
/// so the calling crate must depend on `serde` with the `derive` feature:
///
/// ```toml
/// [dependencies]
/// serde = { version = "1.0", features = ["derive"] }
/// ```
///
/// # Example
///
/// ```
/// use stepwise::{step_enum, StepSequencer};
/// use stepwise::core::Step;
///
/// step_enum! {
///     pub enum Onboarding {
///         Account,
///         Profile,
///         Review,
///         Confirm,
///     }
/// }
///
/// let mut wizard = StepSequencer::<Onboarding>::new(Onboarding::ALL.to_vec()).unwrap();
/// wizard.advance().unwrap();
/// assert_eq!(wizard.current(), &Onboarding::Profile);
/// assert_eq!(wizard.current().name(), "Profile");
/// ```
#[macro_export]
macro_rules! step_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every step, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::Step for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
