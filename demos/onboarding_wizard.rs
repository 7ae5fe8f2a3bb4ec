//! Onboarding Wizard
//!
//! This example walks a free-navigation wizard from start to finish.
//!
//! Key concepts:
//! - Enum steps via `step_enum!`
//! - Observers receiving a snapshot after every operation
//! - Completion reported through the returned outcome and the hook
//!
//! Run with: cargo run --example onboarding_wizard

use stepwise::core::Step;
use stepwise::{step_enum, StepSequencer, StepSnapshot, TransitionOutcome};

step_enum! {
    enum Onboarding {
        Account,
        Profile,
        Review,
        Confirm,
    }
}

fn render(snapshot: &StepSnapshot<'_, Onboarding>) {
    let bar_width = 20;
    let filled = (snapshot.progress * bar_width as f64).round() as usize;
    println!(
        "  [{}{}] {:>3.0}%  {}",
        "#".repeat(filled),
        ".".repeat(bar_width - filled),
        snapshot.progress * 100.0,
        snapshot.current.name()
    );
}

fn main() {
    println!("=== Onboarding Wizard ===\n");

    let mut wizard = StepSequencer::<Onboarding>::builder(Onboarding::ALL.to_vec())
        .observe(render)
        .on_complete(|| println!("  -> account created"))
        .build()
        .unwrap();

    render(&wizard.snapshot());

    println!("\nForward:");
    wizard.advance().unwrap();
    wizard.advance().unwrap();

    println!("\nBack to fix the profile:");
    wizard.retreat();

    println!("\nJump straight to confirmation:");
    wizard.jump(&Onboarding::Confirm);

    println!("\nSubmit:");
    let outcome = wizard.advance().unwrap();
    assert_eq!(outcome, TransitionOutcome::Completed);

    println!("\nKey Takeaways:");
    println!("- Free mode lets jump land on any step");
    println!("- Advance on the last step stays put and reports Completed");
    println!("- Observers re-render after every operation, even no-ops");

    println!("\n=== Example Complete ===");
}
