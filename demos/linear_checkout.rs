//! Linear Checkout
//!
//! This example demonstrates linear gating on a checkout flow loaded from
//! JSON configuration.
//!
//! Key concepts:
//! - `SequencerConfig` deserialized from data
//! - Jumps gated on the furthest visited step, not the current one
//! - Refused requests reported as `Unchanged` instead of errors
//!
//! Run with: cargo run --example linear_checkout

use stepwise::{SequencerConfig, TransitionOutcome};

const CHECKOUT: &str = r#"{
    "steps": ["cart", "shipping", "payment", "review"],
    "linear": true
}"#;

fn report(label: &str, outcome: TransitionOutcome, current: &str) {
    match outcome {
        TransitionOutcome::Moved { from, to } => {
            println!("  {label:<22} moved {from} -> {to}  (now on {current})")
        }
        TransitionOutcome::Completed => println!("  {label:<22} completed on {current}"),
        TransitionOutcome::Unchanged(reason) => {
            println!("  {label:<22} refused: {reason:?}  (still on {current})")
        }
    }
}

fn main() {
    println!("=== Linear Checkout ===\n");

    let config = SequencerConfig::<String>::from_json(CHECKOUT).unwrap();
    let mut checkout = config.build().unwrap();

    let to = |name: &str| name.to_string();

    let outcome = checkout.jump(&to("payment"));
    report("jump payment", outcome, checkout.current());

    let outcome = checkout.advance().unwrap();
    report("advance", outcome, checkout.current());

    let outcome = checkout.jump(&to("payment"));
    report("jump payment", outcome, checkout.current());

    let outcome = checkout.jump(&to("cart"));
    report("jump cart", outcome, checkout.current());

    // furthest is still "payment", so "review" is one step beyond it.
    let outcome = checkout.jump(&to("review"));
    report("jump review", outcome, checkout.current());

    let outcome = checkout.reset();
    report("reset", outcome, checkout.current());

    let outcome = checkout.jump(&to("payment"));
    report("jump payment", outcome, checkout.current());

    println!("\nKey Takeaways:");
    println!("- Linear mode gates jump only; advance and retreat are never gated");
    println!("- The gate compares against the furthest step ever reached");
    println!("- Reset collapses progress, re-imposing the gate");

    println!("\n=== Example Complete ===");
}
