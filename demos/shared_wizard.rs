//! Shared Wizard
//!
//! This example drives one sequencer from several threads.
//!
//! Key concepts:
//! - `SharedSequencer` serializes every read-modify-write
//! - Navigation requests as data via `Navigation`
//!
//! Run with: cargo run --example shared_wizard

use std::thread;

use stepwise::{Navigation, SharedSequencer, StepSequencer};

fn main() {
    println!("=== Shared Wizard ===\n");

    let wizard = StepSequencer::<String>::builder(["intro", "terms", "details", "finish"])
        .linear(true)
        .build()
        .unwrap();
    let shared = SharedSequencer::new(wizard);

    let requests = vec![
        Navigation::Advance,
        Navigation::Jump("finish".to_string()),
        Navigation::Advance,
        Navigation::Retreat,
        Navigation::Jump("details".to_string()),
    ];

    let handles: Vec<_> = requests
        .into_iter()
        .map(|request| {
            let shared = shared.clone();
            thread::spawn(move || {
                let label = format!("{request:?}");
                let outcome = shared.apply(request).unwrap();
                (label, outcome)
            })
        })
        .collect();

    for handle in handles {
        let (label, outcome) = handle.join().unwrap();
        println!("  {label:<24} {outcome:?}");
    }

    shared.with_snapshot(|snapshot| {
        println!(
            "\nFinal: {} (index {}, furthest {})",
            snapshot.current, snapshot.index, snapshot.furthest
        );
        assert!(snapshot.index <= snapshot.furthest);
    });

    println!("\nKey Takeaways:");
    println!("- Interleaving decides the path, but every state is consistent");
    println!("- Outcomes tell each caller what its own request did");

    println!("\n=== Example Complete ===");
}
