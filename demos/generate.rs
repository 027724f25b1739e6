//! Generate one addition and one subtraction problem and print their
//! column solutions as JSON.
//!
//! Run with: cargo run --example generate

use colarith::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() {
    // Seeded so the demo prints the same round every run; swap in
    // rand::thread_rng() for fresh problems.
    let mut rng = SmallRng::seed_from_u64(2024);

    let addition = AdditionDifficulty {
        num_places: 3,
        num_carries: 2,
    };
    let problem = generate_addition_problem(addition, &mut rng).expect("valid difficulty");
    let solution = compute_solution(&problem);
    println!(
        "addition: {} + {} = ?",
        problem.addend1.to_number(),
        problem.addend2.to_number()
    );
    println!("{}", serde_json::to_string_pretty(&solution).unwrap());

    let subtraction = SubtractionDifficulty {
        num_places: 3,
        num_borrows: 2,
    };
    let problem = generate_subtraction_problem(subtraction, &mut rng).expect("valid difficulty");
    let solution = compute_subtraction_solution(&problem);
    println!(
        "subtraction: {} - {} = ?",
        problem.minuend.to_number(),
        problem.subtrahend.to_number()
    );
    println!("{}", serde_json::to_string_pretty(&solution).unwrap());
}
