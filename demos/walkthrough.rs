//! Drive both work-state machines through one generated problem,
//! printing each step the way a learner would experience it.
//!
//! Run with: cargo run --example walkthrough

use colarith::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() {
    let difficulty = AdditionDifficulty {
        num_places: 2,
        num_carries: 1,
    };
    let mut rng = SmallRng::seed_from_u64(7);
    let problem = generate_addition_problem(difficulty, &mut rng).expect("valid difficulty");
    let solution = compute_solution(&problem);

    println!(
        "problem: {} + {}",
        problem.addend1.to_number(),
        problem.addend2.to_number()
    );

    // Digit workspace: type the correct answer and carry for each column.
    let mut work = DigitWorkState::new(&problem);
    for i in 0..usize::from(problem.num_places) {
        let place = Place::ALL[i];
        let column = solution.column(place);
        work = work.enter_answer(place, &column.answer_digit.to_string(), &solution);
        println!(
            "entered {} in the {} answer cell (unlocked up to column {})",
            column.answer_digit, place, work.unlocked_up_to
        );
        if column.carry_out == 1 && i + 1 < usize::from(problem.num_places) {
            work = work.enter_carry(place, "1", &solution);
            println!("entered carry 1 above the next column");
        }
    }
    if !work.solved && solution.final_carry_out == 1 {
        work = work.enter_final_carry("1", &solution);
        println!("entered the extra leading 1");
    }
    println!("digit workspace solved: {}", work.solved);

    // Visual workspace: consolidate each column, carrying full tens.
    let mut visual = VisualWorkState::initial(&problem);
    let mut steps = 0u32;
    while !visual.solved {
        let place = Place::ALL[visual.active_column];
        let column = &visual.columns[visual.active_column];
        visual = if column.can_carry(Zone::Bottom) {
            println!("carry ten out of the {} column", place);
            visual.apply_carry_out(place, Zone::Bottom, problem.num_places)
        } else {
            visual.apply_move_disk(place, Zone::Top, problem.num_places)
        };
        steps += 1;
    }
    println!(
        "visual workspace solved in {} actions (overflow digit: {})",
        steps, visual.overflow
    );
}
