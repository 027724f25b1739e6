//! # colarith - Deterministic Column Arithmetic Tutoring Engine
//!
//! A problem engine for multi-digit addition and subtraction practice:
//! - **Constrained generation** (pin the digit count and exactly how many
//!   columns carry or borrow)
//! - **Full column solutions** (every carry/borrow in the chain, per place)
//! - **Interactive work-states** (two alternate models of a learner's
//!   partial progress through one problem)
//! - **Deterministic** (randomness is injected, never ambient — the same
//!   seed always yields the same problem)
//!
//! ## Core Concepts
//!
//! ### Problem Pipeline
//!
//! Each round flows through a simple pipeline:
//!
//! ```text
//! [Difficulty] → [Problem] → [Solution] → [WorkState... → solved] → [Attempt]
//! ```
//!
//! 1. **Generators** turn a difficulty into a problem (digits per place)
//! 2. **Solvers** compute the column-by-column solution chain
//! 3. **Work-states** track learner progress, judging entries against the
//!    solution and unlocking columns least-significant first
//! 4. **Attempts** record the outcome for statistics
//!
//! ### Two Work Models
//!
//! - [`DigitWorkState`]: symbolic entry; the learner types answer and carry
//!   digits into cells, columns unlock left to right
//! - [`VisualWorkState`]: manipulatives; the learner moves unit counters
//!   between two zones per column and explicitly carries groups of ten
//!
//! Both machines are value-producing: transitions return a new state and
//! invalid actions return a value equal to the input, so UI layers detect
//! change by comparison.
//!
//! ## Example
//!
//! ```rust
//! use colarith::*;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let difficulty = AdditionDifficulty { num_places: 2, num_carries: 1 };
//! let mut rng = SmallRng::seed_from_u64(42);
//!
//! let problem = generate_addition_problem(difficulty, &mut rng).unwrap();
//! let solution = compute_solution(&problem);
//!
//! // The ones column was forced to carry.
//! assert_eq!(solution.columns[0].carry_out, 1);
//!
//! // Walk the digit workspace to solved.
//! let mut work = DigitWorkState::new(&problem);
//! for place in &Place::ALL[..2] {
//!     let column = solution.column(*place);
//!     work = work.enter_answer(*place, &column.answer_digit.to_string(), &solution);
//!     work = work.enter_carry(*place, &column.carry_out.to_string(), &solution);
//! }
//! if solution.final_carry_out == 1 {
//!     work = work.enter_final_carry("1", &solution);
//! }
//! assert!(work.solved);
//! ```
//!
//! ## Modules
//!
//! - [`place`] - Place identifiers and place-value decomposition
//! - [`addition`] - Addition problem generation and solutions
//! - [`subtraction`] - Subtraction problem generation and solutions
//! - [`digit_work`] - Digit-entry work-state machine
//! - [`visual_work`] - Visual manipulative work-state machine
//! - [`attempt`] - Attempt outcome records
//! - [`storage`] - Storage boundary trait and in-memory implementation
//! - [`random`] - Injectable randomness seam
//! - [`error`] - Error types

pub mod addition;
pub mod attempt;
pub mod digit_work;
pub mod error;
pub mod place;
pub mod random;
pub mod storage;
pub mod subtraction;
pub mod visual_work;

// Re-export main types for convenience
pub use error::ProblemError;
pub use place::{Place, PlaceValues};
pub use random::{RandomSource, SequenceSource};

// Re-export the addition engine
pub use addition::{
    compute_solution, generate_addition_problem, AdditionDifficulty, AdditionProblem,
    AdditionSolution, ColumnSolution,
};

// Re-export the subtraction engine
pub use subtraction::{
    compute_subtraction_solution, generate_subtraction_problem, SubtractionColumnSolution,
    SubtractionDifficulty, SubtractionProblem, SubtractionSolution,
};

// Re-export the work-state machines
pub use digit_work::{DigitEntry, DigitWorkState, EntryStatus};
pub use visual_work::{VisualColumn, VisualWorkState, Zone};

// Re-export records and the storage boundary
pub use attempt::Attempt;
pub use storage::{InMemoryStorage, StoragePort};
