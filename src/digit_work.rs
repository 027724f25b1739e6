//! Digit-entry work-state machine for addition.
//!
//! Tracks a learner's cell-by-cell progress through a column addition:
//! answer digits on the answer row, carry digits on the scratch row, and
//! the optional extra leading digit when the whole sum overflows. Columns
//! unlock strictly left to right (least significant first); entries into
//! still-locked columns are silent no-ops.
//!
//! Every transition produces a new state value. Previous snapshots are
//! never mutated, so presentation layers can rely on value comparison for
//! change detection.

use serde::{Deserialize, Serialize};

use crate::addition::{AdditionProblem, AdditionSolution};
use crate::place::Place;

/// Judgement of a single entered cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    /// Nothing entered yet (or the cell was cleared).
    #[default]
    Idle,
    /// The entered digit matches the solution.
    Correct,
    /// The entered digit does not match; fully recoverable by re-entry.
    Incorrect,
}

/// The learner's entries for one column: answer digit plus carry digit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitEntry {
    /// Entered answer digit, or empty.
    pub answer: String,
    pub answer_status: EntryStatus,
    /// Entered carry-out digit, or empty.
    pub carry: String,
    pub carry_status: EntryStatus,
}

/// Step-by-step progress through solving one addition problem.
///
/// Created fresh per problem with [`DigitWorkState::new`] and replaced on
/// every difficulty change; never persisted across rounds.
///
/// `unlocked_up_to` is the index of the column currently open for input.
/// Columns below it are completed, columns above it are locked-pending.
/// When it equals the active column count, the final-carry cell is the one
/// remaining input.
///
/// # Examples
///
/// ```rust
/// use colarith::{
///     compute_solution, AdditionProblem, DigitWorkState, Place, PlaceValues,
/// };
///
/// let problem = AdditionProblem {
///     addend1: PlaceValues::decompose(21),
///     addend2: PlaceValues::decompose(13),
///     num_places: 2,
/// };
/// let solution = compute_solution(&problem);
///
/// let work = DigitWorkState::new(&problem);
/// let work = work.enter_answer(Place::Ones, "4", &solution);
/// assert_eq!(work.unlocked_up_to, 1);
/// let work = work.enter_answer(Place::Tens, "3", &solution);
/// assert!(work.solved);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitWorkState {
    /// Per-column entries, indexed by place ordinal.
    pub entries: [DigitEntry; 4],
    /// Entered extra leading digit of the sum, or empty.
    pub final_carry: String,
    pub final_carry_status: EntryStatus,
    /// Index of the column open for input; `num_places` once only the
    /// final-carry cell remains.
    pub unlocked_up_to: usize,
    /// Terminal once true.
    pub solved: bool,
    num_places: u8,
}

fn judge(input: &str, expected: u8) -> EntryStatus {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        EntryStatus::Idle
    } else if trimmed.parse::<u8>() == Ok(expected) {
        EntryStatus::Correct
    } else {
        EntryStatus::Incorrect
    }
}

impl DigitWorkState {
    /// Fresh, empty work-state for a problem.
    pub fn new(problem: &AdditionProblem) -> Self {
        Self {
            entries: Default::default(),
            final_carry: String::new(),
            final_carry_status: EntryStatus::Idle,
            unlocked_up_to: 0,
            solved: false,
            num_places: problem.num_places,
        }
    }

    /// Active column count of the problem this state was built from.
    pub fn num_places(&self) -> u8 {
        self.num_places
    }

    /// Enter an answer digit for a column.
    ///
    /// No-op if the state is solved, the place is inactive, or the column
    /// is still locked (`index > unlocked_up_to`). Re-entering an already
    /// unlocked column is permitted and re-judged.
    pub fn enter_answer(&self, place: Place, input: &str, solution: &AdditionSolution) -> Self {
        let index = place.index();
        if self.solved || index >= usize::from(self.num_places) || index > self.unlocked_up_to {
            return self.clone();
        }
        let mut next = self.clone();
        next.entries[index].answer = input.trim().to_string();
        next.entries[index].answer_status = judge(input, solution.columns[index].answer_digit);
        next.advance_if_complete(solution);
        next
    }

    /// Enter a carry-out digit for a column's scratch cell.
    ///
    /// Same locking rules as [`DigitWorkState::enter_answer`]. The leading
    /// column's carry is not entered here; it goes through
    /// [`DigitWorkState::enter_final_carry`].
    pub fn enter_carry(&self, place: Place, input: &str, solution: &AdditionSolution) -> Self {
        let index = place.index();
        if self.solved || index >= usize::from(self.num_places) || index > self.unlocked_up_to {
            return self.clone();
        }
        let mut next = self.clone();
        next.entries[index].carry = input.trim().to_string();
        next.entries[index].carry_status = judge(input, solution.columns[index].carry_out);
        next.advance_if_complete(solution);
        next
    }

    /// Enter the extra leading digit of the sum.
    ///
    /// Only reachable after every column is complete and the solution has
    /// `final_carry_out == 1`; a correct entry is the terminal transition
    /// to solved. No-op while any column is still open.
    pub fn enter_final_carry(&self, input: &str, solution: &AdditionSolution) -> Self {
        if self.solved || self.unlocked_up_to < usize::from(self.num_places) {
            return self.clone();
        }
        let mut next = self.clone();
        next.final_carry = input.trim().to_string();
        next.final_carry_status = judge(input, solution.final_carry_out);
        if next.final_carry_status == EntryStatus::Correct {
            next.solved = true;
        }
        next
    }

    /// Advance past the active column once it is complete.
    ///
    /// A column is complete when its answer is correct and its carry is
    /// either correct, not required (carry-out 0), or deferred to the
    /// final-carry cell (leading column). Completing the last column either
    /// solves the state outright (no overflow) or unlocks the final-carry
    /// cell.
    fn advance_if_complete(&mut self, solution: &AdditionSolution) {
        let num_places = usize::from(self.num_places);
        let active = self.unlocked_up_to;
        if active >= num_places {
            return;
        }
        let entry = &self.entries[active];
        let column = &solution.columns[active];
        let is_leading = active == num_places - 1;
        let complete = entry.answer_status == EntryStatus::Correct
            && (is_leading || column.carry_out == 0 || entry.carry_status == EntryStatus::Correct);
        if !complete {
            return;
        }
        if active + 1 < num_places {
            self.unlocked_up_to = active + 1;
        } else if solution.final_carry_out == 0 {
            self.solved = true;
        } else {
            self.unlocked_up_to = num_places;
        }
    }
}
