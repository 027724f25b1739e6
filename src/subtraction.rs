//! Subtraction engine: constrained problem generation and column solutions.
//!
//! Mirrors the addition engine with borrows in place of carries. A
//! difficulty fixes the digit count and a *ceiling* on forced borrows; the
//! generator realizes some number of borrows up to that ceiling, always as
//! a contiguous run starting at the ones column. Generated problems always
//! have `minuend >= subtrahend`, so results are non-negative.

use serde::{Deserialize, Serialize};

use crate::addition::check_num_places;
use crate::error::ProblemError;
use crate::place::{Place, PlaceValues};
use crate::random::{rand_digit, RandomSource};

/// Generator configuration for subtraction problems.
///
/// `num_borrows` is an upper bound, not an exact target: the generator
/// draws the realized borrow count uniformly from `[0, num_borrows]`.
/// Invariant (checked at generation time): `num_borrows < num_places`,
/// since the leading column has no higher column to borrow from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtractionDifficulty {
    /// Active column count, in `[1, 4]`.
    pub num_places: u8,
    /// Ceiling on forced borrows, in `[0, num_places - 1]`.
    pub num_borrows: u8,
}

/// A generated multi-digit subtraction problem.
///
/// Immutable once generated. `minuend >= subtrahend` as full integers;
/// places at index `>= num_places` hold digit 0 on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtractionProblem {
    pub minuend: PlaceValues,
    pub subtrahend: PlaceValues,
    /// Active column count, in `[1, 4]`.
    pub num_places: u8,
}

/// The worked arithmetic for one column of a subtraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtractionColumnSolution {
    /// Borrow consumed by the next-lower column (0 or 1).
    pub borrow_in: u8,
    /// `minuend - borrow_in`; transiently -1 inside a borrow chain.
    pub effective_top: i8,
    /// Whether this column must borrow from the next-higher one (0 or 1).
    pub borrow_out: u8,
    /// `effective_top + 10 * borrow_out - subtrahend`.
    pub answer_digit: u8,
}

/// The full column-by-column solution of a [`SubtractionProblem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtractionSolution {
    /// Per-column solutions, indexed by place ordinal.
    pub columns: [SubtractionColumnSolution; 4],
}

impl SubtractionSolution {
    /// The solved column at a place.
    pub fn column(&self, place: Place) -> &SubtractionColumnSolution {
        &self.columns[place.index()]
    }
}

/// Generate a subtraction problem matching a difficulty.
///
/// The realized borrow count is drawn uniformly from `[0, num_borrows]`
/// and the borrowing columns are always the least-significant ones, so
/// borrow chains are contiguous from the ones place. Leading digits of both
/// operands are always >= 1.
///
/// # Errors
///
/// [`ProblemError::BorrowsExceedPlaces`] when `num_borrows >= num_places`,
/// [`ProblemError::PlacesOutOfRange`] when `num_places` is not in `[1, 4]`.
///
/// # Examples
///
/// ```rust
/// use colarith::{generate_subtraction_problem, SubtractionDifficulty};
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let difficulty = SubtractionDifficulty { num_places: 3, num_borrows: 2 };
/// let mut rng = SmallRng::seed_from_u64(3);
/// let problem = generate_subtraction_problem(difficulty, &mut rng).unwrap();
/// assert!(problem.minuend.to_number() >= problem.subtrahend.to_number());
/// ```
pub fn generate_subtraction_problem(
    difficulty: SubtractionDifficulty,
    random: &mut impl RandomSource,
) -> Result<SubtractionProblem, ProblemError> {
    let SubtractionDifficulty {
        num_places,
        num_borrows,
    } = difficulty;
    check_num_places(num_places)?;
    if num_borrows >= num_places {
        return Err(ProblemError::BorrowsExceedPlaces {
            num_borrows,
            num_places,
        });
    }

    // Ceiling semantics: realize anywhere from zero up to num_borrows.
    let actual_borrows = usize::from(rand_digit(0, num_borrows, random));

    let mut minuend = PlaceValues::ZERO;
    let mut subtrahend = PlaceValues::ZERO;

    for i in 0..usize::from(num_places) {
        let place = Place::ALL[i];
        let is_leading = i == usize::from(num_places) - 1;
        let force_borrow = i < actual_borrows;
        // Column i receives a borrow iff column i-1 was itself a forced
        // borrower, which is exactly i-1 < actual_borrows.
        let expected_borrow_in: u8 = if i > 0 && i - 1 < actual_borrows {
            1
        } else {
            0
        };

        let (m, s) = if force_borrow {
            // Need subtrahend > effective_top = m - expected_borrow_in.
            // m stays within [expected_borrow_in, 8 + expected_borrow_in] so
            // effective_top lands in [0, 8] and [effective_top + 1, 9] is
            // never empty.
            let m = rand_digit(expected_borrow_in, 8 + expected_borrow_in, random);
            let effective_top = m - expected_borrow_in;
            (m, rand_digit(effective_top + 1, 9, random))
        } else if is_leading {
            // Leading column: both digits >= 1, no borrow out.
            let m = rand_digit(1 + expected_borrow_in, 9, random);
            let effective_top = m - expected_borrow_in;
            (m, rand_digit(1, effective_top, random))
        } else {
            // Neither forced nor leading: any digits with no borrow out.
            let m = rand_digit(expected_borrow_in, 9, random);
            let effective_top = m - expected_borrow_in;
            (m, rand_digit(0, effective_top, random))
        };

        minuend.set_digit(place, m);
        subtrahend.set_digit(place, s);
    }

    Ok(SubtractionProblem {
        minuend,
        subtrahend,
        num_places,
    })
}

/// Compute the column-by-column solution of a problem.
///
/// Walks the active columns least to most significant, threading the
/// running borrow through each one. Inactive columns stay all-zero.
pub fn compute_subtraction_solution(problem: &SubtractionProblem) -> SubtractionSolution {
    let mut columns = [SubtractionColumnSolution::default(); 4];
    let mut borrow = 0u8;
    for i in 0..usize::from(problem.num_places) {
        let place = Place::ALL[i];
        let borrow_in = borrow;
        let effective_top = problem.minuend.digit(place) as i8 - borrow_in as i8;
        let subtrahend = problem.subtrahend.digit(place) as i8;
        let (borrow_out, answer_digit) = if effective_top >= subtrahend {
            (0u8, (effective_top - subtrahend) as u8)
        } else {
            (1u8, (effective_top + 10 - subtrahend) as u8)
        };
        columns[i] = SubtractionColumnSolution {
            borrow_in,
            effective_top,
            borrow_out,
            answer_digit,
        };
        borrow = borrow_out;
    }
    SubtractionSolution { columns }
}
