//! Addition engine: constrained problem generation and column solutions.
//!
//! Problems are generated column by column against an [`AdditionDifficulty`]
//! that pins down both the digit count and exactly how many columns must
//! carry. Solutions record the full carry chain per column so interactive
//! layers can judge every cell a learner fills in.
//!
//! Everything here is a pure function over immutable inputs; randomness
//! comes in only through the injected [`RandomSource`](crate::RandomSource).

use serde::{Deserialize, Serialize};

use crate::error::ProblemError;
use crate::place::{Place, PlaceValues};
use crate::random::{rand_digit, RandomSource};

/// Generator configuration for addition problems.
///
/// `num_carries` counts columns forced to overflow; the forced columns are
/// always the least-significant ones. Invariant (checked at generation
/// time, never clamped): `num_carries <= num_places`.
///
/// # Examples
///
/// ```rust
/// use colarith::AdditionDifficulty;
///
/// // Three-digit problems where the ones and tens columns both carry.
/// let difficulty = AdditionDifficulty { num_places: 3, num_carries: 2 };
/// assert_eq!(difficulty, AdditionDifficulty::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionDifficulty {
    /// Active column count, in `[1, 4]`.
    pub num_places: u8,
    /// Columns forced to carry, in `[0, num_places]`.
    pub num_carries: u8,
}

impl Default for AdditionDifficulty {
    fn default() -> Self {
        Self {
            num_places: 3,
            num_carries: 2,
        }
    }
}

/// A generated multi-digit addition problem.
///
/// Immutable once generated. Places at index `>= num_places` hold digit 0
/// in both addends; the leading active digit of each addend is nonzero, so
/// the problem visually has the requested digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionProblem {
    pub addend1: PlaceValues,
    pub addend2: PlaceValues,
    /// Active column count, in `[1, 4]`.
    pub num_places: u8,
}

/// The worked arithmetic for one column of an addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSolution {
    /// Carry received from the next-lower column (0 or 1).
    pub carry_in: u8,
    /// `addend1 + addend2 + carry_in`, in `[0, 19]`.
    pub raw_sum: u8,
    /// `raw_sum % 10`.
    pub answer_digit: u8,
    /// `raw_sum / 10` (0 or 1).
    pub carry_out: u8,
}

/// The full column-by-column solution of an [`AdditionProblem`].
///
/// Inactive columns hold the all-zero [`ColumnSolution`]. When
/// `final_carry_out` is 1, the sum has one more digit than the addends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionSolution {
    /// Per-column solutions, indexed by place ordinal.
    pub columns: [ColumnSolution; 4],
    /// Carry emitted by the most-significant active column (0 or 1).
    pub final_carry_out: u8,
}

impl AdditionSolution {
    /// The solved column at a place.
    pub fn column(&self, place: Place) -> &ColumnSolution {
        &self.columns[place.index()]
    }
}

pub(crate) fn check_num_places(num_places: u8) -> Result<(), ProblemError> {
    if (1..=4).contains(&num_places) {
        Ok(())
    } else {
        Err(ProblemError::PlacesOutOfRange(num_places))
    }
}

/// Generate an addition problem matching a difficulty.
///
/// The `num_carries` least-significant active columns are forced to carry
/// (raw sum >= 10); every other active column is forced not to, even after
/// absorbing a carry from the forced run below it. The leading digit of
/// each addend is always >= 1.
///
/// # Errors
///
/// [`ProblemError::CarriesExceedPlaces`] when `num_carries > num_places`,
/// [`ProblemError::PlacesOutOfRange`] when `num_places` is not in `[1, 4]`.
///
/// # Examples
///
/// ```rust
/// use colarith::{compute_solution, generate_addition_problem, AdditionDifficulty};
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let difficulty = AdditionDifficulty { num_places: 2, num_carries: 1 };
/// let mut rng = SmallRng::seed_from_u64(11);
/// let problem = generate_addition_problem(difficulty, &mut rng).unwrap();
/// let solution = compute_solution(&problem);
/// assert_eq!(solution.columns[0].carry_out, 1); // forced ones-column carry
/// assert_eq!(solution.final_carry_out, 0);
/// ```
pub fn generate_addition_problem(
    difficulty: AdditionDifficulty,
    random: &mut impl RandomSource,
) -> Result<AdditionProblem, ProblemError> {
    let AdditionDifficulty {
        num_places,
        num_carries,
    } = difficulty;
    check_num_places(num_places)?;
    if num_carries > num_places {
        return Err(ProblemError::CarriesExceedPlaces {
            num_carries,
            num_places,
        });
    }

    let mut addend1 = PlaceValues::ZERO;
    let mut addend2 = PlaceValues::ZERO;

    for i in 0..usize::from(num_places) {
        let place = Place::ALL[i];
        let is_leading = i == usize::from(num_places) - 1;
        let force_carry = i < usize::from(num_carries);
        // Column i receives a carry iff column i-1 was itself forced to
        // carry; un-forced columns never overflow, so nothing propagates
        // past the forced run.
        let expected_carry_in: u8 = if i > 0 && i - 1 < usize::from(num_carries) {
            1
        } else {
            0
        };

        let (d1, d2) = if force_carry {
            // d1 + d2 must reach 10; a leading digit additionally stays >= 1.
            let d1 = rand_digit(1, 9, random);
            let d2_min = if is_leading {
                (10 - d1).max(1)
            } else {
                10 - d1
            };
            (d1, rand_digit(d2_min, 9, random))
        } else if is_leading {
            // No carry even after absorbing the incoming one, and both
            // leading digits >= 1.
            let d1 = rand_digit(1, 8 - expected_carry_in, random);
            (d1, rand_digit(1, 9 - expected_carry_in - d1, random))
        } else {
            // No carry: the digit budget leaves room for the incoming one.
            let d1 = rand_digit(0, 9 - expected_carry_in, random);
            (d1, rand_digit(0, 9 - expected_carry_in - d1, random))
        };

        addend1.set_digit(place, d1);
        addend2.set_digit(place, d2);
    }

    Ok(AdditionProblem {
        addend1,
        addend2,
        num_places,
    })
}

/// Compute the column-by-column solution of a problem.
///
/// Walks the active columns least to most significant, threading the
/// running carry through each one. Inactive columns stay all-zero.
pub fn compute_solution(problem: &AdditionProblem) -> AdditionSolution {
    let mut columns = [ColumnSolution::default(); 4];
    let mut carry = 0u8;
    for i in 0..usize::from(problem.num_places) {
        let place = Place::ALL[i];
        let raw_sum = problem.addend1.digit(place) + problem.addend2.digit(place) + carry;
        columns[i] = ColumnSolution {
            carry_in: carry,
            raw_sum,
            answer_digit: raw_sum % 10,
            carry_out: raw_sum / 10,
        };
        carry = columns[i].carry_out;
    }
    AdditionSolution {
        columns,
        final_carry_out: carry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_worked_example_342_plus_189() {
        let problem = AdditionProblem {
            addend1: PlaceValues::decompose(342),
            addend2: PlaceValues::decompose(189),
            num_places: 3,
        };
        let solution = compute_solution(&problem);

        let ones = solution.column(Place::Ones);
        assert_eq!(ones.carry_in, 0);
        assert_eq!(ones.raw_sum, 11);
        assert_eq!(ones.answer_digit, 1);
        assert_eq!(ones.carry_out, 1);

        let tens = solution.column(Place::Tens);
        assert_eq!(tens.carry_in, 1);
        assert_eq!(tens.answer_digit, 3);
        assert_eq!(tens.carry_out, 1);

        let hundreds = solution.column(Place::Hundreds);
        assert_eq!(hundreds.carry_in, 1);
        assert_eq!(hundreds.answer_digit, 5);
        assert_eq!(hundreds.carry_out, 0);

        assert_eq!(solution.final_carry_out, 0);
    }

    #[test]
    fn test_inactive_columns_stay_zero() {
        let problem = AdditionProblem {
            addend1: PlaceValues::decompose(7),
            addend2: PlaceValues::decompose(8),
            num_places: 1,
        };
        let solution = compute_solution(&problem);
        assert_eq!(solution.columns[0].answer_digit, 5);
        assert_eq!(solution.final_carry_out, 1);
        for column in &solution.columns[1..] {
            assert_eq!(*column, ColumnSolution::default());
        }
    }

    #[test]
    fn test_generate_rejects_excess_carries() {
        let mut rng = SmallRng::seed_from_u64(0);
        let difficulty = AdditionDifficulty {
            num_places: 2,
            num_carries: 3,
        };
        assert_eq!(
            generate_addition_problem(difficulty, &mut rng),
            Err(ProblemError::CarriesExceedPlaces {
                num_carries: 3,
                num_places: 2,
            })
        );
    }

    #[test]
    fn test_generate_rejects_bad_num_places() {
        let mut rng = SmallRng::seed_from_u64(0);
        for num_places in [0u8, 5] {
            let difficulty = AdditionDifficulty {
                num_places,
                num_carries: 0,
            };
            assert_eq!(
                generate_addition_problem(difficulty, &mut rng),
                Err(ProblemError::PlacesOutOfRange(num_places))
            );
        }
    }

    #[test]
    fn test_generated_digits_in_range() {
        let mut rng = SmallRng::seed_from_u64(99);
        for num_places in 1..=4u8 {
            for num_carries in 0..=num_places {
                let difficulty = AdditionDifficulty {
                    num_places,
                    num_carries,
                };
                let problem = generate_addition_problem(difficulty, &mut rng).unwrap();
                for place in Place::ALL {
                    assert!(problem.addend1.digit(place) <= 9);
                    assert!(problem.addend2.digit(place) <= 9);
                    if place.index() >= usize::from(num_places) {
                        assert_eq!(problem.addend1.digit(place), 0);
                        assert_eq!(problem.addend2.digit(place), 0);
                    }
                }
                let leading = Place::ALL[usize::from(num_places) - 1];
                assert!(problem.addend1.digit(leading) >= 1);
                assert!(problem.addend2.digit(leading) >= 1);
            }
        }
    }

    #[test]
    fn test_generated_sum_matches_solution() {
        let mut rng = SmallRng::seed_from_u64(5);
        let difficulty = AdditionDifficulty {
            num_places: 4,
            num_carries: 2,
        };
        for _ in 0..50 {
            let problem = generate_addition_problem(difficulty, &mut rng).unwrap();
            let solution = compute_solution(&problem);
            // Reassemble the answer digits most-significant first.
            let mut reconstructed = u32::from(solution.final_carry_out);
            for i in (0..usize::from(difficulty.num_places)).rev() {
                reconstructed = reconstructed * 10 + u32::from(solution.columns[i].answer_digit);
            }
            let expected =
                u32::from(problem.addend1.to_number()) + u32::from(problem.addend2.to_number());
            assert_eq!(reconstructed, expected);
        }
    }
}
