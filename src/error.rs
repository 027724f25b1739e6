//! Error types for problem generation.
//!
//! Only the generator preconditions can fail; every interactive work-state
//! operation either succeeds or is defined as a silent no-op.

use thiserror::Error;

/// Errors raised when a generator is handed an invalid difficulty.
///
/// These signal a configuration bug in the caller and are never clamped
/// away inside the generator; callers that want clamping must do it
/// themselves before calling.
///
/// # Examples
///
/// ```rust
/// use colarith::{generate_addition_problem, AdditionDifficulty, ProblemError};
///
/// let bad = AdditionDifficulty { num_places: 2, num_carries: 3 };
/// let err = generate_addition_problem(bad, &mut rand::thread_rng()).unwrap_err();
/// assert_eq!(
///     err,
///     ProblemError::CarriesExceedPlaces { num_carries: 3, num_places: 2 }
/// );
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProblemError {
    /// `num_places` outside `[1, 4]`.
    #[error("numPlaces ({0}) must be between 1 and 4")]
    PlacesOutOfRange(u8),

    /// Addition: more forced carries than active columns.
    #[error("numCarries ({num_carries}) must not exceed numPlaces ({num_places})")]
    CarriesExceedPlaces { num_carries: u8, num_places: u8 },

    /// Subtraction: as many forced borrows as active columns.
    ///
    /// The leading column can never borrow (there is no higher column to
    /// borrow from), so `num_borrows` must stay strictly below `num_places`.
    #[error("numBorrows ({num_borrows}) must be less than numPlaces ({num_places})")]
    BorrowsExceedPlaces { num_borrows: u8, num_places: u8 },
}
