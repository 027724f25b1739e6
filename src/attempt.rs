//! Attempt records.
//!
//! One [`Attempt`] is logged per completed-or-abandoned problem. Records
//! are append-only value types; the storage collaborator owns their
//! lifecycle and only ever clears them in bulk.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The outcome of one problem round.
///
/// Immutable once created.
///
/// # Examples
///
/// ```rust
/// use colarith::Attempt;
///
/// let attempt = Attempt::with_timestamp(3, true, 1_000);
/// assert_eq!(attempt.num_places, 3);
/// assert!(attempt.correct);
/// assert_eq!(attempt.timestamp, 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    /// Digit count of the attempted problem, in `[1, 4]`.
    pub num_places: u8,
    /// Whether the problem was solved correctly.
    pub correct: bool,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
}

impl Attempt {
    /// Record an attempt stamped with the current time.
    pub fn new(num_places: u8, correct: bool) -> Self {
        Self::with_timestamp(num_places, correct, Utc::now().timestamp_millis())
    }

    /// Record an attempt with an explicit timestamp (replay, tests).
    pub fn with_timestamp(num_places: u8, correct: bool, timestamp: i64) -> Self {
        Self {
            num_places,
            correct,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_fields() {
        let attempt = Attempt::with_timestamp(2, true, 1000);
        assert_eq!(attempt.num_places, 2);
        assert!(attempt.correct);
        assert_eq!(attempt.timestamp, 1000);
    }

    #[test]
    fn test_new_stamps_approximately_now() {
        let before = Utc::now().timestamp_millis();
        let attempt = Attempt::new(3, false);
        let after = Utc::now().timestamp_millis();
        assert!(attempt.timestamp >= before);
        assert!(attempt.timestamp <= after);
    }
}
