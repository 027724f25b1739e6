//! Storage boundary for difficulty settings and the attempt log.
//!
//! The engine does not care whether persistence is durable or in memory; it
//! only requires synchronous operations where reads reflect prior writes
//! within the same process. [`InMemoryStorage`] is the reference
//! implementation, also handy as a test double for UI layers.

use crate::addition::AdditionDifficulty;
use crate::attempt::Attempt;
use crate::subtraction::SubtractionDifficulty;

/// Persistence capabilities consumed by the surrounding application.
///
/// The attempt log is append-only: entries are never edited, and the only
/// removal is the bulk [`StoragePort::clear_attempts`]. The period start
/// marks the beginning of the statistics window the attempts belong to.
pub trait StoragePort {
    /// Last saved addition difficulty, if any.
    fn difficulty(&self) -> Option<AdditionDifficulty>;
    fn save_difficulty(&mut self, difficulty: AdditionDifficulty);

    /// Last saved subtraction difficulty, if any.
    fn subtraction_difficulty(&self) -> Option<SubtractionDifficulty>;
    fn save_subtraction_difficulty(&mut self, difficulty: SubtractionDifficulty);

    /// All logged attempts, oldest first.
    fn attempts(&self) -> Vec<Attempt>;
    fn save_attempt(&mut self, attempt: Attempt);
    fn clear_attempts(&mut self);

    /// Start of the current statistics period, epoch milliseconds.
    fn period_start(&self) -> Option<i64>;
    fn save_period_start(&mut self, timestamp: i64);
}

/// In-memory [`StoragePort`] implementation.
///
/// # Examples
///
/// ```rust
/// use colarith::{AdditionDifficulty, Attempt, InMemoryStorage, StoragePort};
///
/// let mut storage = InMemoryStorage::default();
/// assert_eq!(storage.difficulty(), None);
///
/// storage.save_difficulty(AdditionDifficulty { num_places: 2, num_carries: 1 });
/// storage.save_attempt(Attempt::with_timestamp(2, true, 10));
///
/// assert_eq!(storage.difficulty().unwrap().num_places, 2);
/// assert_eq!(storage.attempts().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    difficulty: Option<AdditionDifficulty>,
    subtraction_difficulty: Option<SubtractionDifficulty>,
    attempts: Vec<Attempt>,
    period_start: Option<i64>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for InMemoryStorage {
    fn difficulty(&self) -> Option<AdditionDifficulty> {
        self.difficulty
    }

    fn save_difficulty(&mut self, difficulty: AdditionDifficulty) {
        self.difficulty = Some(difficulty);
    }

    fn subtraction_difficulty(&self) -> Option<SubtractionDifficulty> {
        self.subtraction_difficulty
    }

    fn save_subtraction_difficulty(&mut self, difficulty: SubtractionDifficulty) {
        self.subtraction_difficulty = Some(difficulty);
    }

    fn attempts(&self) -> Vec<Attempt> {
        self.attempts.clone()
    }

    fn save_attempt(&mut self, attempt: Attempt) {
        self.attempts.push(attempt);
    }

    fn clear_attempts(&mut self) {
        self.attempts.clear();
    }

    fn period_start(&self) -> Option<i64> {
        self.period_start
    }

    fn save_period_start(&mut self, timestamp: i64) {
        self.period_start = Some(timestamp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        let mut storage = InMemoryStorage::new();
        assert_eq!(storage.difficulty(), None);

        let difficulty = AdditionDifficulty {
            num_places: 4,
            num_carries: 4,
        };
        storage.save_difficulty(difficulty);
        assert_eq!(storage.difficulty(), Some(difficulty));
    }

    #[test]
    fn test_subtraction_difficulty_round_trip() {
        let mut storage = InMemoryStorage::new();
        assert_eq!(storage.subtraction_difficulty(), None);

        let difficulty = SubtractionDifficulty {
            num_places: 3,
            num_borrows: 2,
        };
        storage.save_subtraction_difficulty(difficulty);
        assert_eq!(storage.subtraction_difficulty(), Some(difficulty));
    }

    #[test]
    fn test_attempts_append_and_clear() {
        let mut storage = InMemoryStorage::new();
        storage.save_attempt(Attempt::with_timestamp(1, true, 10));
        storage.save_attempt(Attempt::with_timestamp(2, false, 20));

        let attempts = storage.attempts();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].timestamp, 10);
        assert_eq!(attempts[1].timestamp, 20);

        storage.clear_attempts();
        assert!(storage.attempts().is_empty());
    }

    #[test]
    fn test_period_start() {
        let mut storage = InMemoryStorage::new();
        assert_eq!(storage.period_start(), None);
        storage.save_period_start(42);
        assert_eq!(storage.period_start(), Some(42));
    }
}
