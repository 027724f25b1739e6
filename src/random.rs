//! Randomness injection for problem generation.
//!
//! Generators never reach for ambient global randomness; they take a
//! `RandomSource` parameter instead. This is the seam that makes problem
//! generation deterministically replayable: tests pass a seeded `SmallRng`
//! or a scripted [`SequenceSource`] and get the same problem every run,
//! while production callers pass `rand::thread_rng()`.

use rand::rngs::{SmallRng, StdRng, ThreadRng};
use rand::Rng;

/// An injectable uniform random generator.
///
/// Implementations must return samples uniformly distributed in `[0, 1)`.
///
/// # Examples
///
/// ```rust
/// use colarith::RandomSource;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let sample = rng.next_unit();
/// assert!((0.0..1.0).contains(&sample));
/// ```
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for ThreadRng {
    fn next_unit(&mut self) -> f64 {
        self.gen()
    }
}

impl RandomSource for SmallRng {
    fn next_unit(&mut self) -> f64 {
        self.gen()
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen()
    }
}

/// A random source that replays a fixed list of samples, cycling at the end.
///
/// Useful for steering a generator down an exact branch: each sample maps to
/// one digit draw, so a script of `0.0`s always picks range minimums and a
/// script of `0.999`s always picks maximums.
///
/// # Examples
///
/// ```rust
/// use colarith::{RandomSource, SequenceSource};
///
/// let mut source = SequenceSource::new(vec![0.0, 0.5]);
/// assert_eq!(source.next_unit(), 0.0);
/// assert_eq!(source.next_unit(), 0.5);
/// assert_eq!(source.next_unit(), 0.0); // wrapped around
/// ```
#[derive(Debug, Clone)]
pub struct SequenceSource {
    samples: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    /// Create a source replaying the given samples in order.
    ///
    /// Every sample must be in `[0, 1)`.
    pub fn new(samples: Vec<f64>) -> Self {
        debug_assert!(samples.iter().all(|s| (0.0..1.0).contains(s)));
        Self {
            samples,
            position: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.position % self.samples.len()];
        self.position += 1;
        sample
    }
}

/// Uniform integer in `[min, max]` inclusive, drawn as
/// `floor(sample * (max - min + 1)) + min`.
pub(crate) fn rand_digit(min: u8, max: u8, random: &mut impl RandomSource) -> u8 {
    debug_assert!(min <= max);
    let span = f64::from(max - min + 1);
    min + (random.next_unit() * span) as u8
}
