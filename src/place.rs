//! Place-value module.
//!
//! Provides the `Place` enum identifying the four decimal denominations
//! (ones through thousands), and `PlaceValues`, the digit-by-digit
//! decomposition of an integer across those places.

use serde::{Deserialize, Serialize};

/// One of the four decimal denominations, ordered least to most significant.
///
/// The ordinal of each place (`Place::Ones` is 0, `Place::Thousands` is 3)
/// doubles as its index into [`Place::ALL`] and into the column arrays used
/// by solutions and work-states.
///
/// # Examples
///
/// ```rust
/// use colarith::Place;
///
/// assert_eq!(Place::Ones.index(), 0);
/// assert_eq!(Place::Thousands.index(), 3);
/// assert_eq!(Place::from_index(1), Some(Place::Tens));
/// assert_eq!(Place::from_index(4), None);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Place {
    Ones,
    Tens,
    Hundreds,
    Thousands,
}

impl Place {
    /// All four places in canonical least-to-most-significant order.
    ///
    /// Column arithmetic always iterates in this order; display layers that
    /// want most-significant-first reverse it themselves.
    pub const ALL: [Place; 4] = [Place::Ones, Place::Tens, Place::Hundreds, Place::Thousands];

    /// Zero-based position in the canonical order (ones = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The place at a given canonical index, or `None` past thousands.
    pub fn from_index(index: usize) -> Option<Place> {
        Place::ALL.get(index).copied()
    }

    /// The next-higher place, or `None` for thousands.
    pub fn next(self) -> Option<Place> {
        Place::from_index(self.index() + 1)
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Place::Ones => "ones",
            Place::Tens => "tens",
            Place::Hundreds => "hundreds",
            Place::Thousands => "thousands",
        };
        write!(f, "{}", name)
    }
}

/// The per-place digit decomposition of an integer in `[0, 9999]`.
///
/// Stored as a fixed four-digit array indexed by [`Place`] ordinal, least
/// significant first. Every digit is in `[0, 9]`.
///
/// # Examples
///
/// ```rust
/// use colarith::{Place, PlaceValues};
///
/// let pv = PlaceValues::decompose(342);
/// assert_eq!(pv.digit(Place::Ones), 2);
/// assert_eq!(pv.digit(Place::Tens), 4);
/// assert_eq!(pv.digit(Place::Hundreds), 3);
/// assert_eq!(pv.digit(Place::Thousands), 0);
/// assert_eq!(pv.to_number(), 342);
/// ```
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceValues([u8; 4]);

impl PlaceValues {
    /// All four digits zero.
    pub const ZERO: PlaceValues = PlaceValues([0; 4]);

    /// Build from explicit digits, least significant first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use colarith::PlaceValues;
    ///
    /// let pv = PlaceValues::from_digits([2, 4, 3, 0]);
    /// assert_eq!(pv.to_number(), 342);
    /// ```
    pub fn from_digits(digits: [u8; 4]) -> Self {
        Self(digits)
    }

    /// Decompose an integer into its four place digits.
    ///
    /// Defined for `n` in `[0, 9999]`; higher-order digits of larger inputs
    /// are discarded.
    pub fn decompose(n: u16) -> Self {
        Self([
            (n % 10) as u8,
            (n / 10 % 10) as u8,
            (n / 100 % 10) as u8,
            (n / 1000 % 10) as u8,
        ])
    }

    /// Reconstitute the integer via the place-value formula.
    ///
    /// Inverse of [`PlaceValues::decompose`] for inputs in `[0, 9999]`.
    pub fn to_number(self) -> u16 {
        let [ones, tens, hundreds, thousands] = self.0;
        u16::from(ones)
            + 10 * u16::from(tens)
            + 100 * u16::from(hundreds)
            + 1000 * u16::from(thousands)
    }

    /// The digit at a place.
    pub fn digit(self, place: Place) -> u8 {
        self.0[place.index()]
    }

    /// Overwrite the digit at a place.
    pub fn set_digit(&mut self, place: Place, digit: u8) {
        debug_assert!(digit <= 9);
        self.0[place.index()] = digit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_order() {
        assert_eq!(Place::ALL[0], Place::Ones);
        assert_eq!(Place::ALL[3], Place::Thousands);
        assert_eq!(Place::Tens.index(), 1);
        assert_eq!(Place::Hundreds.next(), Some(Place::Thousands));
        assert_eq!(Place::Thousands.next(), None);
    }

    #[test]
    fn test_decompose_digits() {
        let pv = PlaceValues::decompose(9081);
        assert_eq!(pv.digit(Place::Ones), 1);
        assert_eq!(pv.digit(Place::Tens), 8);
        assert_eq!(pv.digit(Place::Hundreds), 0);
        assert_eq!(pv.digit(Place::Thousands), 9);
    }

    #[test]
    fn test_round_trip_full_range() {
        for n in 0..=9999u16 {
            assert_eq!(PlaceValues::decompose(n).to_number(), n);
        }
    }

    #[test]
    fn test_set_digit() {
        let mut pv = PlaceValues::ZERO;
        pv.set_digit(Place::Hundreds, 7);
        assert_eq!(pv.to_number(), 700);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Place::Ones.to_string(), "ones");
        assert_eq!(Place::Thousands.to_string(), "thousands");
    }
}
