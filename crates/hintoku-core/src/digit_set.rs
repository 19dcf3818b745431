//! A set of digits 1-9 backed by a 9-bit mask.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr},
};

use crate::Digit;

/// A set of [`Digit`]s represented as a bitmask.
///
/// Bits 0-8 of the backing `u16` represent digits 1-9. All operations are
/// O(1); iteration yields digits in ascending order.
///
/// # Examples
///
/// ```
/// use hintoku_core::{Digit, DigitSet};
///
/// // Start from every candidate and eliminate a few
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
///
/// // A single survivor can be extracted directly
/// let single: DigitSet = [Digit::D4].into_iter().collect();
/// assert_eq!(single.as_single(), Some(Digit::D4));
/// assert_eq!(candidates.as_single(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(0b1_1111_1111);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Adds a digit to the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::bit(digit);
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole digit when the set has exactly one member.
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.len() == 1 { self.iter().next() } else { None }
    }

    /// Returns the union of `self` and `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of `self` and `other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Digits {
        Digits { bits: self.0 }
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Digits;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Digits {
    bits: u16,
}

impl Iterator for Digits {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Some(Digit::from_value(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Digits {}
impl FusedIterator for Digits {}
