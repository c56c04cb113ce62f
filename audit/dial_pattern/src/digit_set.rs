//! Compact digit-set representation for pattern slots.
//!
//! A slot holds the set of decimal digits one output position may take.
//! Ten possible members fit comfortably in a 10-bit mask, so the set is a
//! `u16` newtype: membership is a bit test, complement is a mask flip, and
//! iteration walks the bits in ascending digit order.

use std::fmt;

/// Bits 0..=9 set.
const ALL_DIGITS: u16 = 0x03FF;

/// The set of decimal digit characters a single pattern position may
/// produce.
///
/// Iteration order is ascending by digit value. Insertion order is not
/// preserved; callers that need "the most recently added digit" (the class
/// range rule) track it separately.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: DigitSet = DigitSet(0);

    /// All ten digits, `{0..9}`. This is what the `X` wildcard compiles to.
    pub const ALL: DigitSet = DigitSet(ALL_DIGITS);

    /// Adds a digit value (`0..=9`) to the set.
    pub fn insert(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "digit value out of range: {digit}");
        self.0 |= 1 << digit;
    }

    /// Whether the set contains the digit value.
    pub fn contains(self, digit: u8) -> bool {
        digit <= 9 && self.0 & (1 << digit) != 0
    }

    /// The complement within `{0..9}`. Applied when a negated class closes.
    pub fn complement(self) -> DigitSet {
        DigitSet(!self.0 & ALL_DIGITS)
    }

    /// Number of digits in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Digit values in ascending order.
    pub fn digits(self) -> impl Iterator<Item = u8> {
        (0..=9u8).filter(move |&d| self.contains(d))
    }

    /// Digit characters (`'0'..='9'`) in ascending order.
    pub fn chars(self) -> impl Iterator<Item = char> {
        self.digits().map(|d| char::from(b'0' + d))
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = DigitSet::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for c in self.chars() {
            write!(f, "{c}")?;
        }
        write!(f, "}}")
    }
}
