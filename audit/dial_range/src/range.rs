//! Validated numeric ranges.
//!
//! A [`NumberRange`] is constructed only through [`NumberRange::parse`],
//! which is the trust boundary for the two boundary digit strings handed
//! in by collaborator layers. Everything downstream (inventory size,
//! zero-padding width, expansion bounds) is derived from a range that has
//! already been checked.

use thiserror::Error;

/// A range declaration that cannot produce an inventory.
///
/// Fatal to the reconciliation run it was meant for; nothing is built
/// from an invalid range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRange {
    /// A boundary is empty, contains a non-digit, or overflows.
    #[error("range boundary `{0}` is not a decimal number")]
    NotNumeric(String),

    /// Boundary strings differ in length, so the padding width of the
    /// inventory would be ambiguous.
    #[error("range boundaries `{start}` and `{end}` must be the same length")]
    WidthMismatch {
        start: String,
        end: String,
    },

    /// The first number is greater than the last.
    #[error("range start {start} is greater than range end {end}")]
    Inverted {
        start: u64,
        end: u64,
    },

    /// A declared range carries no description to select it by.
    #[error("range declaration has no description")]
    MissingDescription,

    /// No declared range matches the requested description.
    #[error("no declared range matches description `{0}`")]
    UnknownDescription(String),
}

/// An inclusive numeric range `[start, end]` with the zero-padding width
/// of its boundary strings.
///
/// Invariants: `start <= end`, and `width` is the shared character length
/// of both boundary strings, so every number in the range fits in `width`
/// digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    start: u64,
    end: u64,
    width: usize,
}

impl NumberRange {
    /// Validates a pair of equal-length decimal boundary strings.
    pub fn parse(start: &str, end: &str) -> Result<NumberRange, InvalidRange> {
        let start_num = parse_boundary(start)?;
        let end_num = parse_boundary(end)?;
        if start.len() != end.len() {
            return Err(InvalidRange::WidthMismatch {
                start: start.to_owned(),
                end: end.to_owned(),
            });
        }
        if start_num > end_num {
            return Err(InvalidRange::Inverted {
                start: start_num,
                end: end_num,
            });
        }
        Ok(NumberRange {
            start: start_num,
            end: end_num,
            width: end.len(),
        })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Zero-padding width for inventory entries.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of inventory entries the range enumerates.
    pub fn count(&self) -> u64 {
        self.end - self.start + 1
    }

    pub fn contains(&self, value: u64) -> bool {
        value >= self.start && value <= self.end
    }
}

fn parse_boundary(text: &str) -> Result<u64, InvalidRange> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidRange::NotNumeric(text.to_owned()));
    }
    text.parse()
        .map_err(|_| InvalidRange::NotNumeric(text.to_owned()))
}
