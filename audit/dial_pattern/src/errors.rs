//! Error types for pattern compilation.
//!
//! A malformed pattern is scoped to the single dial-plan entry it came
//! from; batch callers record the failure and keep going. Note that most
//! surprising inputs are *not* errors: unknown characters are ignored,
//! empty classes drop their position, and `*`/`#` yield the well-defined
//! `NonNumeric` outcome rather than a failure.

use serde::Serialize;
use thiserror::Error;

/// A pattern that cannot be compiled to a well-defined slot sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum MalformedPattern {
    /// A class range operator appeared with no digit before it to act as
    /// the lower bound, e.g. `[-5]` or a `-` left dangling when its class
    /// closed, as in `[1-]2`.
    #[error("class range has no starting digit")]
    RangeWithoutStart,

    /// A class range ran high-to-low, e.g. `[7-3]`. There is no
    /// principled reading of a descending range, so it is rejected
    /// rather than guessed at.
    #[error("class range `{lo}-{hi}` is descending")]
    DescendingRange {
        /// The written lower bound.
        lo: char,
        /// The written upper bound.
        hi: char,
    },

    /// The pattern needs more output positions than a direct-dial number
    /// can have.
    #[error("pattern exceeds the {limit}-position limit")]
    TooManyPositions {
        /// The fixed position cap.
        limit: usize,
    },
}
