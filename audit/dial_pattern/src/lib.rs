//! Dial-plan pattern compiler.
//!
//! Turns one dial-plan pattern string into the exact, finite set of
//! numeric strings it can produce, bounded by a numeric range. The crate
//! is standalone (no `dial_*` dependencies) so external tooling can embed
//! the compiler without the reconciliation engine.
//!
//! # Pipeline position
//!
//! ```text
//! pattern string → **compile** → slots → **expand** → candidates → dial_recon
//! ```
//!
//! # Example
//!
//! ```
//! use dial_pattern::{compile, expand, ExpandOptions};
//!
//! let compiled = compile("[1-3]XX")?;
//! let candidates = expand(&compiled, 100, 399, &ExpandOptions::default());
//! assert_eq!(candidates.len(), 300);
//! assert!(candidates.contains("101"));
//! # Ok::<(), dial_pattern::MalformedPattern>(())
//! ```

mod compile;
mod digit_set;
mod errors;
mod expand;

pub use compile::{compile, Compiled, SlotSeq, MAX_SLOTS};
pub use digit_set::DigitSet;
pub use errors::MalformedPattern;
pub use expand::{expand, ExpandOptions};
