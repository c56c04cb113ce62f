//! Dial-plan range reconciliation.
//!
//! Given a declared number range and the route plan's `(pattern,
//! partition)` rows, this crate answers one question: which numbers in
//! the range are not claimed by any pattern?
//!
//! # Pipeline position
//!
//! ```text
//! entries → dial_pattern::compile → dial_pattern::expand
//!         → dial_range::RangeInventory → **reconcile** → ReconcileReport
//! ```
//!
//! # Example
//!
//! ```
//! use dial_range::NumberRange;
//! use dial_recon::{reconcile, PatternEntry, ReconcileOptions};
//!
//! let range = NumberRange::parse("100", "105")?;
//! let entries = [PatternEntry::new("10[0-3]", Some("PT-Internal"))];
//! let report = reconcile(&entries, &range, "pt-internal", &ReconcileOptions::default());
//! assert_eq!(report.unused, vec!["104".to_owned(), "105".to_owned()]);
//! # Ok::<(), dial_range::InvalidRange>(())
//! ```
//!
//! The run is synchronous and owns all of its state; parallel callers
//! reconciling different ranges need no coordination.

mod entry;
mod reconcile;

pub use entry::PatternEntry;
pub use reconcile::{reconcile, MalformedEntry, ReconcileOptions, ReconcileReport};
