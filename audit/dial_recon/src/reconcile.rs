//! The reconciliation engine.
//!
//! Drives the pattern compiler and expander over every entry in the
//! target partition, marks claimed numbers in a fresh inventory, and
//! reports the unused remainder in ascending order.
//!
//! Failure policy: a malformed pattern spoils only its own entry — it is
//! recorded in the report and the run continues. Entries in other
//! partitions are inert. Non-numeric patterns (`*`/`#`) are valid but
//! unmatchable and are counted, not recorded as failures. Range-level
//! problems never reach this module: an invalid range fails
//! `NumberRange::parse` before any inventory exists.

use serde::Serialize;
use tracing::debug;

use dial_pattern::{compile, expand, Compiled, ExpandOptions, MalformedPattern};
use dial_range::{NumberRange, RangeInventory};

use crate::entry::PatternEntry;

/// Per-run policy knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Zero-pad expanded candidates to the range width before matching.
    ///
    /// Off by default: matching is by exact string, so a candidate
    /// shorter than the range width misses silently and a number covered
    /// by a short pattern is still reported unused. Turning this on
    /// closes that gap.
    pub normalize_width: bool,
}

/// A pattern entry that could not be compiled, kept distinct from
/// non-numeric entries (which are valid, just unmatchable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedEntry {
    pub pattern: String,
    pub partition: String,
    pub error: MalformedPattern,
}

/// Outcome of one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Numbers in the range no pattern claimed, ascending, zero-padded to
    /// the range width.
    pub unused: Vec<String>,
    /// Entries offered to the run, any partition.
    pub entries_seen: usize,
    /// Entries whose partition matched the target.
    pub entries_matched: usize,
    /// Matched entries skipped as non-numeric (`*`/`#`).
    pub non_numeric: usize,
    /// Candidates that found an inventory entry to mark.
    pub candidates_marked: usize,
    /// Matched entries whose pattern failed to compile.
    pub malformed: Vec<MalformedEntry>,
}

impl ReconcileReport {
    /// Count of unused numbers.
    pub fn unused_count(&self) -> usize {
        self.unused.len()
    }
}

/// Reconciles a stream of pattern entries against a declared range.
///
/// Builds one inventory, owned by this call; for each entry in
/// `target_partition` (compared case-insensitively), compiles and expands
/// the pattern and marks every resulting candidate. Candidate misses are
/// ignored by design. The unused read-back is always in ascending
/// inventory order, independent of entry order.
pub fn reconcile(
    entries: &[PatternEntry],
    range: &NumberRange,
    target_partition: &str,
    opts: &ReconcileOptions,
) -> ReconcileReport {
    let mut inventory = RangeInventory::build(range);
    let expand_opts = ExpandOptions {
        pad_to_width: opts.normalize_width.then_some(range.width()),
    };
    let target = target_partition.to_uppercase();

    let mut entries_matched = 0;
    let mut non_numeric = 0;
    let mut candidates_marked = 0;
    let mut malformed = Vec::new();

    for entry in entries {
        if entry.partition_name().to_uppercase() != target {
            continue;
        }
        entries_matched += 1;
        match compile(&entry.pattern) {
            Ok(Compiled::NonNumeric) => {
                non_numeric += 1;
                debug!(pattern = %entry.pattern, "non-numeric pattern skipped");
            }
            Ok(compiled) => {
                for candidate in expand(&compiled, range.start(), range.end(), &expand_opts) {
                    if inventory.mark_used(&candidate) {
                        candidates_marked += 1;
                    }
                }
            }
            Err(error) => {
                debug!(pattern = %entry.pattern, %error, "malformed pattern entry");
                malformed.push(MalformedEntry {
                    pattern: entry.pattern.clone(),
                    partition: entry.partition_name().to_owned(),
                    error,
                });
            }
        }
    }

    debug!(
        used = inventory.used_count(),
        total = inventory.len(),
        "reconciliation complete"
    );

    ReconcileReport {
        unused: inventory.unused().map(str::to_owned).collect(),
        entries_seen: entries.len(),
        entries_matched,
        non_numeric,
        candidates_marked,
        malformed,
    }
}

#[cfg(test)]
mod tests;
