//! Candidate enumeration for compiled patterns.
//!
//! Expansion walks the Cartesian product of a pattern's slots and keeps
//! the candidates that fall numerically inside a bounded range. Candidates
//! are returned in their literal string form: a pattern shorter than the
//! range's boundary strings yields shorter candidates, which will not
//! string-match a zero-padded inventory. That pass-through is deliberate;
//! [`ExpandOptions::pad_to_width`] is the opt-in normalization for callers
//! that want short candidates to match anyway.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::compile::{Compiled, MAX_SLOTS};

/// Knobs for candidate normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandOptions {
    /// When set, candidates shorter than this width are left-padded with
    /// `'0'` before being returned, so they can string-match a fixed-width
    /// inventory. `None` preserves the literal form.
    pub pad_to_width: Option<usize>,
}

/// Enumerates the concrete numeric strings a compiled pattern produces
/// within `[start, end]`.
///
/// Returns the empty set for [`Compiled::NonNumeric`] and for an empty
/// slot sequence. The result is ordered and duplicate-free (a class like
/// `[11]` collapses).
pub fn expand(
    compiled: &Compiled,
    start: u64,
    end: u64,
    opts: &ExpandOptions,
) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    let Compiled::Slots(slots) = compiled else {
        return out;
    };
    if slots.is_empty() {
        return out;
    }

    // Materialize each slot's digits once; the odometer below re-reads
    // them per candidate.
    let choices: SmallVec<[SmallVec<[u8; 10]>; MAX_SLOTS]> =
        slots.iter().map(|slot| slot.digits().collect()).collect();
    // The compiler drops zero-candidate slots, but a hand-built slot
    // sequence may still contain one; its product is empty.
    if choices.iter().any(|digits| digits.is_empty()) {
        return out;
    }
    let mut cursor: SmallVec<[usize; MAX_SLOTS]> = SmallVec::new();
    cursor.resize(choices.len(), 0);

    loop {
        let mut value: u64 = 0;
        let mut text = String::with_capacity(choices.len());
        for (slot, &i) in choices.iter().zip(cursor.iter()) {
            let digit = slot[i];
            value = value * 10 + u64::from(digit);
            text.push(char::from(b'0' + digit));
        }
        if value >= start && value <= end {
            out.insert(match opts.pad_to_width {
                Some(width) if text.len() < width => format!("{text:0>width$}"),
                _ => text,
            });
        }

        // Odometer step, most significant position last to roll over.
        let mut pos = cursor.len();
        loop {
            if pos == 0 {
                return out;
            }
            pos -= 1;
            cursor[pos] += 1;
            if cursor[pos] < choices[pos].len() {
                break;
            }
            cursor[pos] = 0;
        }
    }
}
