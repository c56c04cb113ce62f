//! The dial-plan pattern compiler.
//!
//! One pattern string compiles to the exact, finite description of the
//! numeric strings it can produce: an ordered sequence of [`DigitSet`]
//! slots, one per output position. Patterns containing `*` or `#` cannot
//! represent a direct-dial number at all and compile to
//! [`Compiled::NonNumeric`] instead.
//!
//! # Dialect
//!
//! - literal digits `0`-`9` each claim one position
//! - `X` is a single-position wildcard, `{0..9}`
//! - `[...]` is a character class for one position; `^` at its head
//!   negates it, `lo-hi` adds an inclusive digit range
//! - `*` / `#` mark the whole pattern non-numeric
//! - anything else is decoration and is ignored
//!
//! # Deliberate permissiveness
//!
//! Dial-plan exports embed characters this compiler has no need to
//! interpret (dots, letters, whitespace), so unknown characters are
//! skipped rather than rejected. An empty class (`[]`) or an otherwise
//! zero-candidate slot silently drops its position instead of failing;
//! an unterminated class commits whatever digits it had accumulated,
//! without negation. Downstream consumers rely on decorated patterns
//! compiling, so none of this is tightened into an error.

use smallvec::SmallVec;
use tracing::trace;

use crate::digit_set::DigitSet;
use crate::errors::MalformedPattern;

/// Hard cap on output positions. Sixteen covers the longest E.164 number
/// with room to spare; the cap also bounds the expansion product.
pub const MAX_SLOTS: usize = 16;

/// Ordered per-position digit alternatives.
pub type SlotSeq = SmallVec<[DigitSet; MAX_SLOTS]>;

/// The outcome of compiling one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compiled {
    /// The pattern describes numeric strings: one [`DigitSet`] per output
    /// position, left to right, every slot non-empty.
    Slots(SlotSeq),
    /// The pattern contains `*` or `#` and matches nothing in a numeric
    /// range. A defined outcome, not an error.
    NonNumeric,
}

impl Compiled {
    /// Number of concrete strings this compilation can produce.
    pub fn candidate_count(&self) -> usize {
        match self {
            Compiled::NonNumeric => 0,
            Compiled::Slots(slots) if slots.is_empty() => 0,
            Compiled::Slots(slots) => slots.iter().map(|s| s.len()).product(),
        }
    }
}

/// Scanner state while inside a `[...]` class.
#[derive(Debug, Clone, Copy, Default)]
struct ClassState {
    /// Set by `^` at the head of a still-empty class; applied as a
    /// complement when the class closes.
    negated: bool,
}

/// Single left-to-right scan state. The open slot accumulates digits until
/// the position is committed (a literal digit commits immediately, a class
/// commits at `]`).
#[derive(Default)]
struct Scanner {
    slots: SlotSeq,
    open: DigitSet,
    /// Most recent digit added to the open slot; lower bound for a class
    /// range. Cleared whenever the open slot commits.
    last_digit: Option<u8>,
    class: Option<ClassState>,
    /// A `-` was seen and the next digit completes the range. Survives a
    /// class close; a digit that then arrives finds no lower bound in its
    /// fresh position and errors.
    pending_range: bool,
}

impl Scanner {
    /// Errors if the position about to be written is past the cap. The
    /// open (uncommitted) slot occupies position `slots.len()`.
    fn ensure_room(&self) -> Result<(), MalformedPattern> {
        if self.slots.len() >= MAX_SLOTS {
            return Err(MalformedPattern::TooManyPositions { limit: MAX_SLOTS });
        }
        Ok(())
    }

    fn open_class(&mut self) {
        // Nested `[` while already in a class is a no-op.
        if self.class.is_none() {
            self.class = Some(ClassState::default());
        }
    }

    /// `^` arms negation only at the head of a still-empty class; in any
    /// other position it is a no-op, never an error.
    fn caret(&mut self) {
        if let Some(class) = &mut self.class {
            if self.open.is_empty() {
                class.negated = true;
            }
        }
    }

    /// Closes the current position. A stray `]` outside a class still
    /// commits (and advances past) the current empty position, which the
    /// final empty-slot drop then erases.
    fn close_class(&mut self) -> Result<(), MalformedPattern> {
        self.ensure_room()?;
        let negated = self.class.take().is_some_and(|c| c.negated);
        let slot = if negated { self.open.complement() } else { self.open };
        self.slots.push(slot);
        self.open = DigitSet::EMPTY;
        self.last_digit = None;
        Ok(())
    }

    fn digit(&mut self, digit: u8) -> Result<(), MalformedPattern> {
        self.ensure_room()?;
        if self.pending_range {
            // Inclusive range from the last digit written into the open
            // slot. No such digit (class started with `-`, or the `-`
            // dangled past `]`) has no principled reading.
            let lo = self
                .last_digit
                .ok_or(MalformedPattern::RangeWithoutStart)?;
            if digit < lo {
                return Err(MalformedPattern::DescendingRange {
                    lo: char::from(b'0' + lo),
                    hi: char::from(b'0' + digit),
                });
            }
            for d in lo..=digit {
                self.open.insert(d);
            }
            self.last_digit = Some(digit);
            self.pending_range = false;
        } else if self.class.is_some() {
            self.open.insert(digit);
            self.last_digit = Some(digit);
        } else {
            // Literal digit: a one-element slot, committed immediately.
            let mut slot = DigitSet::EMPTY;
            slot.insert(digit);
            self.slots.push(slot);
        }
        Ok(())
    }

    /// `-` inside a non-empty class arms range mode; inside an empty class
    /// there is nothing to range from; outside a class it is decoration.
    fn dash(&mut self) -> Result<(), MalformedPattern> {
        if self.class.is_some() {
            if self.open.is_empty() {
                return Err(MalformedPattern::RangeWithoutStart);
            }
            self.pending_range = true;
        }
        Ok(())
    }

    /// `X` outside a class is a full-digit position. Inside a class it is
    /// treated like any other unknown character and ignored.
    fn wildcard(&mut self) -> Result<(), MalformedPattern> {
        if self.class.is_none() {
            self.ensure_room()?;
            self.slots.push(DigitSet::ALL);
        }
        Ok(())
    }

    /// Ends the scan: an unterminated class commits its accumulated digits
    /// as-is (negation is only ever applied by `]`), then zero-candidate
    /// positions are dropped.
    fn finish(mut self) -> SlotSeq {
        if self.class.is_some() {
            self.slots.push(self.open);
        }
        self.slots.retain(|slot| !slot.is_empty());
        self.slots
    }
}

/// Compiles one dial-plan pattern into its per-position digit
/// alternatives, or determines it is non-numeric.
///
/// Pure function of the input string. See the module docs for the dialect
/// and the deliberately permissive edge-case handling.
pub fn compile(pattern: &str) -> Result<Compiled, MalformedPattern> {
    let mut scan = Scanner::default();
    for ch in pattern.chars() {
        match ch {
            '*' | '#' => {
                trace!(pattern, "pattern is non-numeric");
                return Ok(Compiled::NonNumeric);
            }
            '[' => scan.open_class(),
            ']' => scan.close_class()?,
            '^' => scan.caret(),
            '-' => scan.dash()?,
            'X' => scan.wildcard()?,
            '0'..='9' => scan.digit(ch as u8 - b'0')?,
            // Unknown characters are decoration; skip them.
            _ => {}
        }
    }
    let slots = scan.finish();
    trace!(pattern, positions = slots.len(), "compiled pattern");
    Ok(Compiled::Slots(slots))
}
