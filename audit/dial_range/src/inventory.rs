//! The used/unused inventory for a declared range.
//!
//! One inventory is built per reconciliation run, owned by that run, and
//! discarded once the unused list has been read back; nothing is shared
//! across runs. Lookups are by **exact string equality** against the
//! zero-padded entry form: a candidate whose string form is shorter than
//! the range width is numerically in range but still misses (see
//! `dial_pattern::ExpandOptions` for the opt-in normalization).

use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::range::NumberRange;

/// One number in the range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    /// Decimal string, zero-padded to the range width.
    pub number: String,
    /// Whether any pattern claimed this number.
    pub used: bool,
    /// Reserved classification tier (bronze/silver/gold style). Never
    /// computed or read anywhere; retained as a forward-compatibility
    /// placeholder.
    pub classification: u32,
}

/// The total, duplicate-free, ascending enumeration of a range's numbers,
/// each with a used flag.
#[derive(Debug, Clone)]
pub struct RangeInventory {
    entries: Vec<InventoryEntry>,
    /// Exact-string lookup into `entries`.
    index: FxHashMap<String, usize>,
    used_count: usize,
}

impl RangeInventory {
    /// Enumerates the range into `end - start + 1` unused entries.
    pub fn build(range: &NumberRange) -> RangeInventory {
        let width = range.width();
        let mut entries = Vec::with_capacity(range.count() as usize);
        let mut index =
            FxHashMap::with_capacity_and_hasher(range.count() as usize, FxBuildHasher);
        for value in range.start()..=range.end() {
            let number = format!("{value:0width$}");
            index.insert(number.clone(), entries.len());
            entries.push(InventoryEntry {
                number,
                used: false,
                classification: 0,
            });
        }
        RangeInventory {
            entries,
            index,
            used_count: 0,
        }
    }

    /// Marks the entry exactly matching `candidate` as used.
    ///
    /// Returns whether a match was found. A miss is not an error: the
    /// candidate simply is not reflected in the inventory. Marking an
    /// already-used entry again is still a hit.
    pub fn mark_used(&mut self, candidate: &str) -> bool {
        match self.index.get(candidate) {
            Some(&i) => {
                if !self.entries[i].used {
                    self.entries[i].used = true;
                    self.used_count += 1;
                }
                true
            }
            None => false,
        }
    }

    /// Unused numbers in ascending order.
    pub fn unused(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| !e.used)
            .map(|e| e.number.as_str())
    }

    /// All entries in ascending order.
    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct entries marked used.
    pub fn used_count(&self) -> usize {
        self.used_count
    }
}
