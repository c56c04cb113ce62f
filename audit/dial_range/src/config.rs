//! Externally-sourced range declarations.
//!
//! Collaborator layers hand the core a list of declared ranges (the shape
//! of a `dialplan.json` document): a human description, the two
//! boundary strings, and the partition the range's numbers live in. This
//! module validates a declaration into a [`DeclaredRange`] and selects
//! one out of many by description. No file I/O happens here; the serde
//! derives exist so the collaborator layer can move the raw entries over
//! whatever transport it owns.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::range::{InvalidRange, NumberRange};

/// A raw range declaration as sourced from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEntry {
    /// Human label the range is selected by. Must be non-empty.
    pub description: String,
    /// First number of the range, as written (padding preserved).
    pub range_start: String,
    /// Last number of the range, as written.
    pub range_end: String,
    /// Partition the range's numbers belong to. Absent means the empty
    /// partition.
    #[serde(default)]
    pub partition: Option<String>,
}

/// A validated range declaration, ready to drive a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredRange {
    pub description: String,
    /// Empty string when the declaration named no partition.
    pub partition: String,
    pub range: NumberRange,
}

impl RangeEntry {
    /// Checks the declaration and parses its boundaries.
    pub fn validate(&self) -> Result<DeclaredRange, InvalidRange> {
        if self.description.is_empty() {
            return Err(InvalidRange::MissingDescription);
        }
        let range = NumberRange::parse(&self.range_start, &self.range_end)?;
        Ok(DeclaredRange {
            description: self.description.clone(),
            partition: self.partition.clone().unwrap_or_default(),
            range,
        })
    }
}

impl DeclaredRange {
    /// Picks the declared range matching `description`, case-insensitively,
    /// and validates it.
    pub fn select(
        entries: &[RangeEntry],
        description: &str,
    ) -> Result<DeclaredRange, InvalidRange> {
        let wanted = description.to_uppercase();
        let entry = entries
            .iter()
            .find(|e| e.description.to_uppercase() == wanted)
            .ok_or_else(|| InvalidRange::UnknownDescription(description.to_owned()))?;
        debug!(description = %entry.description, "selected declared range");
        entry.validate()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(description: &str, start: &str, end: &str, partition: Option<&str>) -> RangeEntry {
        RangeEntry {
            description: description.to_owned(),
            range_start: start.to_owned(),
            range_end: end.to_owned(),
            partition: partition.map(str::to_owned),
        }
    }

    #[test]
    fn validate_builds_a_declared_range() {
        let declared = match entry("Main DDI block", "2000", "2999", Some("PT-Internal")).validate()
        {
            Ok(d) => d,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(declared.description, "Main DDI block");
        assert_eq!(declared.partition, "PT-Internal");
        assert_eq!(declared.range.count(), 1000);
    }

    #[test]
    fn absent_partition_becomes_empty_string() {
        let declared = match entry("block", "10", "19", None).validate() {
            Ok(d) => d,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(declared.partition, "");
    }

    #[test]
    fn empty_description_is_rejected() {
        assert_eq!(
            entry("", "10", "19", None).validate(),
            Err(InvalidRange::MissingDescription)
        );
    }

    #[test]
    fn boundary_errors_pass_through() {
        assert_eq!(
            entry("block", "100", "19", None).validate(),
            Err(InvalidRange::WidthMismatch {
                start: "100".to_owned(),
                end: "19".to_owned(),
            })
        );
    }

    #[test]
    fn select_is_case_insensitive() {
        let entries = vec![
            entry("Branch A", "100", "199", None),
            entry("Branch B", "200", "299", None),
        ];
        let declared = match DeclaredRange::select(&entries, "branch b") {
            Ok(d) => d,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(declared.description, "Branch B");
        assert_eq!(declared.range.start(), 200);
    }

    #[test]
    fn select_reports_unknown_descriptions() {
        let entries = vec![entry("Branch A", "100", "199", None)];
        assert_eq!(
            DeclaredRange::select(&entries, "Branch Z"),
            Err(InvalidRange::UnknownDescription("Branch Z".to_owned()))
        );
    }
}
