//! Pattern entries as sourced from the route plan.

use serde::{Deserialize, Serialize};

/// One `(pattern, partition)` row handed in by the collaborator layer
/// that owns transport to the configuration source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    /// The dial-plan pattern string, as configured.
    pub pattern: String,
    /// Partition the pattern belongs to. The source reports patterns
    /// outside any partition as null; those compare as the empty string.
    #[serde(default)]
    pub partition: Option<String>,
}

impl PatternEntry {
    pub fn new(pattern: impl Into<String>, partition: Option<&str>) -> PatternEntry {
        PatternEntry {
            pattern: pattern.into(),
            partition: partition.map(str::to_owned),
        }
    }

    /// The partition name, with an absent partition read as the empty
    /// string.
    pub fn partition_name(&self) -> &str {
        self.partition.as_deref().unwrap_or("")
    }
}
