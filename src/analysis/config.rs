use serde::{Deserialize, Serialize};

/// Smallest count that still makes a substring a "pattern".
pub const MIN_PATTERN_OCCURRENCES: usize = 2;

// Serializable so a report records the settings it was produced with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Ranked digraph and trigraph lists are truncated to this many entries.
    pub top_n: usize,
    /// Patterns seen fewer times are dropped. Values below 2 are raised to 2.
    pub min_occurrences: usize,
}

impl AnalysisConfig {
    pub fn v0() -> Self {
        Self {
            top_n: 10,
            min_occurrences: MIN_PATTERN_OCCURRENCES,
        }
    }

    pub(crate) fn effective_min_occurrences(&self) -> usize {
        self.min_occurrences.max(MIN_PATTERN_OCCURRENCES)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::v0()
    }
}
