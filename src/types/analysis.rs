use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisConfig;
use crate::types::digest::TextDigest;

/// Occurrences of one letter in the analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub letter: char,
    pub count: usize,
    /// Share of all letters, in percent (0.0 - 100.0).
    pub percentage: f64,
}

/// Observed letter frequency next to the reference English frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterComparison {
    pub letter: char,
    pub observed: f64,
    pub english: f64,
    /// `observed - english`; positive means over-represented.
    pub difference: f64,
}

/// A repeated contiguous substring (digraph, trigraph, ...) and its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub pattern: String,
    pub count: usize,
}

/// Every frequency analysis of one message, in reporting order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub digest: TextDigest,
    pub created_at: DateTime<Utc>, // informational only
    pub config: AnalysisConfig,
    pub total_letters: usize,

    pub letters: Vec<FrequencyEntry>,
    pub english_comparison: Vec<LetterComparison>,

    /// Identical-letter pairs ("LL", "SS"), alphabetical, untruncated.
    pub doubled_letters: BTreeMap<String, usize>,
    pub digraphs: Vec<PatternEntry>,
    pub trigraphs: Vec<PatternEntry>,
}
