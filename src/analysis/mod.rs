//! Frequency analysis of intercepted ciphertext.
//!
//! The free functions ([`letter_frequencies`], [`pattern_frequencies`],
//! [`doubled_letter_scan`]) are pure and independent. [`FrequencyAnalyzer`]
//! runs all of them over one message and bundles the results into an
//! [`AnalysisReport`].

pub mod config;
pub mod letters;
pub mod loader;
pub mod patterns;
pub mod reference;
pub mod report;

pub use config::AnalysisConfig;
pub use letters::{compare_with_english, letter_counts, letter_frequencies};
pub use loader::{load_message, LoadError};
pub use patterns::{doubled_letter_scan, pattern_frequencies, ranked_patterns, DIGRAPH, TRIGRAPH};
pub use reference::{english_frequency, ENGLISH_LETTER_FREQUENCIES};
pub use report::ReportError;

use chrono::Utc;
use tracing::debug;

use crate::text::{normalize, NormalizedText};
use crate::types::analysis::AnalysisReport;
use crate::types::digest::TextDigest;

#[derive(Debug, Clone, Default)]
pub struct FrequencyAnalyzer {
    config: AnalysisConfig,
}

impl FrequencyAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Normalize `message` and run every analysis over it.
    pub fn analyze(&self, message: &str) -> AnalysisReport {
        self.analyze_normalized(&normalize(message))
    }

    pub fn analyze_normalized(&self, text: &NormalizedText) -> AnalysisReport {
        // 1. Single letters
        let letters = letter_frequencies(text);
        let english_comparison = compare_with_english(&letters);

        debug_assert!(
            letters.is_empty()
                || (letters.iter().map(|e| e.percentage).sum::<f64>() - 100.0).abs() < 1e-9,
            "letter percentages must sum to 100"
        );

        // 2. Repeated patterns
        let doubled_letters = doubled_letter_scan(text);
        let digraphs = ranked_patterns(text, DIGRAPH, &self.config);
        let trigraphs = ranked_patterns(text, TRIGRAPH, &self.config);

        debug!(
            total_letters = text.len(),
            distinct_letters = letters.len(),
            digraphs = digraphs.len(),
            trigraphs = trigraphs.len(),
            doubled = doubled_letters.len(),
            "frequency analysis complete"
        );

        AnalysisReport {
            digest: TextDigest::from_text(text),
            created_at: Utc::now(),
            config: self.config.clone(),
            total_letters: text.len(),
            letters,
            english_comparison,
            doubled_letters,
            digraphs,
            trigraphs,
        }
    }
}
