use std::collections::BTreeMap;

use crate::analysis::config::AnalysisConfig;
use crate::text::NormalizedText;
use crate::types::analysis::PatternEntry;

pub const DIGRAPH: usize = 2;
pub const TRIGRAPH: usize = 3;

/// Repeated substrings of length `window`, ranked with the reference
/// settings (seen at least twice, top 10).
pub fn pattern_frequencies(text: &NormalizedText, window: usize) -> Vec<PatternEntry> {
    ranked_patterns(text, window, &AnalysisConfig::v0())
}

/// Slide a `window`-letter window over `text` with stride 1 and rank the
/// substrings that repeat.
///
/// Sorted by count descending, then pattern ascending, and truncated to
/// `config.top_n`.
pub fn ranked_patterns(
    text: &NormalizedText,
    window: usize,
    config: &AnalysisConfig,
) -> Vec<PatternEntry> {
    let min_occurrences = config.effective_min_occurrences();

    let mut ranked: Vec<PatternEntry> = count_windows(text.as_str(), window)
        .into_iter()
        .filter(|&(_, count)| count >= min_occurrences)
        .map(|(pattern, count)| PatternEntry {
            pattern: pattern.to_string(),
            count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.pattern.cmp(&b.pattern)));
    ranked.truncate(config.top_n);

    debug_assert!(ranked.windows(2).all(|w| {
        w[0].count > w[1].count || (w[0].count == w[1].count && w[0].pattern < w[1].pattern)
    }));

    ranked
}

/// Every identical-letter pair ("LL", "SS") with its count.
///
/// Overlapping runs count once per window, so "LLL" holds "LL" twice.
pub fn doubled_letter_scan(text: &NormalizedText) -> BTreeMap<String, usize> {
    count_windows(text.as_str(), DIGRAPH)
        .into_iter()
        .filter(|(pattern, _)| pattern.as_bytes()[0] == pattern.as_bytes()[1])
        .map(|(pattern, count)| (pattern.to_string(), count))
        .collect()
}

// Byte slicing is sound: normalized text is ASCII.
fn count_windows(text: &str, window: usize) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    if window == 0 || window > text.len() {
        return counts;
    }

    for start in 0..=text.len() - window {
        *counts.entry(&text[start..start + window]).or_insert(0) += 1;
    }
    counts
}
