use crate::analysis::reference::english_frequency;
use crate::text::NormalizedText;
use crate::types::alphabet::ALPHABET_LEN;
use crate::types::analysis::{FrequencyEntry, LetterComparison};

/// Occurrences of each letter, indexed `A = 0 .. Z = 25`.
pub fn letter_counts(text: &NormalizedText) -> [usize; ALPHABET_LEN] {
    let mut counts = [0usize; ALPHABET_LEN];
    for letter in text.as_str().bytes() {
        counts[usize::from(letter - b'A')] += 1;
    }
    counts
}

/// Count and percentage of every letter present in `text`.
///
/// Sorted by percentage descending; equal percentages are ordered by letter
/// ascending. Letters that never occur are omitted, and an empty text gives
/// an empty table.
pub fn letter_frequencies(text: &NormalizedText) -> Vec<FrequencyEntry> {
    let total = text.len();
    let counts = letter_counts(text);

    let mut entries: Vec<FrequencyEntry> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(index, &count)| FrequencyEntry {
            letter: char::from(b'A' + index as u8),
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect();

    // Percentage is monotonic in count, so sort on the exact integer.
    entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.letter.cmp(&b.letter)));

    debug_assert_eq!(entries.iter().map(|e| e.count).sum::<usize>(), total);

    entries
}

/// Pair each observed frequency with the reference English frequency,
/// keeping the order of `entries`.
pub fn compare_with_english(entries: &[FrequencyEntry]) -> Vec<LetterComparison> {
    entries
        .iter()
        .map(|entry| {
            let english = english_frequency(entry.letter).unwrap_or(0.0);
            LetterComparison {
                letter: entry.letter,
                observed: entry.percentage,
                english,
                difference: entry.percentage - english,
            }
        })
        .collect()
}
