use caesar_lab::analysis::{
    compare_with_english, doubled_letter_scan, english_frequency, letter_counts,
    letter_frequencies, pattern_frequencies, ranked_patterns, AnalysisConfig, FrequencyAnalyzer,
    DIGRAPH, ENGLISH_LETTER_FREQUENCIES, TRIGRAPH,
};
use caesar_lab::text::normalize;
use caesar_lab::types::PatternEntry;

const SAMPLES: [&str; 5] = [
    "Hello, World!",
    "A",
    "The quick brown fox jumps over the lazy dog",
    "ZZZZ",
    "Frequency analysis breaks every monoalphabetic substitution cipher eventually.",
];

fn entry(pattern: &str, count: usize) -> PatternEntry {
    PatternEntry {
        pattern: pattern.to_string(),
        count,
    }
}

#[test]
fn letter_frequencies_sorted_with_alphabetical_ties() {
    let entries = letter_frequencies(&normalize("Hello, World!"));

    let order: String = entries.iter().map(|e| e.letter).collect();
    assert_eq!(order, "LODEHRW");

    assert_eq!(entries[0].count, 3);
    assert!((entries[0].percentage - 30.0).abs() < 1e-9);
    assert_eq!(entries[1].count, 2);
    assert!((entries[1].percentage - 20.0).abs() < 1e-9);
    assert!(entries[2..].iter().all(|e| e.count == 1));
}

#[test]
fn frequency_sum_invariant() {
    for sample in SAMPLES {
        let text = normalize(sample);
        let entries = letter_frequencies(&text);

        let count_sum: usize = entries.iter().map(|e| e.count).sum();
        let percentage_sum: f64 = entries.iter().map(|e| e.percentage).sum();

        assert_eq!(count_sum, text.len(), "counts must sum to total for {sample:?}");
        assert!(
            (percentage_sum - 100.0).abs() < 1e-9,
            "percentages sum to {percentage_sum} for {sample:?}"
        );
        assert!(entries.windows(2).all(|w| w[0].percentage >= w[1].percentage));
    }
}

#[test]
fn empty_text_has_no_frequencies() {
    let text = normalize("1234 !?");
    assert!(letter_frequencies(&text).is_empty());
    assert!(pattern_frequencies(&text, DIGRAPH).is_empty());
    assert!(doubled_letter_scan(&text).is_empty());
    assert_eq!(letter_counts(&text), [0; 26]);
}

#[test]
fn english_reference_table_ships_as_published() {
    assert_eq!(ENGLISH_LETTER_FREQUENCIES.len(), 26);
    assert_eq!(english_frequency('A'), Some(8.17));
    assert_eq!(english_frequency('E'), Some(12.70));
    assert_eq!(english_frequency('T'), Some(9.06));
    assert_eq!(english_frequency('Q'), Some(0.09));
    assert_eq!(english_frequency('Z'), Some(0.07));
    assert_eq!(english_frequency('a'), None);

    for (index, (letter, _)) in ENGLISH_LETTER_FREQUENCIES.iter().enumerate() {
        assert_eq!(*letter, char::from(b'A' + index as u8));
    }

    let total: f64 = ENGLISH_LETTER_FREQUENCIES.iter().map(|(_, f)| f).sum();
    assert!((total - 100.0).abs() < 0.1, "reference table sums to {total}");
}

#[test]
fn comparison_reports_signed_difference_in_entry_order() {
    let entries = letter_frequencies(&normalize("Hello, World!"));
    let comparison = compare_with_english(&entries);

    assert_eq!(comparison.len(), entries.len());
    for (row, entry) in comparison.iter().zip(&entries) {
        assert_eq!(row.letter, entry.letter);
        assert_eq!(row.observed, entry.percentage);
        assert_eq!(Some(row.english), english_frequency(row.letter));
        assert!((row.difference - (row.observed - row.english)).abs() < 1e-12);
    }

    let l = &comparison[0];
    assert_eq!(l.letter, 'L');
    assert!((l.difference - 25.97).abs() < 1e-9);

    // W: 10% observed against 2.36% expected.
    let w = comparison.iter().find(|row| row.letter == 'W').unwrap();
    assert!((w.difference - 7.64).abs() < 1e-9);

    let rare = compare_with_english(&letter_frequencies(&normalize("eaaaaaaaaa")));
    let e = rare.iter().find(|row| row.letter == 'E').unwrap();
    assert!(e.difference < 0.0, "E is under-represented");
}

#[test]
fn digraphs_and_trigraphs_ranked() {
    let text = normalize("the then the");

    assert_eq!(
        pattern_frequencies(&text, DIGRAPH),
        vec![entry("HE", 3), entry("TH", 3)]
    );
    assert_eq!(pattern_frequencies(&text, TRIGRAPH), vec![entry("THE", 3)]);
}

#[test]
fn pattern_reports_drop_singletons_and_truncate() {
    let twice = normalize(&"ABCDEFGHIJKLMNOPQRSTUVWXYZ".repeat(2));

    let digraphs = pattern_frequencies(&twice, DIGRAPH);
    let names: Vec<&str> = digraphs.iter().map(|e| e.pattern.as_str()).collect();
    assert_eq!(names, ["AB", "BC", "CD", "DE", "EF", "FG", "GH", "HI", "IJ", "JK"]);
    assert!(digraphs.iter().all(|e| e.count == 2));

    let trigraphs = pattern_frequencies(&twice, TRIGRAPH);
    assert_eq!(trigraphs.len(), 10);
    assert_eq!(trigraphs[0], entry("ABC", 2));
    assert_eq!(trigraphs[9], entry("JKL", 2));

    for sample in SAMPLES {
        let text = normalize(sample);
        for window in [DIGRAPH, TRIGRAPH] {
            let ranked = pattern_frequencies(&text, window);
            assert!(ranked.len() <= 10);
            assert!(ranked.iter().all(|e| e.count > 1), "singleton in {sample:?}");
            assert!(ranked.iter().all(|e| e.pattern.len() == window));
        }
    }

    assert!(pattern_frequencies(&normalize("HELLOWORLD"), DIGRAPH).is_empty());
}

#[test]
fn ranked_patterns_follow_config() {
    let twice = normalize(&"ABCDEFGHIJKLMNOPQRSTUVWXYZ".repeat(2));

    let wide = AnalysisConfig {
        top_n: 100,
        ..AnalysisConfig::v0()
    };
    assert_eq!(ranked_patterns(&twice, DIGRAPH, &wide).len(), 25);

    let strict = AnalysisConfig {
        top_n: 100,
        min_occurrences: 3,
    };
    assert!(ranked_patterns(&twice, DIGRAPH, &strict).is_empty());

    // A pattern seen once never qualifies, whatever the config says.
    let lax = AnalysisConfig {
        top_n: 100,
        min_occurrences: 0,
    };
    assert_eq!(ranked_patterns(&twice, DIGRAPH, &lax).len(), 25);
}

#[test]
fn window_edge_cases() {
    let text = normalize("AB");
    assert!(pattern_frequencies(&text, 0).is_empty());
    assert!(pattern_frequencies(&text, 3).is_empty());
    assert_eq!(pattern_frequencies(&normalize("ABAB"), 1), vec![entry("A", 2), entry("B", 2)]);
}

#[test]
fn doubled_letter_scan_reports_every_pair() {
    let doubled = doubled_letter_scan(&normalize("Balloons, see lll"));

    let pairs: Vec<(&str, usize)> = doubled.iter().map(|(p, c)| (p.as_str(), *c)).collect();
    assert_eq!(pairs, [("EE", 1), ("LL", 3), ("OO", 1), ("SS", 1)]);

    // No truncation, no singleton filter.
    let alphabet_pairs: String = ('A'..='Z').map(|c| format!("{c}{c}X")).collect();
    assert_eq!(doubled_letter_scan(&normalize(&alphabet_pairs)).len(), 26);
}

#[test]
fn analyzer_bundles_every_analysis() {
    let message = "the then the, balloon";
    let text = normalize(message);
    let report = FrequencyAnalyzer::default().analyze(message);

    assert_eq!(report.total_letters, text.len());
    assert_eq!(report.config, AnalysisConfig::v0());
    assert_eq!(report.letters, letter_frequencies(&text));
    assert_eq!(report.english_comparison, compare_with_english(&report.letters));
    assert_eq!(report.digraphs, pattern_frequencies(&text, DIGRAPH));
    assert_eq!(report.trigraphs, pattern_frequencies(&text, TRIGRAPH));
    assert_eq!(report.doubled_letters, doubled_letter_scan(&text));
}

#[test]
fn analyzer_respects_top_n() {
    let analyzer = FrequencyAnalyzer::new(AnalysisConfig {
        top_n: 3,
        ..AnalysisConfig::v0()
    });
    assert_eq!(analyzer.config().top_n, 3);

    let report = analyzer.analyze(&"ABCDEFGHIJKLMNOPQRSTUVWXYZ".repeat(2));
    assert_eq!(report.digraphs.len(), 3);
    assert_eq!(report.trigraphs.len(), 3);
}
