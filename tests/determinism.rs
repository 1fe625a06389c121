use chrono::{TimeZone, Utc};
use caesar_lab::analysis::FrequencyAnalyzer;
use caesar_lab::cipher::{substitute, Operation};
use caesar_lab::text::build_permuted_alphabet;

const INTERCEPT: &str = "Wkh vhfuhw phvvdjh lv klgghq lq sodlq vljkw. \
    Ehzduh wkh phvvhqjhu zkr euhdnv wkh flskhu zlwk ohwwhu frxqwv.";

#[test]
fn analysis_is_deterministic() {
    let analyzer = FrequencyAnalyzer::default();

    let mut report1 = analyzer.analyze(INTERCEPT);
    let mut report2 = analyzer.analyze(INTERCEPT);

    // created_at is informational
    let fixed_time = Utc.timestamp_opt(0, 0).unwrap();
    report1.created_at = fixed_time;
    report2.created_at = fixed_time;

    let json1 = serde_json::to_string_pretty(&report1).unwrap();
    let json2 = serde_json::to_string_pretty(&report2).unwrap();

    assert_eq!(json1, json2, "Analysis output is not deterministic");
}

#[test]
fn separate_analyzers_agree() {
    let a = FrequencyAnalyzer::default().analyze(INTERCEPT);
    let b = FrequencyAnalyzer::default().analyze(INTERCEPT);

    assert_eq!(a.digest, b.digest);
    assert_eq!(a.letters, b.letters);
    assert_eq!(a.digraphs, b.digraphs);
    assert_eq!(a.trigraphs, b.trigraphs);
    assert_eq!(a.doubled_letters, b.doubled_letters);
}

#[test]
fn analyses_on_other_threads_match() {
    let expected = FrequencyAnalyzer::default().analyze(INTERCEPT);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| FrequencyAnalyzer::default().analyze(INTERCEPT)))
        .collect();

    for handle in handles {
        let report = handle.join().unwrap();
        assert_eq!(report.letters, expected.letters);
        assert_eq!(report.digraphs, expected.digraphs);
    }
}

#[test]
fn substitution_is_deterministic() {
    let alphabet = build_permuted_alphabet("cryptography");
    let first = substitute("THEQUICKBROWNFOX", 11, &alphabet, Operation::Encrypt);
    for _ in 0..10 {
        assert_eq!(substitute("THEQUICKBROWNFOX", 11, &alphabet, Operation::Encrypt), first);
    }
}

#[test]
fn caesar_intercept_reveals_shift() {
    // The intercept above is shift-3 Caesar; its most common letter maps back to E.
    let report = FrequencyAnalyzer::default().analyze(INTERCEPT);
    let top = report.letters[0].letter;
    assert_eq!(top, 'H');

    let alphabet = caesar_lab::types::Alphabet::standard();
    let guess = (alphabet.position_of(top).unwrap() as i64) - (alphabet.position_of('E').unwrap() as i64);
    assert_eq!(guess, 3);
    assert!(substitute("WKH", guess, &alphabet, Operation::Decrypt) == "THE");
}
