//! Columnar text output for the CLI. The library only returns records.

use std::io::{self, Write};

use caesar_lab::{AnalysisReport, PatternEntry};

pub fn write_report<W: Write>(out: &mut W, report: &AnalysisReport) -> io::Result<()> {
    writeln!(out, "=== Frequency Analysis of Encrypted Message ===")?;
    writeln!(out, "Total letters: {}", report.total_letters)?;
    writeln!(out)?;

    writeln!(out, "Letter Frequency Analysis:")?;
    writeln!(out, "{:<6} {:<7} {:<10}", "Letter", "Count", "Frequency%")?;
    writeln!(out, "{}", "-".repeat(25))?;
    for entry in &report.letters {
        writeln!(out, "{:<6} {:<7} {:.2}%", entry.letter, entry.count, entry.percentage)?;
    }

    writeln!(out)?;
    writeln!(out, "=== Comparison with English Frequencies ===")?;
    writeln!(out, "{:<6} {:<10} {:<12} {:<10}", "Letter", "Message%", "English%", "Difference")?;
    writeln!(out, "{}", "-".repeat(40))?;
    for row in &report.english_comparison {
        writeln!(
            out,
            "{:<6} {:<10.2} {:<12.2} {:+.2}",
            row.letter, row.observed, row.english, row.difference
        )?;
    }

    writeln!(out)?;
    writeln!(out, "=== Common Letter Patterns ===")?;
    writeln!(out, "Double letters found:")?;
    for (pattern, count) in &report.doubled_letters {
        writeln!(out, "{pattern}: {count} times")?;
    }

    writeln!(out)?;
    write_patterns(out, "Most common digraphs:", &report.digraphs)?;
    writeln!(out)?;
    write_patterns(out, "Most common trigraphs:", &report.trigraphs)
}

fn write_patterns<W: Write>(out: &mut W, title: &str, patterns: &[PatternEntry]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for entry in patterns {
        writeln!(out, "{}: {} times", entry.pattern, entry.count)?;
    }
    Ok(())
}
