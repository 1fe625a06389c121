use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use caesar_lab::analysis::{load_message, AnalysisConfig};
use caesar_lab::FrequencyAnalyzer;

use super::render::write_report;
use super::CommandExecutor;

/// Frequency analysis of an intercepted message.
///
/// Prints letter frequencies next to English reference frequencies, doubled
/// letters, and the most common digraphs and trigraphs.
#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// Path to the message file (UTF-8 text)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON report to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of digraphs and trigraphs to list
    #[arg(long, default_value = "10")]
    pub top: usize,
}

impl CommandExecutor for AnalyzeCommand {
    fn execute(&self) -> Result<()> {
        let message = load_message(&self.file)
            .with_context(|| format!("Failed to load message from {}", self.file.display()))?;

        let config = AnalysisConfig {
            top_n: self.top,
            ..AnalysisConfig::v0()
        };
        let report = FrequencyAnalyzer::new(config).analyze(&message);

        info!(digest = report.digest.as_str(), total_letters = report.total_letters, "analyzed message");

        if self.json {
            println!("{}", report.to_json_pretty()?);
        } else {
            write_report(&mut io::stdout().lock(), &report)?;
        }

        if let Some(path) = &self.output {
            report
                .write_json(path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }

        Ok(())
    }
}
