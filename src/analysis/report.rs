use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::types::analysis::AnalysisReport;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnalysisReport {
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty JSON, replacing any existing file.
    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let f = fs::File::create(path)?;
        serde_json::to_writer_pretty(&f, self)?;
        f.sync_all()?;
        Ok(())
    }
}
