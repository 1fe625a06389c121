use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Message must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Message contains no letters: {0}")]
    Empty(PathBuf),
}

/// Read an intercepted message from disk.
///
/// The text is returned as written; normalization happens in the analyzer.
pub fn load_message(path: &Path) -> Result<String, LoadError> {
    let raw = fs::read(path)?;
    let message = String::from_utf8(raw)?;

    if !message.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    debug!(path = %path.display(), bytes = message.len(), "loaded message");

    Ok(message)
}
