use std::fmt;

use serde::Serialize;

/// Text reduced to the letters A-Z.
///
/// The only way to build one is [`normalize`], so every character is an
/// uppercase ASCII letter and byte offsets are character offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip every non-letter and uppercase the rest, preserving order.
///
/// Non-ASCII letters are dropped along with digits and punctuation.
pub fn normalize(text: &str) -> NormalizedText {
    let normalized = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    NormalizedText(normalized)
}
