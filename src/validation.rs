//! Validation of raw user input before it reaches the cipher engine.
//!
//! The engine itself accepts anything; these rules are what the interactive
//! front end enforces so that learners get a descriptive message and a
//! chance to retry instead of a silently surprising result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::{build_permuted_alphabet, normalize};
use crate::types::alphabet::Alphabet;

pub const MIN_SHIFT: i64 = 1;
pub const MAX_SHIFT: i64 = 25;
pub const MIN_KEYWORD_LETTERS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid key {0:?}: it must be an integer between 1 and 25")]
    InvalidShiftKey(String),

    #[error("Invalid key {0}: it must be an integer between 1 and 25")]
    ShiftKeyOutOfRange(i64),

    #[error("Invalid keyword: it must contain at least {min} letters, got {found}")]
    KeywordTooShort { found: usize, min: usize },

    #[error("Invalid keyword: it must contain only letters ('A'-'Z', 'a'-'z')")]
    KeywordInvalidChars,

    #[error("Invalid operation {0:?}: expected 'encrypt' or 'decrypt'")]
    UnknownOperation(String),

    #[error("Input cannot be empty")]
    EmptyText,
}

/// A shift key in `1..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ShiftKey(i64);

impl ShiftKey {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (MIN_SHIFT..=MAX_SHIFT).contains(&value) {
            Ok(ShiftKey(value))
        } else {
            Err(ValidationError::ShiftKeyOutOfRange(value))
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for ShiftKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ValidationError::InvalidShiftKey(trimmed.to_string()))?;
        ShiftKey::new(value)
    }
}

impl TryFrom<i64> for ShiftKey {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        ShiftKey::new(value)
    }
}

impl From<ShiftKey> for i64 {
    fn from(key: ShiftKey) -> Self {
        key.0
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A permutation keyword: letters only, at least seven of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword(String);

impl Keyword {
    /// Length is checked before content, so `"abc1"` reports too short
    /// rather than invalid characters.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let letters = normalize(trimmed).len();

        if letters < MIN_KEYWORD_LETTERS {
            return Err(ValidationError::KeywordTooShort {
                found: letters,
                min: MIN_KEYWORD_LETTERS,
            });
        }
        if letters != trimmed.chars().count() {
            return Err(ValidationError::KeywordInvalidChars);
        }

        Ok(Keyword(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn alphabet(&self) -> Alphabet {
        build_permuted_alphabet(&self.0)
    }
}

impl FromStr for Keyword {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::parse(s)
    }
}

/// Reject input that is blank after trimming.
pub fn require_text(raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyText)
    } else {
        Ok(trimmed)
    }
}

