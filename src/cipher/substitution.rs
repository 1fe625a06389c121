use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::alphabet::{Alphabet, ALPHABET_LEN};
use crate::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl Operation {
    pub fn inverse(self) -> Self {
        match self {
            Operation::Encrypt => Operation::Decrypt,
            Operation::Decrypt => Operation::Encrypt,
        }
    }

    /// Forward distance to move along the alphabet, always in `0..26`.
    fn offset(self, shift: i64) -> usize {
        let shift = shift.rem_euclid(ALPHABET_LEN as i64) as usize;
        match self {
            Operation::Encrypt => shift,
            Operation::Decrypt => (ALPHABET_LEN - shift) % ALPHABET_LEN,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encrypt => f.write_str("encrypt"),
            Operation::Decrypt => f.write_str("decrypt"),
        }
    }
}

impl FromStr for Operation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "encrypt" => Ok(Operation::Encrypt),
            "decrypt" => Ok(Operation::Decrypt),
            _ => Err(ValidationError::UnknownOperation(s.trim().to_string())),
        }
    }
}

/// Shift every letter of `text` by `shift` positions along `alphabet`.
///
/// Any integer shift is accepted; it is reduced modulo 26 with a
/// non-negative remainder. Characters that are not in the alphabet
/// (anything but A-Z, including lowercase) are dropped from the output
/// rather than reported.
pub fn substitute(text: &str, shift: i64, alphabet: &Alphabet, operation: Operation) -> String {
    let offset = operation.offset(shift);

    let mut output = String::with_capacity(text.len());
    let mut skipped = 0usize;

    for c in text.chars() {
        match alphabet.position_of(c) {
            Some(position) => output.push(alphabet.letter_at(position + offset)),
            None => skipped += 1,
        }
    }

    debug!(
        %operation,
        shift,
        offset,
        letters = output.len(),
        skipped,
        "substitution complete"
    );

    output
}
