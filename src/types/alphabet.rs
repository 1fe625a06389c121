use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of symbols in every alphabet handled by this crate.
pub const ALPHABET_LEN: usize = 26;

const STANDARD: &[u8; ALPHABET_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("Alphabet must contain exactly 26 letters, got {0}")]
    WrongLength(usize),
    #[error("Alphabet symbol {0:?} is not an uppercase letter A-Z")]
    NotUppercaseLetter(char),
    #[error("Alphabet letter {0:?} appears more than once")]
    DuplicateLetter(char),
}

/// An ordering of the 26 letters A-Z.
///
/// Maps a logical position (0-25) to a letter and back. Every value of this
/// type is a bijection over A-Z: construction either goes through the
/// keyword builder, which cannot produce duplicates, or through
/// [`Alphabet::from_letters`], which rejects them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    letters: [u8; ALPHABET_LEN],
    positions: [u8; ALPHABET_LEN],
}

impl Alphabet {
    /// The natural A-Z ordering.
    pub fn standard() -> Self {
        Self::from_array(*STANDARD)
    }

    /// Parse an explicit 26-letter ordering such as `"QWERTYUIOPASDFGHJKLZXCVBNM"`.
    pub fn from_letters(letters: &str) -> Result<Self, AlphabetError> {
        let count = letters.chars().count();
        if count != ALPHABET_LEN {
            return Err(AlphabetError::WrongLength(count));
        }

        let mut ordered = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (slot, c) in letters.chars().enumerate() {
            if !c.is_ascii_uppercase() {
                return Err(AlphabetError::NotUppercaseLetter(c));
            }
            let index = letter_index(c as u8);
            if seen[index] {
                return Err(AlphabetError::DuplicateLetter(c));
            }
            seen[index] = true;
            ordered[slot] = c as u8;
        }

        Ok(Self::from_array(ordered))
    }

    /// Caller guarantees `letters` is a permutation of A-Z.
    pub(crate) fn from_array(letters: [u8; ALPHABET_LEN]) -> Self {
        let mut positions = [0u8; ALPHABET_LEN];
        for (pos, &letter) in letters.iter().enumerate() {
            positions[letter_index(letter)] = pos as u8;
        }

        debug_assert!(
            positions
                .iter()
                .enumerate()
                .all(|(index, &pos)| letter_index(letters[pos as usize]) == index),
            "alphabet is not a bijection over A-Z"
        );

        Self { letters, positions }
    }

    /// Letter at `position`, wrapping modulo 26.
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position % ALPHABET_LEN] as char
    }

    /// Position of `letter`, or `None` for anything outside A-Z.
    pub fn position_of(&self, letter: char) -> Option<usize> {
        if letter.is_ascii_uppercase() {
            Some(self.positions[letter_index(letter as u8)] as usize)
        } else {
            None
        }
    }

    pub fn is_standard(&self) -> bool {
        &self.letters == STANDARD
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|&b| b as char)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'A')
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.to_string()).finish()
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AlphabetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_letters(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}
