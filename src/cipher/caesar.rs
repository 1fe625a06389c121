use serde::{Deserialize, Serialize};

use crate::cipher::substitution::{substitute, Operation};
use crate::text::{build_permuted_alphabet, normalize};
use crate::types::alphabet::Alphabet;

/// A shift key bound to the alphabet it shifts along.
///
/// With the standard alphabet this is the classic Caesar cipher; with a
/// keyword alphabet it is the permutation variant. Raw input is normalized
/// before substitution, so `"Attack at dawn!"` encrypts the same as
/// `"ATTACKATDAWN"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaesarCipher {
    alphabet: Alphabet,
    shift: i64,
}

impl CaesarCipher {
    pub fn new(shift: i64, alphabet: Alphabet) -> Self {
        Self { alphabet, shift }
    }

    pub fn standard(shift: i64) -> Self {
        Self::new(shift, Alphabet::standard())
    }

    pub fn with_keyword(shift: i64, keyword: &str) -> Self {
        Self::new(shift, build_permuted_alphabet(keyword))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn shift(&self) -> i64 {
        self.shift
    }

    pub fn apply(&self, text: &str, operation: Operation) -> String {
        let text = normalize(text);
        substitute(text.as_str(), self.shift, &self.alphabet, operation)
    }

    pub fn encrypt(&self, plaintext: &str) -> String {
        self.apply(plaintext, Operation::Encrypt)
    }

    pub fn decrypt(&self, ciphertext: &str) -> String {
        self.apply(ciphertext, Operation::Decrypt)
    }
}
