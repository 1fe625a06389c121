//! Caesar ciphers and frequency analysis for classical cryptanalysis.
//!
//! `caesar-lab` provides text normalization, keyword-permuted alphabets, a
//! shift-substitution engine that works over any alphabet ordering, and
//! letter / digraph / trigraph frequency analysis compared against
//! published English frequencies. All operations are pure and deterministic.
//!
//! These ciphers are trivially breakable; the crate exists to study them.
//!
//! ```
//! use caesar_lab::cipher::{substitute, Operation};
//! use caesar_lab::text::{build_permuted_alphabet, normalize};
//!
//! let alphabet = build_permuted_alphabet("cryptography");
//! let plain = normalize("Cezar!");
//! let secret = substitute(plain.as_str(), 3, &alphabet, Operation::Encrypt);
//! assert_eq!(secret, "PJYDT");
//! assert_eq!(substitute(&secret, 3, &alphabet, Operation::Decrypt), "CEZAR");
//! ```

pub mod analysis;
pub mod cipher;
pub mod text;
pub mod types;
pub mod validation;

pub use analysis::{AnalysisConfig, FrequencyAnalyzer};
pub use cipher::{substitute, CaesarCipher, Operation};
pub use text::{build_permuted_alphabet, normalize, NormalizedText};
pub use types::{Alphabet, AnalysisReport, FrequencyEntry, LetterComparison, PatternEntry};
