pub mod alphabet;
pub mod analysis;
pub mod digest;

pub use alphabet::{Alphabet, AlphabetError, ALPHABET_LEN};
pub use analysis::{AnalysisReport, FrequencyEntry, LetterComparison, PatternEntry};
pub use digest::TextDigest;
