//! Text normalization and keyword alphabets.
//!
//! Everything downstream (the cipher engine and the frequency analyzer)
//! works on [`NormalizedText`]: uppercase ASCII letters only, in the order
//! they appeared in the raw input.

pub mod normalize;
pub mod permute;

pub use normalize::{normalize, NormalizedText};
pub use permute::build_permuted_alphabet;
