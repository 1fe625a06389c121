pub mod caesar;
pub mod substitution;

pub use caesar::CaesarCipher;
pub use substitution::{substitute, Operation};
