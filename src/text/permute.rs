use crate::text::normalize;
use crate::types::alphabet::{Alphabet, ALPHABET_LEN};

/// Build the keyword alphabet: distinct keyword letters in first-occurrence
/// order, then the remaining letters of A-Z in natural order.
///
/// The keyword is normalized first, so case, digits and punctuation never
/// reach the alphabet. Any keyword (including an empty one) yields a valid
/// 26-letter ordering; a keyword that already covers all 26 letters yields
/// exactly its own order.
pub fn build_permuted_alphabet(keyword: &str) -> Alphabet {
    let keyword = normalize(keyword);

    let mut letters = [0u8; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    let mut filled = 0;

    for letter in keyword.as_str().bytes().chain(b'A'..=b'Z') {
        let index = usize::from(letter - b'A');
        if !seen[index] {
            seen[index] = true;
            letters[filled] = letter;
            filled += 1;
        }
    }

    debug_assert_eq!(filled, ALPHABET_LEN);

    Alphabet::from_array(letters)
}
