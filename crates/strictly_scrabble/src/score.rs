//! Letter values and word scoring.

use tracing::instrument;

/// Point values for `a` through `z`.
const LETTER_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Point value of a single letter.
///
/// ASCII letters are valued case-insensitively; anything else is worth 0.
pub fn letter_value(letter: char) -> u32 {
    if letter.is_ascii_alphabetic() {
        LETTER_VALUES[(letter.to_ascii_lowercase() as u8 - b'a') as usize]
    } else {
        0
    }
}

/// Sum of the letter values in one word.
pub fn score_word(word: &str) -> u32 {
    word.chars().map(letter_value).sum()
}

/// Sum of the letter values across all words.
///
/// A tile shared by two words counts once per word.
#[instrument(skip(words), fields(words = words.len()))]
pub fn score_tiles<S: AsRef<str>>(words: &[S]) -> u32 {
    words.iter().map(|w| score_word(w.as_ref())).sum()
}
