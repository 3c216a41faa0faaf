use std::sync::OnceLock;

use crate::WordIndex;

/// The number of entries in the word list
pub const WORD_COUNT: usize = 2048;

/// The English word list, one lower-case ASCII word per line, in
/// lexicographic order
const ENGLISH_RAW: &str = include_str!("english.txt");

static ENGLISH: OnceLock<Vec<&'static str>> = OnceLock::new();

fn english() -> &'static [&'static str] {
    ENGLISH.get_or_init(|| {
        let words = ENGLISH_RAW.lines().collect::<Vec<&'static str>>();
        assert_eq!(words.len(), WORD_COUNT, "embedded word list is incomplete");
        words
    })
}

/// Look up the word at the given [`WordIndex`].
///
/// This lookup is total: every [`WordIndex`] that can be constructed resolves
/// to a word.
pub fn word(index: WordIndex) -> &'static str {
    english()[usize::from(index)]
}

/// Find the [`WordIndex`] of the given word, or `None` if the word is not
/// part of the word list.
///
/// Matching is exact; words are stored in their canonical lower-case spelling.
pub fn index_of(word: &str) -> Option<WordIndex> {
    english()
        .binary_search(&word)
        .ok()
        .map(|position| WordIndex(position as u16))
}
