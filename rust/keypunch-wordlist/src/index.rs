use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{KeypunchWordlistError, WORD_COUNT};

/// A [`WordIndex`] is a validated position within the word list. Every value
/// that can be constructed refers to a real word, so lookups through a
/// [`WordIndex`] are total.
///
/// The raw representation is a `u16` in the range `0..2048`, which is also how
/// a [`WordIndex`] serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub struct WordIndex(pub(crate) u16);

impl WordIndex {
    /// The index of the first word in the word list
    pub const MIN: WordIndex = WordIndex(0);

    /// The index of the last word in the word list
    pub const MAX: WordIndex = WordIndex(WORD_COUNT as u16 - 1);

    /// An iterator over every valid [`WordIndex`], in word list order
    pub fn all() -> impl Iterator<Item = WordIndex> {
        (Self::MIN.0..=Self::MAX.0).map(WordIndex)
    }
}

impl TryFrom<u16> for WordIndex {
    type Error = KeypunchWordlistError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if usize::from(value) >= WORD_COUNT {
            return Err(KeypunchWordlistError::IndexOutOfBounds(value));
        }

        Ok(Self(value))
    }
}

impl From<WordIndex> for u16 {
    fn from(value: WordIndex) -> Self {
        value.0
    }
}

impl From<WordIndex> for usize {
    fn from(value: WordIndex) -> Self {
        usize::from(value.0)
    }
}

impl Display for WordIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::{KeypunchWordlistError, WORD_COUNT, WordIndex};

    #[test]
    fn it_accepts_every_index_within_the_word_list() -> Result<()> {
        for raw in 0..WORD_COUNT as u16 {
            let index = WordIndex::try_from(raw)?;
            assert_eq!(u16::from(index), raw);
        }

        Ok(())
    }

    #[test]
    fn it_rejects_indexes_beyond_the_word_list() {
        for raw in [WORD_COUNT as u16, 4095, u16::MAX] {
            assert_eq!(
                WordIndex::try_from(raw),
                Err(KeypunchWordlistError::IndexOutOfBounds(raw))
            );
        }
    }

    #[test]
    fn it_serializes_as_a_bare_integer() -> Result<()> {
        let index = WordIndex::try_from(1019u16)?;
        let json = serde_json::to_string(&index)?;

        assert_eq!(json, "1019");
        assert_eq!(serde_json::from_str::<WordIndex>(&json)?, index);

        Ok(())
    }

    #[test]
    fn it_refuses_to_deserialize_an_out_of_bounds_integer() {
        assert!(serde_json::from_str::<WordIndex>("2048").is_err());
    }
}
