use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::KeypunchImportError;

/// The number of words in a recovery phrase.
///
/// Dot tags are stamped for exactly three phrase sizes. Each size fixes how
/// many bits of entropy the phrase encodes and how many checksum bits are
/// folded into its final word.
///
/// A [`PhraseLength`] serializes as its bare word count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "usize", try_from = "usize")]
pub enum PhraseLength {
    /// Twelve words: 128 entropy bits, 4 checksum bits
    #[default]
    Twelve,
    /// Eighteen words: 192 entropy bits, 6 checksum bits
    Eighteen,
    /// Twenty-four words: 256 entropy bits, 8 checksum bits
    TwentyFour,
}

impl PhraseLength {
    /// Every supported phrase length, shortest first
    pub const ALL: [PhraseLength; 3] = [
        PhraseLength::Twelve,
        PhraseLength::Eighteen,
        PhraseLength::TwentyFour,
    ];

    /// The number of word slots a phrase of this length fills
    pub fn word_count(&self) -> usize {
        match self {
            PhraseLength::Twelve => 12,
            PhraseLength::Eighteen => 18,
            PhraseLength::TwentyFour => 24,
        }
    }

    /// The number of entropy bits a phrase of this length encodes
    pub fn entropy_bits(&self) -> usize {
        match self {
            PhraseLength::Twelve => 128,
            PhraseLength::Eighteen => 192,
            PhraseLength::TwentyFour => 256,
        }
    }

    /// The number of checksum bits folded into the final word of a phrase of
    /// this length
    pub fn checksum_bits(&self) -> usize {
        self.entropy_bits() / 32
    }
}

impl TryFrom<usize> for PhraseLength {
    type Error = KeypunchImportError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            12 => Ok(PhraseLength::Twelve),
            18 => Ok(PhraseLength::Eighteen),
            24 => Ok(PhraseLength::TwentyFour),
            other => Err(KeypunchImportError::UnsupportedLength(other)),
        }
    }
}

impl From<PhraseLength> for usize {
    fn from(value: PhraseLength) -> Self {
        value.word_count()
    }
}

impl Display for PhraseLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} words", self.word_count())
    }
}
