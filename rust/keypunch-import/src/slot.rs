use keypunch_codec::{Decoded, DotGrid, decode};
use keypunch_wordlist::word;
use serde::{Deserialize, Serialize};

/// The classification of a single word slot.
///
/// A slot's status is derived from its dots every time it is asked for, so a
/// reported status can never disagree with the dots it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    /// No dots are punched; the slot has not been attempted yet
    Empty,
    /// Dots are punched but they do not resolve to a word
    Invalid,
    /// The dots resolve to a word from the word list
    Verified,
}

/// One row of a dot tag: a position within the phrase and the dots punched
/// there.
///
/// The slot stores only its dots. The word it resolves to and the
/// [`SlotStatus`] it reports are computed on demand with [`WordSlot::word`]
/// and [`WordSlot::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordSlot {
    position: usize,
    grid: DotGrid,
}

impl WordSlot {
    /// Initialize a slot at the given position with the given dots
    pub fn new(position: usize, grid: DotGrid) -> Self {
        Self { position, grid }
    }

    /// Initialize a slot at the given position with no dots punched
    pub fn blank(position: usize) -> Self {
        Self::new(position, DotGrid::default())
    }

    /// The zero-based position of this slot within its phrase
    pub fn position(&self) -> usize {
        self.position
    }

    /// The dots currently punched in this slot
    pub fn grid(&self) -> &DotGrid {
        &self.grid
    }

    /// Produce a copy of this slot with one dot punched or cleared
    pub fn with_dot(mut self, column: usize, punched: bool) -> Self {
        self.grid = self.grid.with_dot(column, punched);
        self
    }

    /// Interpret this slot's dots as a word list reading
    pub fn decoded(&self) -> Decoded {
        decode(&self.grid)
    }

    /// The word this slot resolves to, if its dots spell one
    pub fn word(&self) -> Option<&'static str> {
        self.decoded().word_index().map(word)
    }

    /// Classify this slot based on its current dots
    pub fn status(&self) -> SlotStatus {
        match self.decoded() {
            Decoded::Blank => SlotStatus::Empty,
            Decoded::Word(_) => SlotStatus::Verified,
            Decoded::Unreadable => SlotStatus::Invalid,
        }
    }
}
