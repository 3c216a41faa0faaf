use keypunch_codec::encode;
use keypunch_wordlist::index_of;

use crate::{KeypunchImportError, MnemonicValidator, PhraseLength, SlotStatus, WordSlot};

/// The final outcome of submitting a phrase for import
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The phrase was accepted; the payload is the space-joined phrase that
    /// passed verification
    Accepted(String),
    /// The phrase was not accepted
    Rejected(ImportRejection),
}

/// The reason a submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportRejection {
    /// At least one slot is not verified; the checksum verifier was never
    /// consulted
    IncompletePhrase,
    /// The checksum verifier did not accept the assembled phrase
    ChecksumFailed,
}

/// The complete set of word slots for one dot tag.
///
/// A [`Slots`] is a value: every mutation produces a new copy and leaves the
/// original untouched. Slots that a mutation does not name are preserved
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots {
    length: PhraseLength,
    slots: Vec<WordSlot>,
}

impl Slots {
    /// Initialize a full set of blank slots for the given phrase length
    pub fn new(length: PhraseLength) -> Self {
        Self {
            length,
            slots: (0..length.word_count()).map(WordSlot::blank).collect(),
        }
    }

    /// Initialize slots from a known phrase, punching the dots for each word.
    ///
    /// The phrase must split into a supported number of words, and every word
    /// must appear in the word list.
    pub fn from_phrase(phrase: &str) -> Result<Self, KeypunchImportError> {
        let words = phrase.split_whitespace().collect::<Vec<_>>();
        let length = PhraseLength::try_from(words.len())?;
        let slots = words
            .into_iter()
            .enumerate()
            .map(|(position, word)| {
                let index = index_of(word)
                    .ok_or_else(|| KeypunchImportError::UnknownWord(word.to_owned()))?;
                Ok(WordSlot::new(position, encode(index)))
            })
            .collect::<Result<Vec<_>, KeypunchImportError>>()?;

        Ok(Self { length, slots })
    }

    /// The phrase length these slots are laid out for
    pub fn length(&self) -> PhraseLength {
        self.length
    }

    /// The number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots; always false for a supported length
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot at the given position, if there is one
    pub fn get(&self, position: usize) -> Option<&WordSlot> {
        self.slots.get(position)
    }

    /// Iterate over all slots in phrase order
    pub fn iter(&self) -> impl Iterator<Item = &WordSlot> {
        self.slots.iter()
    }

    /// Produce a copy of these slots with one dot punched or cleared.
    ///
    /// Panics if the position does not refer to a slot.
    pub fn with_dot(&self, position: usize, column: usize, punched: bool) -> Self {
        assert!(position < self.slots.len(), "no slot at position {position}");

        let mut next = self.clone();
        next.slots[position] = next.slots[position].with_dot(column, punched);
        next
    }

    /// Produce a copy of these slots laid out for a different phrase length.
    ///
    /// Growing appends blank slots; shrinking drops the trailing slots. Every
    /// slot position shared by the old and new lengths carries its dots over
    /// unchanged.
    pub fn with_length(&self, length: PhraseLength) -> Self {
        Self {
            length,
            slots: (0..length.word_count())
                .map(|position| {
                    self.slots
                        .get(position)
                        .copied()
                        .unwrap_or_else(|| WordSlot::blank(position))
                })
                .collect(),
        }
    }

    /// Whether every slot is verified, making the phrase eligible for
    /// submission
    pub fn is_complete(&self) -> bool {
        self.slots
            .iter()
            .all(|slot| slot.status() == SlotStatus::Verified)
    }

    /// Join the slots into a candidate phrase.
    ///
    /// Slots that do not resolve to a word contribute an empty segment, so an
    /// incomplete phrase is visibly gapped rather than silently shortened.
    pub fn assemble(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.word().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Submit these slots for import.
    ///
    /// Unless every slot is verified, the submission is rejected locally and
    /// the verifier is never consulted. Otherwise the assembled phrase is
    /// handed to the verifier, and its answer decides the outcome.
    pub async fn submit<Validator>(&self, validator: &Validator) -> ImportOutcome
    where
        Validator: MnemonicValidator,
    {
        if !self.is_complete() {
            return ImportOutcome::Rejected(ImportRejection::IncompletePhrase);
        }

        let phrase = self.assemble();

        match validator.validate_mnemonic(&phrase).await {
            Ok(()) => ImportOutcome::Accepted(phrase),
            Err(_) => ImportOutcome::Rejected(ImportRejection::ChecksumFailed),
        }
    }
}
