use crate::{ImportOutcome, KeypunchImportError, MnemonicValidator, PhraseLength, Slots};

/// A monotonic counter that orders the edits made to an [`ImportSession`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(u64);

impl Revision {
    fn advanced(self) -> Self {
        Self(self.0 + 1)
    }
}

/// The result of one submission, tagged with the revision it was made at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    revision: Revision,
    /// What became of the submitted phrase
    pub outcome: ImportOutcome,
}

impl Submission {
    /// The session revision the submitted phrase was assembled at
    pub fn revision(&self) -> Revision {
        self.revision
    }
}

/// A live dot tag import: the slots being punched, plus a revision counter
/// that detects when a submission has been overtaken by later edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSession {
    slots: Slots,
    revision: Revision,
}

impl ImportSession {
    /// Initialize a session with blank slots for the given phrase length
    pub fn new(length: PhraseLength) -> Self {
        Self {
            slots: Slots::new(length),
            revision: Revision::default(),
        }
    }

    /// Initialize a session whose slots are already punched for a known
    /// phrase
    pub fn from_phrase(phrase: &str) -> Result<Self, KeypunchImportError> {
        Ok(Self {
            slots: Slots::from_phrase(phrase)?,
            revision: Revision::default(),
        })
    }

    /// The current slots
    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// The current revision; every mutating call advances it
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Punch or clear one dot.
    ///
    /// Panics if the position does not refer to a slot or the column does not
    /// refer to a dot.
    pub fn set_dot(&mut self, position: usize, column: usize, punched: bool) {
        self.slots = self.slots.with_dot(position, column, punched);
        self.revision = self.revision.advanced();
    }

    /// Change the phrase length, carrying shared slot positions over.
    ///
    /// The revision advances even when the length is set to the value it
    /// already has.
    pub fn set_length(&mut self, length: PhraseLength) {
        self.slots = self.slots.with_length(length);
        self.revision = self.revision.advanced();
    }

    /// Submit the current slots for import.
    ///
    /// The session is not locked while the verifier runs. To keep editing
    /// during a slow verification, clone the session and submit the clone;
    /// the [`Submission`] remembers the revision it was assembled at, and
    /// [`ImportSession::is_current`] reveals whether edits have landed since.
    pub async fn submit<Validator>(&self, validator: &Validator) -> Submission
    where
        Validator: MnemonicValidator,
    {
        Submission {
            revision: self.revision,
            outcome: self.slots.submit(validator).await,
        }
    }

    /// Whether a submission reflects this session's current slots.
    ///
    /// A submission assembled before any later edit is stale, and its outcome
    /// must be discarded rather than acted on.
    pub fn is_current(&self, submission: &Submission) -> bool {
        submission.revision == self.revision
    }
}
