use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum KeypunchImportError {
    /// A word count other than the supported tag sizes
    #[error("A recovery phrase has 12, 18 or 24 words, but got {0}")]
    UnsupportedLength(usize),

    /// A word that is not part of the word list
    #[error("\"{0}\" is not in the word list")]
    UnknownWord(String),

    /// The checksum folded into the phrase does not match its words
    #[error("The phrase checksum does not match its words")]
    ChecksumMismatch,
}
