use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum KeypunchWordlistError {
    /// A raw integer did not refer to any entry in the word list
    #[error("Word index {0} is out of bounds (the word list has {count} entries)", count = crate::WORD_COUNT)]
    IndexOutOfBounds(u16),
}
