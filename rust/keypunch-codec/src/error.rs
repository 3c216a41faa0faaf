use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum KeypunchCodecError {
    /// A sequence of dots had the wrong length for a tag row
    #[error("A dot row has exactly {dots} dots, but got {0}", dots = crate::GRID_DOTS)]
    WrongRowLength(usize),
}
