use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::{GRID_DOTS, KeypunchCodecError, column_weight};

/// A [`DotGrid`] is the punch state of a single tag row: one boolean per dot
/// position, `true` where the tag has been punched.
///
/// A [`DotGrid`] is plain data. It records dots exactly as they appear on the
/// tag and attaches no meaning to them; interpreting a grid as a word is the
/// codec's job. The default grid is blank.
///
/// Grids serialize as a flat array of booleans in column order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DotGrid([bool; GRID_DOTS]);

impl DotGrid {
    /// Whether the dot at the given column is punched.
    ///
    /// Panics if `column` is not within `0..GRID_DOTS`.
    pub fn dot(&self, column: usize) -> bool {
        self.0[column]
    }

    /// Returns a copy of this grid with the dot at the given column set to
    /// `punched`. The original grid is not modified.
    ///
    /// Panics if `column` is not within `0..GRID_DOTS`.
    pub fn with_dot(mut self, column: usize, punched: bool) -> Self {
        self.0[column] = punched;
        self
    }

    /// The weighted sum of all punched dots, per the row layout described on
    /// [`crate::LAYOUT_VERSION`].
    pub fn value(&self) -> u16 {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, punched)| **punched)
            .map(|(column, _)| column_weight(column))
            .sum()
    }

    /// Whether no dot in this grid is punched
    pub fn is_blank(&self) -> bool {
        !self.0.iter().any(|punched| *punched)
    }

    /// The number of punched dots in this grid
    pub fn punched_count(&self) -> usize {
        self.0.iter().filter(|punched| **punched).count()
    }

    /// Iterate over the punch state of every column, heaviest first
    pub fn dots(&self) -> impl Iterator<Item = bool> {
        self.0.into_iter()
    }
}

impl From<[bool; GRID_DOTS]> for DotGrid {
    fn from(value: [bool; GRID_DOTS]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[bool]> for DotGrid {
    type Error = KeypunchCodecError;

    fn try_from(value: &[bool]) -> Result<Self, Self::Error> {
        let dots: [bool; GRID_DOTS] = value
            .try_into()
            .map_err(|_| KeypunchCodecError::WrongRowLength(value.len()))?;

        Ok(Self(dots))
    }
}

impl TryFrom<Vec<bool>> for DotGrid {
    type Error = KeypunchCodecError;

    fn try_from(value: Vec<bool>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl Debug for DotGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DotGrid(")?;

        for punched in self.0 {
            write!(f, "{}", if punched { '1' } else { '0' })?;
        }

        write!(f, ")")
    }
}
