#![warn(missing_docs)]

//! Keypunch Codec - Dot Tag Row Encoding
//!
//! This crate translates between the punched dots on a metal dot tag and the
//! recovery words they stand for. One row of dots holds one word;
//! [`LAYOUT_VERSION`] documents the physical arrangement and
//! [`column_weight`] the weight assigned to each dot position.
//!
//! Decoding distinguishes three cases: a blank row (no word recorded yet), a
//! row whose dots resolve to a word, and a row whose dots cannot resolve to
//! any word. Encoding is total over the word list and is the exact inverse of
//! decoding.
//!
//! # Basic Usage
//!
//! ```rust
//! use keypunch_codec::{Decoded, DotGrid, decode, encode};
//! use keypunch_wordlist::{index_of, word};
//!
//! let zoo = index_of("zoo").unwrap();
//!
//! // "zoo" is word number 2048, which punches as a single dot in the
//! // heaviest column
//! let grid = encode(zoo);
//! assert_eq!(decode(&grid), Decoded::Word(zoo));
//!
//! // A blank row is not a word, but it is not damage either
//! assert_eq!(decode(&DotGrid::default()), Decoded::Blank);
//!
//! // A row that sums past the end of the word list cannot be read
//! let overfull = grid.with_dot(11, true);
//! assert_eq!(decode(&overfull), Decoded::Unreadable);
//! ```

mod error;
pub use error::*;

mod layout;
pub use layout::*;

mod grid;
pub use grid::*;

mod codec;
pub use codec::*;
