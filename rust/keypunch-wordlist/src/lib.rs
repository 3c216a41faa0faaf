#![warn(missing_docs)]

//! The fixed vocabulary used by dot tag recovery phrases: 2048 English words
//! in lexicographic order, addressed by an 11-bit [`WordIndex`].
//!
//! Both directions of the mapping are exposed as free functions. Looking a
//! word up by index is total, because a [`WordIndex`] can only be constructed
//! in bounds; looking an index up by word is partial, because arbitrary
//! strings (typos, words from other vocabularies) are not part of the list.
//!
//! # Basic Usage
//!
//! ```rust
//! use keypunch_wordlist::{WordIndex, index_of, word};
//!
//! let index = WordIndex::try_from(2047u16).unwrap();
//!
//! assert_eq!(word(index), "zoo");
//! assert_eq!(index_of("zoo"), Some(index));
//! assert_eq!(index_of("zzz"), None);
//! ```

mod error;
pub use error::*;

mod index;
pub use index::*;

mod words;
pub use words::*;
