#![warn(missing_docs)]

//! Keypunch Import - Dot Tag Phrase Restoration
//!
//! This crate models the restoration of a recovery phrase from a punched dot
//! tag. An [`ImportSession`] holds one [`WordSlot`] per expected word, and
//! every slot independently reports whether it is still empty, punched with
//! dots that spell no word, or verified against the word list. Dots may be
//! punched and cleared in any order; resizing the tag to a different
//! [`PhraseLength`] carries the already punched rows over.
//!
//! Submission is gated locally: until every slot verifies, the phrase never
//! leaves the session. A complete phrase is assembled and handed to a
//! [`MnemonicValidator`], an asynchronous boundary behind which the checksum
//! verification of the wallet facility lives. The session keeps a revision
//! counter so that the outcome of a slow verification can be recognized as
//! stale when dots were edited while it was in flight.
//!
//! # Basic Usage
//!
//! ```rust
//! use keypunch_import::{ImportSession, PhraseLength, SlotStatus};
//!
//! let mut session = ImportSession::new(PhraseLength::Twelve);
//!
//! // Punching the lightest dot of the first row spells word number one
//! session.set_dot(0, 11, true);
//!
//! let first = session.slots().get(0).unwrap();
//!
//! assert_eq!(first.status(), SlotStatus::Verified);
//! assert_eq!(first.word(), Some("abandon"));
//!
//! // Eleven slots are still empty, so the phrase is gapped and incomplete
//! assert_eq!(session.slots().assemble(), format!("abandon{}", " ".repeat(11)));
//! assert!(!session.slots().is_complete());
//! ```

mod error;
pub use error::*;

mod sync;
pub use sync::*;

mod length;
pub use length::*;

mod slot;
pub use slot::*;

mod slots;
pub use slots::*;

mod validator;
pub use validator::*;

mod session;
pub use session::*;
