use std::{
    fmt::{Debug, Display},
    sync::Arc,
};

use async_trait::async_trait;
use keypunch_wordlist::index_of;
use sha2::{Digest, Sha256};

use crate::{ConditionalSync, KeypunchImportError, PhraseLength};

/// A verifier that gets the final say over a candidate phrase.
///
/// Submission hands the verifier a complete, space-joined phrase and treats
/// its answer as authoritative. Implementations may verify locally or defer
/// to an external facility; either way the check is asynchronous, so slow
/// verifiers do not stall the slot editing that continues around them.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait MnemonicValidator: ConditionalSync {
    /// The error produced when a phrase is not accepted
    type Error: Display + Debug + ConditionalSync;

    /// Check a candidate phrase, succeeding only if it constitutes a valid
    /// mnemonic
    async fn validate_mnemonic(&self, phrase: &str) -> Result<(), Self::Error>;
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<V> MnemonicValidator for Arc<V>
where
    V: MnemonicValidator,
{
    type Error = V::Error;

    async fn validate_mnemonic(&self, phrase: &str) -> Result<(), Self::Error> {
        (**self).validate_mnemonic(phrase).await
    }
}

/// The reference [`MnemonicValidator`]: verifies the checksum that the final
/// word of a phrase folds in.
///
/// The words are mapped to their eleven-bit word list indexes and
/// concatenated. The leading bits are the entropy payload; the trailing bits
/// (one per thirty-two entropy bits) must equal the leading bits of the
/// payload's SHA-256 digest.
#[derive(Debug, Clone, Default)]
pub struct ChecksumValidator;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl MnemonicValidator for ChecksumValidator {
    type Error = KeypunchImportError;

    async fn validate_mnemonic(&self, phrase: &str) -> Result<(), Self::Error> {
        let words = phrase.split_whitespace().collect::<Vec<_>>();
        let length = PhraseLength::try_from(words.len())?;

        let mut bits = Vec::with_capacity(words.len() * 11);

        for word in words {
            let index =
                index_of(word).ok_or_else(|| KeypunchImportError::UnknownWord(word.to_owned()))?;
            let value = u16::from(index);

            for bit in (0..11).rev() {
                bits.push((value >> bit) & 1 == 1);
            }
        }

        let mut entropy = vec![0u8; length.entropy_bits() / 8];

        for (offset, bit) in bits.iter().take(length.entropy_bits()).enumerate() {
            if *bit {
                entropy[offset / 8] |= 1 << (7 - offset % 8);
            }
        }

        let digest = Sha256::digest(&entropy);

        for (offset, bit) in bits.iter().skip(length.entropy_bits()).enumerate() {
            let expected = (digest[offset / 8] >> (7 - offset % 8)) & 1 == 1;

            if *bit != expected {
                return Err(KeypunchImportError::ChecksumMismatch);
            }
        }

        Ok(())
    }
}
