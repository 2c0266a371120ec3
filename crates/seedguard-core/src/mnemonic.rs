//! BIP-39 word codec
//!
//! Bidirectional mapping between seed phrases and raw entropy using the
//! English wordlist (2048 words, 11 bits per word). Decoding validates
//! dictionary membership and the trailing checksum bits; encoding is total
//! and deterministic for every supported entropy length.

use bip39::{Language, Mnemonic};
use thiserror::Error;
use zeroize::Zeroizing;

/// Phrase lengths accepted by the codec (16–32 bytes of entropy).
pub const SUPPORTED_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("word {position} (\"{word}\") is not in the wordlist")]
    InvalidWord { word: String, position: usize },
    #[error("seed phrase checksum mismatch")]
    ChecksumMismatch,
    #[error("unsupported phrase length: {0} words")]
    UnsupportedLength(usize),
    #[error("unsupported entropy length: {0} bytes")]
    UnsupportedEntropyLength(usize),
}

/// Decode a seed phrase into its raw entropy bytes.
///
/// Words are matched case-insensitively against the canonical lowercase
/// wordlist; surrounding whitespace on each word is ignored.
pub fn words_to_entropy(words: &[String]) -> Result<Zeroizing<Vec<u8>>, MnemonicError> {
    if !SUPPORTED_WORD_COUNTS.contains(&words.len()) {
        return Err(MnemonicError::UnsupportedLength(words.len()));
    }

    let normalized: Vec<String> = words.iter().map(|w| w.trim().to_lowercase()).collect();
    let phrase = normalized.join(" ");

    let mnemonic =
        Mnemonic::parse_in_normalized(Language::English, &phrase).map_err(|e| match e {
            bip39::Error::UnknownWord(position) => MnemonicError::InvalidWord {
                word: normalized.get(position).cloned().unwrap_or_default(),
                position,
            },
            bip39::Error::InvalidChecksum => MnemonicError::ChecksumMismatch,
            bip39::Error::BadWordCount(n) => MnemonicError::UnsupportedLength(n),
            // Remaining variants are unreachable for length-checked English input.
            _ => MnemonicError::ChecksumMismatch,
        })?;

    Ok(Zeroizing::new(mnemonic.to_entropy()))
}

/// Encode entropy into its canonical seed phrase.
///
/// Deterministic: the same entropy always yields the same word sequence.
pub fn entropy_to_words(entropy: &[u8]) -> Result<Vec<String>, MnemonicError> {
    let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy)
        .map_err(|_| MnemonicError::UnsupportedEntropyLength(entropy.len()))?;
    Ok(mnemonic.words().map(|w| w.to_string()).collect())
}
