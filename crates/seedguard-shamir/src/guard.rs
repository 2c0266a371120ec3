//! SeedGuard facade
//!
//! Composes the word codec, key derivation, entropy cipher, threshold
//! splitter, and artifact codec into the two public operations. The facade
//! is a stateless service value: construct it once at process start and
//! share it freely across threads.
//!
//! A wrong password is only detected by the primary's entropy fingerprint,
//! a 32-bit probabilistic check. Callers must not treat decode success as
//! password authentication.

use crate::artifact::{
    self, encode_primary, encode_share, parse_primary, parse_share, PrimaryMetadata, ShareArtifact,
};
use crate::shamir::{combine_secret, split_secret, RawShare};
use crate::{SeedGuardError, SplitConfig};
use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use seedguard_core::kdf::{derive_keystream, SALT_LEN};
use seedguard_core::{cipher, mnemonic};

/// The threshold seed-splitting engine.
///
/// Pure and stateless: every invocation is self-contained, and all secret
/// intermediates are zeroized when the call returns, on error paths included.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedGuard;

impl SeedGuard {
    pub fn new() -> Self {
        Self
    }

    /// Split a seed phrase into one primary artifact plus `total` share
    /// strings, any `threshold` of which (with the primary) reconstruct it.
    ///
    /// The primary is non-secret metadata; it never counts toward the
    /// threshold but is always required for decoding, since it carries the
    /// KDF salt and the entropy fingerprint.
    pub fn encode_seed_phrase(
        &self,
        words: &[String],
        threshold: usize,
        total: usize,
        password: Option<&str>,
    ) -> Result<(String, Vec<String>), SeedGuardError> {
        self.encode_seed_phrase_with_rng(words, threshold, total, password, &mut OsRng)
    }

    /// As [`SeedGuard::encode_seed_phrase`], with an explicit randomness
    /// source for reproducible share generation in tests.
    pub fn encode_seed_phrase_with_rng<R: RngCore + CryptoRng>(
        &self,
        words: &[String],
        threshold: usize,
        total: usize,
        password: Option<&str>,
        rng: &mut R,
    ) -> Result<(String, Vec<String>), SeedGuardError> {
        let config = SplitConfig::new(threshold, total);
        config.validate()?;

        let mut entropy = mnemonic::words_to_entropy(words)?;
        let fingerprint = artifact::entropy_fingerprint(&entropy);

        let mut salt = [0u8; SALT_LEN];
        rng.fill_bytes(&mut salt);
        let keystream = derive_keystream(password, &salt, entropy.len())?;
        cipher::protect(&mut entropy, &keystream);

        let shares = split_secret(&entropy, &config, rng)?;

        let meta = PrimaryMetadata {
            threshold: threshold as u8,
            total: total as u8,
            entropy_len: entropy.len() as u8,
            salt,
            fingerprint,
        };
        let primary = encode_primary(&meta);
        let encoded = shares
            .into_iter()
            .map(|share| {
                encode_share(&ShareArtifact {
                    threshold: meta.threshold,
                    total: meta.total,
                    share,
                })
            })
            .collect();

        debug!("encoded seed phrase into {total} shares (threshold {threshold})");
        Ok((primary, encoded))
    }

    /// Recover the original seed phrase from the primary artifact plus at
    /// least `threshold` shares, supplied in any order.
    pub fn decode_shares(
        &self,
        primary: &str,
        shares: &[String],
        password: Option<&str>,
    ) -> Result<Vec<String>, SeedGuardError> {
        let meta = parse_primary(primary)?;

        let parsed: Vec<ShareArtifact> = shares
            .iter()
            .map(|s| parse_share(s))
            .collect::<Result<_, _>>()?;

        // Every share must agree with the primary's configuration
        for share in &parsed {
            if share.threshold != meta.threshold
                || share.total != meta.total
                || share.share.data.len() != meta.entropy_len as usize
            {
                return Err(SeedGuardError::InconsistentShareSet);
            }
        }

        let raw: Vec<RawShare> = parsed.into_iter().map(|a| a.share).collect();
        let mut entropy = combine_secret(&raw, meta.threshold as usize)?;

        let keystream = derive_keystream(password, &meta.salt, entropy.len())?;
        cipher::unprotect(&mut entropy, &keystream);

        if artifact::entropy_fingerprint(&entropy) != meta.fingerprint {
            return Err(SeedGuardError::FingerprintMismatch);
        }

        let words = mnemonic::entropy_to_words(&entropy)?;
        debug!("decoded seed phrase from {} shares", shares.len());
        Ok(words)
    }
}
