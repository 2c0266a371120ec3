//! SeedGuard Shamir Engine
//!
//! Split a BIP-39 seed phrase into a non-secret primary artifact plus N
//! shares; any K shares together with the primary reconstruct the phrase,
//! while fewer than K reveal nothing about it.
//!
//! # Pipeline
//!
//! encode: words → entropy → (optional) Argon2id keystream XOR →
//! GF(2^8) Shamir split → self-describing artifact strings
//!
//! decode runs the same pipeline in reverse, verifying the artifact
//! transcription checksums and the primary's entropy fingerprint.
//!
//! # Primary policy
//!
//! The primary is non-secret metadata. It is always required for decoding
//! (it carries the KDF salt and the fingerprint) and never counts toward
//! the threshold.
//!
//! # Example
//!
//! ```
//! use seedguard_shamir::SeedGuard;
//!
//! let phrase: Vec<String> = "abandon abandon abandon abandon abandon abandon \
//!                            abandon abandon abandon abandon abandon about"
//!     .split_whitespace()
//!     .map(str::to_string)
//!     .collect();
//!
//! let guard = SeedGuard::new();
//! let (primary, shares) = guard.encode_seed_phrase(&phrase, 3, 5, None).unwrap();
//!
//! // Any 3 of the 5 shares recover the phrase
//! let recovered = guard.decode_shares(&primary, &shares[1..4], None).unwrap();
//! assert_eq!(recovered, phrase);
//! ```

pub mod artifact;
pub mod gf256;
pub mod guard;
pub mod shamir;

// Re-exports
pub use artifact::{PrimaryMetadata, ShareArtifact};
pub use guard::SeedGuard;
pub use shamir::{combine_secret, split_secret, RawShare};

use seedguard_core::{KdfError, MnemonicError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest share count representable in GF(2^8) (nonzero x-coordinates).
pub const MAX_SHARES: usize = 255;

#[derive(Error, Debug)]
pub enum SeedGuardError {
    #[error("invalid configuration: threshold {threshold} of {total} shares")]
    InvalidConfiguration { threshold: usize, total: usize },
    #[error(transparent)]
    Mnemonic(#[from] MnemonicError),
    #[error(transparent)]
    Kdf(#[from] KdfError),
    #[error("not enough shares: have {have}, need {need}")]
    InsufficientShares { have: usize, need: usize },
    #[error("duplicate share index {0}")]
    DuplicateShareIndex(u8),
    #[error("supplied shares disagree on their share-set metadata")]
    InconsistentShareSet,
    #[error("share count {0} exceeds the GF(2^8) field (max 255)")]
    ShareCountOverflow(usize),
    #[error("malformed artifact: {0}")]
    MalformedArtifact(String),
    #[error("recovered entropy does not match the primary fingerprint (wrong password or wrong shares)")]
    FingerprintMismatch,
}

/// The full (K, N) share-set configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Minimum shares needed to reconstruct (K)
    pub threshold: usize,
    /// Total shares to generate (N)
    pub total: usize,
}

impl SplitConfig {
    pub fn new(threshold: usize, total: usize) -> Self {
        Self { threshold, total }
    }

    /// Common 2-of-3 setup
    pub fn two_of_three() -> Self {
        Self::new(2, 3)
    }

    /// Common 3-of-5 setup
    pub fn three_of_five() -> Self {
        Self::new(3, 5)
    }

    /// Enforce 2 ≤ K ≤ N ≤ 255.
    pub fn validate(&self) -> Result<(), SeedGuardError> {
        if self.total > MAX_SHARES {
            return Err(SeedGuardError::ShareCountOverflow(self.total));
        }
        if self.threshold < 2 || self.threshold > self.total {
            return Err(SeedGuardError::InvalidConfiguration {
                threshold: self.threshold,
                total: self.total,
            });
        }
        Ok(())
    }
}
