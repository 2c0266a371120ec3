//! SeedGuard Core
//!
//! Leaf building blocks for the SeedGuard engine:
//! - BIP-39 word codec (seed phrase ↔ raw entropy)
//! - Argon2id password keystream derivation
//! - the XOR entropy cipher
//!
//! None of these know about secret sharing; the `seedguard-shamir` crate
//! composes them into the split/reconstruct pipeline.

pub mod cipher;
pub mod kdf;
pub mod mnemonic;

pub use cipher::{protect, unprotect};
pub use kdf::{derive_keystream, KdfError, SALT_LEN};
pub use mnemonic::{entropy_to_words, words_to_entropy, MnemonicError};
