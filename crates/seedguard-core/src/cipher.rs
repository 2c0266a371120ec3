//! Entropy cipher
//!
//! Applies the Argon2id-derived keystream over the entropy buffer with XOR.
//! Length-preserving and involutive: `protect` and `unprotect` are mutual
//! inverses for any keystream, with no padding ambiguity.
//!
//! A wrong keystream silently yields wrong bytes; the only downstream
//! detector is the primary artifact's entropy fingerprint, which is a
//! probabilistic heuristic, not authentication.

fn xor_in_place(buf: &mut [u8], keystream: &[u8]) {
    debug_assert_eq!(buf.len(), keystream.len());
    for (b, k) in buf.iter_mut().zip(keystream) {
        *b ^= k;
    }
}

/// Encrypt entropy in place before splitting.
pub fn protect(entropy: &mut [u8], keystream: &[u8]) {
    xor_in_place(entropy, keystream);
}

/// Decrypt reconstructed entropy in place after combining.
pub fn unprotect(protected: &mut [u8], keystream: &[u8]) {
    xor_in_place(protected, keystream);
}
