//! Password keystream derivation
//!
//! Stretches an optional password into a keystream of exactly the entropy
//! length using Argon2id (memory-hard, resistant to GPU/ASIC attacks).
//! Derivation is a pure function of `(password, salt)`; the salt is generated
//! fresh at encode time and carried in the primary artifact.
//!
//! An absent or empty password maps to an explicit all-zero keystream so the
//! cipher becomes a documented no-op, not an accidental zero-key collision.

use argon2::{Algorithm, Argon2, Params, Version};
use thiserror::Error;
use zeroize::Zeroizing;

/// Argon2id parameters (OWASP recommendations for 2024+)
/// - m_cost: 64 MiB memory
/// - t_cost: 3 iterations
/// - p_cost: 4 parallel threads
const ARGON2_M_COST: u32 = 65536; // 64 MiB
const ARGON2_T_COST: u32 = 3;
const ARGON2_P_COST: u32 = 4;

/// Salt length carried in the primary artifact
pub const SALT_LEN: usize = 16;

#[derive(Error, Debug)]
pub enum KdfError {
    #[error("key derivation failed: {0}")]
    DerivationFailed(String),
}

/// Derive a keystream of `len` bytes from an optional password.
///
/// Deterministic and reproducible: the same `(password, salt)` pair always
/// yields the same keystream. `None` and the empty password both take the
/// identity path and carry no confidentiality claim.
pub fn derive_keystream(
    password: Option<&str>,
    salt: &[u8; SALT_LEN],
    len: usize,
) -> Result<Zeroizing<Vec<u8>>, KdfError> {
    let mut keystream = Zeroizing::new(vec![0u8; len]);

    let password = match password {
        Some(p) if !p.is_empty() => p,
        _ => return Ok(keystream),
    };

    let params = Params::new(ARGON2_M_COST, ARGON2_T_COST, ARGON2_P_COST, Some(len))
        .map_err(|e| KdfError::DerivationFailed(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    argon2
        .hash_password_into(password.as_bytes(), salt, &mut keystream)
        .map_err(|e| KdfError::DerivationFailed(e.to_string()))?;

    Ok(keystream)
}
