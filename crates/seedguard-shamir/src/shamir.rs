//! Threshold split and combine
//!
//! Classic Shamir secret sharing over GF(2^8): for every byte position one
//! random polynomial of degree K−1 with the secret byte as constant term,
//! evaluated at the nonzero share indices 1..=N. Combining interpolates each
//! polynomial at x = 0.
//!
//! Randomness is injected by the caller so tests can supply deterministic
//! seeds without weakening production paths (which use `OsRng`).

use crate::gf256::{interpolate_at_zero, poly_eval};
use crate::{SeedGuardError, SplitConfig};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// One raw fragment of a split secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawShare {
    /// Share index (1..=N, never 0)
    pub index: u8,
    /// One polynomial evaluation per secret byte
    pub data: Vec<u8>,
}

/// Split `secret` into `config.total` shares, any `config.threshold` of
/// which reconstruct it exactly.
pub fn split_secret<R: RngCore + CryptoRng>(
    secret: &[u8],
    config: &SplitConfig,
    rng: &mut R,
) -> Result<Vec<RawShare>, SeedGuardError> {
    config.validate()?;
    debug_assert!(!secret.is_empty());

    let total = config.total as u8;
    let mut shares: Vec<RawShare> = (1..=total)
        .map(|index| RawShare {
            index,
            data: Vec::with_capacity(secret.len()),
        })
        .collect();

    // p(x) = secret + c1*x + ... + c_{k-1}*x^{k-1}, fresh coefficients per byte
    let mut coefficients = Zeroizing::new(vec![0u8; config.threshold]);
    for &secret_byte in secret {
        coefficients[0] = secret_byte;
        rng.fill_bytes(&mut coefficients[1..]);

        for share in &mut shares {
            share.data.push(poly_eval(&coefficients, share.index));
        }
    }

    Ok(shares)
}

/// Reconstruct a secret from at least `threshold` shares.
///
/// Interpolation runs over every supplied share, so any superset of a valid
/// quorum yields the identical secret regardless of which K-subset it
/// contains. Contradictory input (duplicate indices, mismatched lengths) is
/// rejected before the quorum count, so the surfaced error kind does not
/// depend on how many copies were supplied.
pub fn combine_secret(
    shares: &[RawShare],
    threshold: usize,
) -> Result<Zeroizing<Vec<u8>>, SeedGuardError> {
    let Some(first) = shares.first() else {
        return Err(SeedGuardError::InsufficientShares {
            have: 0,
            need: threshold.max(1),
        });
    };

    let secret_len = first.data.len();
    if shares.iter().any(|s| s.data.len() != secret_len) {
        return Err(SeedGuardError::InconsistentShareSet);
    }

    let mut seen = [false; 256];
    for share in shares {
        if share.index == 0 {
            return Err(SeedGuardError::MalformedArtifact(
                "share index 0 is not a valid evaluation point".into(),
            ));
        }
        if seen[share.index as usize] {
            return Err(SeedGuardError::DuplicateShareIndex(share.index));
        }
        seen[share.index as usize] = true;
    }

    if shares.len() < threshold {
        return Err(SeedGuardError::InsufficientShares {
            have: shares.len(),
            need: threshold,
        });
    }

    let mut secret = Zeroizing::new(Vec::with_capacity(secret_len));
    let mut points = Vec::with_capacity(shares.len());
    for byte_idx in 0..secret_len {
        points.clear();
        points.extend(shares.iter().map(|s| (s.index, s.data[byte_idx])));
        secret.push(interpolate_at_zero(&points));
    }

    Ok(secret)
}
