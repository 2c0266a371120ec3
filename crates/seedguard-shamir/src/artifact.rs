//! Artifact encoding
//!
//! Serializes the primary metadata and each share as short, self-describing
//! strings that survive transcription: a format prefix carrying the version
//! (`sgp1` for the primary, `sgs1` for shares), a lowercase-hex payload, and
//! a 4-byte truncated SHA-256 checksum over the payload. The checksum catches
//! copy typos independently of the seed-phrase checksum.
//!
//! Payload layouts (before the trailing checksum):
//!
//! ```text
//! primary:  k | n | entropy_len | salt[16] | fingerprint[4]
//! share:    k | n | index | data[entropy_len]
//! ```
//!
//! Parsing is all-or-nothing: bad prefix, non-hex text, truncation, checksum
//! mismatch, or out-of-range fields all fail with `MalformedArtifact`.

use crate::shamir::RawShare;
use crate::SeedGuardError;
use seedguard_core::SALT_LEN;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Primary artifact prefix; the trailing digit is the format version
pub const PRIMARY_PREFIX: &str = "sgp1";

/// Share artifact prefix
pub const SHARE_PREFIX: &str = "sgs1";

/// Transcription checksum length appended to every payload
const CHECKSUM_LEN: usize = 4;

/// Entropy fingerprint length carried in the primary
pub const FINGERPRINT_LEN: usize = 4;

const PRIMARY_PAYLOAD_LEN: usize = 3 + SALT_LEN + FINGERPRINT_LEN;

/// Non-secret metadata produced once per encode and required at decode.
/// Never counts toward the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryMetadata {
    pub threshold: u8,
    pub total: u8,
    pub entropy_len: u8,
    pub salt: [u8; SALT_LEN],
    pub fingerprint: [u8; FINGERPRINT_LEN],
}

/// A parsed share: its declared (K, N) metadata plus the raw fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareArtifact {
    pub threshold: u8,
    pub total: u8,
    pub share: RawShare,
}

fn payload_checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(payload);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&digest[..CHECKSUM_LEN]);
    checksum
}

/// Short fingerprint of the raw entropy, stored in the primary as the
/// wrong-password / wrong-quorum heuristic. Domain-separated from the
/// transcription checksum.
pub fn entropy_fingerprint(entropy: &[u8]) -> [u8; FINGERPRINT_LEN] {
    let digest = Sha256::new()
        .chain_update(b"seedguard.fingerprint.v1")
        .chain_update(entropy)
        .finalize();
    let mut fingerprint = [0u8; FINGERPRINT_LEN];
    fingerprint.copy_from_slice(&digest[..FINGERPRINT_LEN]);
    fingerprint
}

fn encode(prefix: &str, mut payload: Vec<u8>) -> String {
    let checksum = payload_checksum(&payload);
    payload.extend_from_slice(&checksum);
    format!("{}{}", prefix, hex::encode(payload))
}

/// Serialize the primary metadata.
pub fn encode_primary(meta: &PrimaryMetadata) -> String {
    let mut payload = Vec::with_capacity(PRIMARY_PAYLOAD_LEN);
    payload.push(meta.threshold);
    payload.push(meta.total);
    payload.push(meta.entropy_len);
    payload.extend_from_slice(&meta.salt);
    payload.extend_from_slice(&meta.fingerprint);
    encode(PRIMARY_PREFIX, payload)
}

/// Serialize one share.
pub fn encode_share(artifact: &ShareArtifact) -> String {
    let mut payload = Vec::with_capacity(3 + artifact.share.data.len());
    payload.push(artifact.threshold);
    payload.push(artifact.total);
    payload.push(artifact.share.index);
    payload.extend_from_slice(&artifact.share.data);
    encode(SHARE_PREFIX, payload)
}

/// Strip the prefix, hex-decode, and verify the transcription checksum.
/// Surrounding whitespace is tolerated (user input is hand-copied).
fn checked_payload(input: &str, prefix: &str, kind: &str) -> Result<Vec<u8>, SeedGuardError> {
    let body = input.trim().strip_prefix(prefix).ok_or_else(|| {
        SeedGuardError::MalformedArtifact(format!(
            "not a {kind} artifact (expected \"{prefix}\" prefix)"
        ))
    })?;

    let bytes = hex::decode(body)
        .map_err(|_| SeedGuardError::MalformedArtifact(format!("{kind} payload is not hex")))?;

    if bytes.len() <= CHECKSUM_LEN {
        return Err(SeedGuardError::MalformedArtifact(format!(
            "{kind} artifact is truncated"
        )));
    }

    let (payload, checksum) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    if payload_checksum(payload).as_slice() != checksum {
        return Err(SeedGuardError::MalformedArtifact(format!(
            "{kind} checksum mismatch (transcription error?)"
        )));
    }

    Ok(payload.to_vec())
}

/// Parse a primary artifact string.
pub fn parse_primary(input: &str) -> Result<PrimaryMetadata, SeedGuardError> {
    let payload = checked_payload(input, PRIMARY_PREFIX, "primary")?;
    if payload.len() != PRIMARY_PAYLOAD_LEN {
        return Err(SeedGuardError::MalformedArtifact(
            "primary payload has wrong length".into(),
        ));
    }

    let threshold = payload[0];
    let total = payload[1];
    let entropy_len = payload[2];
    if threshold < 2 || threshold > total {
        return Err(SeedGuardError::MalformedArtifact(
            "primary declares an invalid (k, n) configuration".into(),
        ));
    }

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&payload[3..3 + SALT_LEN]);
    let mut fingerprint = [0u8; FINGERPRINT_LEN];
    fingerprint.copy_from_slice(&payload[3 + SALT_LEN..]);

    Ok(PrimaryMetadata {
        threshold,
        total,
        entropy_len,
        salt,
        fingerprint,
    })
}

/// Parse a share artifact string.
pub fn parse_share(input: &str) -> Result<ShareArtifact, SeedGuardError> {
    let payload = checked_payload(input, SHARE_PREFIX, "share")?;
    if payload.len() < 4 {
        return Err(SeedGuardError::MalformedArtifact(
            "share artifact is truncated".into(),
        ));
    }

    let threshold = payload[0];
    let total = payload[1];
    let index = payload[2];
    if threshold < 2 || threshold > total {
        return Err(SeedGuardError::MalformedArtifact(
            "share declares an invalid (k, n) configuration".into(),
        ));
    }
    if index == 0 || index > total {
        return Err(SeedGuardError::MalformedArtifact(
            "share index out of range".into(),
        ));
    }

    Ok(ShareArtifact {
        threshold,
        total,
        share: RawShare {
            index,
            data: payload[3..].to_vec(),
        },
    })
}
