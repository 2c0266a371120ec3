//! Tamper-detection and quorum-failure tests
//!
//! Verifies that transcription errors in artifact strings are caught by the
//! artifact checksum, and that every quorum failure mode surfaces as its own
//! distinct error kind rather than a silent wrong result.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use seedguard_shamir::{SeedGuard, SeedGuardError};

fn phrase(words: &str) -> Vec<String> {
    words.split_whitespace().map(str::to_string).collect()
}

fn zero_entropy_phrase() -> Vec<String> {
    phrase(
        "abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon about",
    )
}

fn other_phrase() -> Vec<String> {
    // Entropy 0x01 repeated: a different valid 12-word phrase
    seedguard_core::entropy_to_words(&[0x01u8; 16]).unwrap()
}

fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

fn encode_3_of_5(seed: u64) -> (Vec<String>, String, Vec<String>) {
    let guard = SeedGuard::new();
    let words = zero_entropy_phrase();
    let (primary, shares) = guard
        .encode_seed_phrase_with_rng(&words, 3, 5, None, &mut rng(seed))
        .unwrap();
    (words, primary, shares)
}

/// Replace the character at `pos` with a different hex digit, so the
/// corrupted string still looks superficially plausible.
fn flip_char(s: &str, pos: usize) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars[pos] = if chars[pos] == '0' { '1' } else { '0' };
    chars.into_iter().collect()
}

#[test]
fn flipping_any_share_character_is_detected() {
    let guard = SeedGuard::new();
    let (_, primary, shares) = encode_3_of_5(10);

    let victim = &shares[0];
    for pos in 0..victim.len() {
        let corrupted = flip_char(victim, pos);
        let quorum = vec![corrupted, shares[1].clone(), shares[2].clone()];
        let result = guard.decode_shares(&primary, &quorum, None);
        assert!(
            matches!(result, Err(SeedGuardError::MalformedArtifact(_))),
            "corruption at position {pos} was not caught"
        );
    }
}

#[test]
fn flipping_any_primary_character_is_detected() {
    let guard = SeedGuard::new();
    let (_, primary, shares) = encode_3_of_5(11);

    for pos in 0..primary.len() {
        let corrupted = flip_char(&primary, pos);
        let result = guard.decode_shares(&corrupted, &shares[0..3], None);
        assert!(
            matches!(result, Err(SeedGuardError::MalformedArtifact(_))),
            "corruption at position {pos} was not caught"
        );
    }
}

#[test]
fn share_passed_as_primary_is_rejected() {
    let guard = SeedGuard::new();
    let (_, primary, shares) = encode_3_of_5(12);

    assert!(matches!(
        guard.decode_shares(&shares[0], &shares[1..4], None),
        Err(SeedGuardError::MalformedArtifact(_))
    ));
    let swapped = vec![primary.clone(), shares[0].clone(), shares[1].clone()];
    assert!(matches!(
        guard.decode_shares(&primary, &swapped, None),
        Err(SeedGuardError::MalformedArtifact(_))
    ));
}

#[test]
fn duplicate_share_is_rejected_not_resolved() {
    let guard = SeedGuard::new();
    let (_, primary, shares) = encode_3_of_5(13);

    let dup = vec![shares[0].clone(), shares[0].clone(), shares[1].clone()];
    assert!(matches!(
        guard.decode_shares(&primary, &dup, None),
        Err(SeedGuardError::DuplicateShareIndex(1))
    ));
}

#[test]
fn empty_share_list_is_insufficient() {
    let guard = SeedGuard::new();
    let (_, primary, _) = encode_3_of_5(14);

    assert!(matches!(
        guard.decode_shares(&primary, &[], None),
        Err(SeedGuardError::InsufficientShares { have: 0, need: 3 })
    ));
}

#[test]
fn foreign_quorum_is_caught_by_fingerprint() {
    let guard = SeedGuard::new();
    let (_, primary, _) = encode_3_of_5(15);

    // Same (k, n) and entropy length, but a different secret: the artifacts
    // parse and combine, and only the primary's fingerprint can object.
    let (foreign_primary, foreign_shares) = guard
        .encode_seed_phrase_with_rng(&other_phrase(), 3, 5, None, &mut rng(16))
        .unwrap();

    assert!(matches!(
        guard.decode_shares(&primary, &foreign_shares[0..3], None),
        Err(SeedGuardError::FingerprintMismatch)
    ));

    // Sanity: the foreign set decodes fine against its own primary
    let recovered = guard
        .decode_shares(&foreign_primary, &foreign_shares[2..5], None)
        .unwrap();
    assert_eq!(recovered, other_phrase());
}

#[test]
fn mixed_quorums_from_two_splits_fail_closed() {
    let guard = SeedGuard::new();
    // Two splits of two different phrases
    let (_, primary, shares_a) = encode_3_of_5(17);
    let (_, shares_b) = guard
        .encode_seed_phrase_with_rng(&other_phrase(), 3, 5, None, &mut rng(19))
        .unwrap();

    // Two real shares plus one from another split: combine yields garbage,
    // which the fingerprint rejects (up to the 2^-32 collision chance).
    let mixed = vec![shares_a[0].clone(), shares_a[1].clone(), shares_b[2].clone()];
    assert!(matches!(
        guard.decode_shares(&primary, &mixed, None),
        Err(SeedGuardError::FingerprintMismatch)
    ));
}

#[test]
fn share_count_overflow_at_encode() {
    let guard = SeedGuard::new();
    assert!(matches!(
        guard.encode_seed_phrase_with_rng(&zero_entropy_phrase(), 2, 256, None, &mut rng(20)),
        Err(SeedGuardError::ShareCountOverflow(256))
    ));
}
