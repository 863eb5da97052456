//! Keccak-256 digest adapter
//!
//! The sponge itself is an external primitive; this module only feeds
//! it a byte range and lands the 32 output bytes in an [`H256`].

use tiny_keccak::{Hasher, Keccak};

use crate::blob::H256;

/// Computes the Keccak-256 digest of `input` (original Keccak padding,
/// not the NIST SHA-3 variant).
///
/// The call is stateless and deterministic: identical input bytes always
/// yield an identical digest. Empty input is valid and hashes the empty
/// message.
///
/// The digest bytes are stored verbatim in the returned [`H256`], so its
/// hex rendering shows them most significant byte first — reversed
/// relative to the conventional digest string, as is customary for chain
/// identifiers.
pub fn keccak256(input: &[u8]) -> H256 {
    let mut keccak = Keccak::v256();
    keccak.update(input);

    let mut out = [0u8; 32];
    keccak.finalize(&mut out);

    H256::from(out)
}
