//! Conversions between blobs and native integer or byte-array forms
//!
//! These conversions preserve the little-endian raw representation and
//! never truncate implicitly: narrowing a blob into a native integer is
//! fallible and succeeds only when the discarded bytes are zero.

use crate::blob::core::Blob;

/// Wraps an exact-length byte array as a blob.
///
/// The array is taken as the raw little-endian representation.
impl<const BYTES: usize> From<[u8; BYTES]> for Blob<BYTES> {
    fn from(value: [u8; BYTES]) -> Self {
        Self(value)
    }
}

/// Unwraps a blob into its raw little-endian byte array.
impl<const BYTES: usize> From<Blob<BYTES>> for [u8; BYTES] {
    fn from(value: Blob<BYTES>) -> Self {
        value.0
    }
}

/// Widens a `u64` into a blob.
///
/// The value occupies the least significant 64 bits; all higher bits are
/// set to zero.
impl<const BYTES: usize> From<u64> for Blob<BYTES> {
    fn from(value: u64) -> Self {
        let mut out = [0u8; BYTES];
        out[..8].copy_from_slice(&value.to_le_bytes());

        Self(out)
    }
}

/// Attempts to narrow a blob into a `u64`.
///
/// The conversion succeeds only if every bit above the lowest 64 is
/// zero.
impl<const BYTES: usize> TryFrom<Blob<BYTES>> for u64 {
    type Error = ();

    fn try_from(value: Blob<BYTES>) -> Result<Self, Self::Error> {
        let (low, high) = value.0.split_at(8);

        if high.iter().any(|&byte| byte != 0) {
            return Err(());
        }

        Ok(u64::from_le_bytes(low.try_into().unwrap()))
    }
}
