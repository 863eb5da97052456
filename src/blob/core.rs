//! Fixed-width blob storage and core predicates
//!
//! This module defines the generic [`Blob`] value type used by every
//! width in the crate.
//!
//! The internal representation is a fixed inline byte array interpreted
//! in **little-endian** order: byte 0 is the least significant byte of
//! the value, and 32-bit limb `i` occupies bytes `4i..4i + 4`. This
//! layout is exposed verbatim as the raw representation used for
//! hashing and serialization, so it must remain stable across all
//! operations.

use std::cmp::Ordering;
use std::io;

/// Fixed-width unsigned binary value.
///
/// The value is stored as `BYTES` bytes in **little-endian** order and
/// never resizes. Copy semantics are intentional: a blob is a plain
/// value, cheap to duplicate and free of shared state.
///
/// Only the core, width-agnostic surface lives here. Arithmetic is
/// provided solely for the 512-bit instantiation (see [`crate::blob::U512`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Blob<const BYTES: usize>(pub(crate) [u8; BYTES]);

impl<const BYTES: usize> Blob<BYTES> {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; BYTES]);

    /// The value one.
    pub const ONE: Self = Self::one_le();

    /// The maximum representable value (all bits set).
    pub const MAX: Self = Self([255u8; BYTES]);

    /// The width of this blob in bits.
    pub const BITS: u32 = (BYTES * 8) as u32;

    /// Returns the value one encoded in little-endian form.
    ///
    /// This is a `const` constructor suitable for use in constant contexts.
    pub const fn one_le() -> Self {
        let mut out = [0u8; BYTES];
        out[0] = 1;
        Self(out)
    }

    /// Constructs a blob from an exact-length byte buffer.
    ///
    /// The buffer is the raw little-endian representation and is copied
    /// verbatim.
    ///
    /// # Panics
    /// Panics if `bytes.len() != BYTES`. A wrong-length buffer is a
    /// caller bug, not a runtime condition, and is never silently
    /// truncated or padded.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), BYTES, "byte buffer length must equal blob width");

        let mut out = [0u8; BYTES];
        out.copy_from_slice(bytes);

        Self(out)
    }

    /// Returns the raw little-endian byte representation.
    ///
    /// This is both the in-memory layout and the serialized form: exactly
    /// `BYTES` bytes, no framing.
    pub const fn as_bytes(&self) -> &[u8; BYTES] {
        &self.0
    }

    /// Returns `true` iff every bit is zero.
    pub fn is_null(&self) -> bool {
        self.0.iter().all(|&byte| byte == 0)
    }

    /// Resets the value to zero.
    pub fn set_null(&mut self) {
        self.0 = [0u8; BYTES];
    }

    /// Returns the position of the highest set bit plus one, or zero if
    /// the value is zero.
    ///
    /// Used by the long-division algorithm and useful on its own for
    /// target/difficulty style comparisons.
    pub fn bits(&self) -> u32 {
        for (i, &byte) in self.0.iter().enumerate().rev() {
            if byte != 0 {
                return i as u32 * 8 + (8 - byte.leading_zeros());
            }
        }

        0
    }

    /// Reads the lowest 64 bits of the value.
    ///
    /// For a uniformly random digest this doubles as a cheap 64-bit
    /// hash of the contents. Not safe against adversarially chosen
    /// values.
    pub fn low_u64(&self) -> u64 {
        u64::from_le_bytes(self.0[..8].try_into().unwrap())
    }

    /// Writes the raw representation to a stream: exactly `BYTES` bytes,
    /// no length prefix.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.0)
    }

    /// Reads a blob back from a stream, consuming exactly `BYTES` bytes.
    pub fn read_from<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let mut out = [0u8; BYTES];
        reader.read_exact(&mut out)?;

        Ok(Self(out))
    }
}

/// Ordering compares the raw representation from the highest-indexed
/// byte down, i.e. most significant byte first. With the little-endian
/// layout this coincides with unsigned numeric order.
impl<const BYTES: usize> Ord for Blob<BYTES> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl<const BYTES: usize> PartialOrd for Blob<BYTES> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Provides a manual `Default` implementation for `Blob`.
///
/// `#[derive(Default)]` cannot be used because the standard library does
/// not implement `Default` for arrays of arbitrary const-generic length.
/// The default value is zero, consistent with [`Blob::ZERO`].
impl<const BYTES: usize> Default for Blob<BYTES> {
    fn default() -> Self {
        Self::ZERO
    }
}
