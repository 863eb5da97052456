//! Named width instantiations
//!
//! The three widths share one storage engine and differ only in byte
//! count and in which operations they expose:
//!
//! - [`H160`] and [`H256`] are digest containers. They are opaque
//!   identifiers, not numbers, so they carry no arithmetic — only
//!   construction, comparison, hex rendering, and raw-byte access.
//! - [`U512`] is the big-integer working value with the full wrapping
//!   arithmetic surface.

use crate::blob::core::Blob;

/// 160-bit opaque digest container.
pub type H160 = Blob<20>;

/// 256-bit opaque digest container.
pub type H256 = Blob<32>;

/// 512-bit unsigned working integer.
pub type U512 = Blob<64>;

impl U512 {
    /// Truncates to a 256-bit digest container by copying the lowest
    /// 256 bits (the lowest-indexed 32 bytes) verbatim.
    pub fn trim256(&self) -> H256 {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.0[..32]);

        H256::from(out)
    }
}
