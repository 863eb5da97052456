//! Digest adapters exposed by the crate.
//!
//! Currently includes Keccak-256 over an external sponge primitive.

pub mod keccak256;

/// Re-export of the Keccak-256 convenience function.
pub use keccak256::keccak256;
