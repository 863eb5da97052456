//! Fixed-width digest and big-integer primitives
//!
//! This crate provides a small family of fixed-bit-width binary value
//! types used to carry cryptographic digests and intermediate big-integer
//! working values, together with their hexadecimal text codec and a
//! Keccak-256 digest adapter.
//!
//! The focus is on **clarity, predictability, and auditability** rather
//! than on providing a general arbitrary-precision integer library. All
//! widths are fixed at definition time, all storage is inline, and every
//! operation is a bounded in-memory computation.
//!
//! # Module overview
//!
//! - `blob`
//!   The fixed-width value types: the generic [`Blob`] storage engine and
//!   its three instantiations — [`H160`] and [`H256`] as opaque digest
//!   containers, and [`U512`] as a 512-bit unsigned working integer with
//!   full wrapping arithmetic and shift-and-subtract division.
//!
//! - `hash`
//!   The digest adapter. Wraps an external Keccak-256 sponge and returns
//!   its output as an [`H256`].
//!
//! # Design goals
//!
//! - No heap allocations in the value types themselves
//! - Byte-exact, framing-free raw representation suitable for hashing
//!   and wire serialization
//! - Explicit, named arithmetic with documented wrapping semantics
//! - A single recoverable error ([`DivisionByZero`]); every other misuse
//!   is a caller bug and fails fast

pub mod blob;
pub mod hash;

pub use blob::{Blob, DivisionByZero, H160, H256, U512};
pub use hash::keccak256;
