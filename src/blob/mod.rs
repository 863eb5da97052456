//! Fixed-width binary value types
//!
//! This module defines the [`Blob`] type, a fixed-size unsigned value
//! stored as an inline byte array, and its three instantiations:
//!
//! - [`H160`] — a 160-bit opaque digest container
//! - [`H256`] — a 256-bit opaque digest container
//! - [`U512`] — a 512-bit unsigned working integer
//!
//! `Blob` is designed as a low-level, dependency-free primitive rather
//! than a big-integer abstraction. Its storage never grows, it is copied
//! by value, and its raw byte representation doubles as the wire form of
//! a digest.
//!
//! The digest widths expose construction, comparison, hexadecimal
//! rendering, and raw-byte access only; the arithmetic surface lives
//! exclusively on `U512`, which plays the role of an intermediate
//! big-integer working value.

mod conv;
mod core;
mod hex;
mod ops;
mod types;

pub use self::core::Blob;
pub use self::ops::DivisionByZero;
pub use self::types::{H160, H256, U512};
