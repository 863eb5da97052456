//! Hexadecimal codec for fixed-width blobs
//!
//! Rendering produces `2 * BYTES` lowercase hexadecimal characters with
//! the most significant byte first (the reverse of the internal
//! little-endian byte order) and no prefix.
//!
//! Parsing is deliberately **permissive**: leading whitespace and an
//! optional case-insensitive `0x` prefix are skipped, the maximal run of
//! hex digits is consumed, and everything after the first non-hex
//! character is silently ignored. Odd-length runs and runs longer than
//! the blob's capacity are handled without error (the leftover most
//! significant digit stands on its own; excess leading digits are
//! dropped). This policy is intentional — hex input in the digest domain
//! routinely carries prefixes and trailing annotations — and the test
//! suite asserts it rather than flagging it.

use std::fmt::{Display, Formatter, Result};

use crate::blob::core::Blob;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Decodes one ASCII hex digit.
///
/// Callers only pass bytes already matched by `is_ascii_hexdigit`.
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => unreachable!("digit comes from a validated hex run"),
    }
}

impl<const BYTES: usize> Blob<BYTES> {
    /// Renders the value as `2 * BYTES` lowercase hex characters, most
    /// significant byte first, without a prefix.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(BYTES * 2);

        for &byte in self.0.iter().rev() {
            out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
            out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
        }

        out
    }

    /// Replaces the value with the one parsed from `text`.
    ///
    /// See the module documentation for the permissive parsing policy.
    /// Parsing never fails: unparseable input simply leaves fewer (or
    /// no) bytes populated, with the remainder zero.
    pub fn set_hex(&mut self, text: &str) {
        self.set_null();

        let bytes = text.as_bytes();
        let mut pos = 0;

        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }

        if bytes.len() >= pos + 2 && bytes[pos] == b'0' && (bytes[pos + 1] | 0x20) == b'x' {
            pos += 2;
        }

        let start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_hexdigit() {
            pos += 1;
        }

        // Consume the digit run from its end backward, two digits per
        // byte, filling storage from the least significant byte up. An
        // odd-length run leaves its most significant digit as the final
        // byte's value; digits beyond capacity are dropped.
        let mut digits = bytes[start..pos].iter().rev().map(|&d| hex_value(d));

        for byte in self.0.iter_mut() {
            let Some(low) = digits.next() else { break };
            let high = digits.next().unwrap_or(0);

            *byte = low | (high << 4);
        }
    }

    /// Parses a blob from hexadecimal text.
    ///
    /// Equivalent to [`Blob::set_hex`] on a zero value.
    pub fn from_hex(text: &str) -> Self {
        let mut out = Self::ZERO;
        out.set_hex(text);

        out
    }
}

/// Formats the value exactly as [`Blob::to_hex`] does.
impl<const BYTES: usize> Display for Blob<BYTES> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for &byte in self.0.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}
