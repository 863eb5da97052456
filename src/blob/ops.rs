//! Arithmetic, bitwise, and shift operations for `U512`
//!
//! The digest widths are opaque identifiers and deliberately expose no
//! arithmetic; everything in this module is implemented for the 512-bit
//! working integer only.
//!
//! All arithmetic is performed on 32-bit limbs (bytes `4i..4i + 4` of
//! the little-endian storage, read as `u32`) with 64-bit accumulators
//! for carries, and wraps modulo 2^512: overflow past the top limb is
//! discarded, never signalled. Shifts are logical — the type is
//! unsigned — and a shift of 512 bits or more yields zero.
//!
//! Division is the one fallible operation. A zero divisor can arrive
//! from untrusted input, so it surfaces as the typed [`DivisionByZero`]
//! error instead of panicking; [`U512::div_rem`] also hands back the
//! remainder so callers never reconstruct it with a second
//! multiply-subtract pass.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul,
    MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::blob::types::U512;

/// Number of 32-bit limbs in a 512-bit value.
const LIMBS: usize = 16;

/// Attempted division by a zero-valued divisor.
///
/// This is the sole recoverable error in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZero;

impl Display for DivisionByZero {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("division by zero")
    }
}

impl Error for DivisionByZero {}

impl U512 {
    #[inline]
    fn limb(&self, i: usize) -> u32 {
        u32::from_le_bytes(self.0[i * 4..i * 4 + 4].try_into().unwrap())
    }

    #[inline]
    fn set_limb(&mut self, i: usize, value: u32) {
        self.0[i * 4..i * 4 + 4].copy_from_slice(&value.to_le_bytes());
    }

    /// Addition modulo 2^512.
    ///
    /// Carries propagate limb by limb through a 64-bit accumulator; the
    /// carry out of the top limb is dropped.
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        let mut out = Self::ZERO;
        let mut carry = 0u64;

        for i in 0..LIMBS {
            let n = carry + self.limb(i) as u64 + rhs.limb(i) as u64;
            out.set_limb(i, n as u32);
            carry = n >> 32;
        }

        out
    }

    /// Two's-complement negation: bitwise complement plus one.
    pub fn wrapping_neg(&self) -> Self {
        let mut out = !*self;
        out.increment();

        out
    }

    /// Subtraction modulo 2^512, as addition of the negation.
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.wrapping_add(&rhs.wrapping_neg())
    }

    /// Adds one in place, rippling the carry upward and wrapping at the
    /// maximum value.
    pub fn increment(&mut self) {
        for i in 0..LIMBS {
            let (limb, overflow) = self.limb(i).overflowing_add(1);
            self.set_limb(i, limb);

            if !overflow {
                break;
            }
        }
    }

    /// Subtracts one in place, rippling the borrow upward and wrapping
    /// at zero.
    pub fn decrement(&mut self) {
        for i in 0..LIMBS {
            let (limb, borrow) = self.limb(i).overflowing_sub(1);
            self.set_limb(i, limb);

            if !borrow {
                break;
            }
        }
    }

    /// Multiplication by a 32-bit scalar, modulo 2^512.
    pub fn wrapping_mul_u32(&self, rhs: u32) -> Self {
        let mut out = Self::ZERO;
        let mut carry = 0u64;

        for i in 0..LIMBS {
            let n = carry + self.limb(i) as u64 * rhs as u64;
            out.set_limb(i, n as u32);
            carry = n >> 32;
        }

        out
    }

    /// Schoolbook multiplication modulo 2^512.
    ///
    /// Limb products above the top limb are discarded, matching the
    /// fixed-width wraparound semantics of the rest of the arithmetic.
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        let mut out = Self::ZERO;

        for j in 0..LIMBS {
            let mut carry = 0u64;

            for i in 0..LIMBS - j {
                let n = carry + out.limb(i + j) as u64 + self.limb(j) as u64 * rhs.limb(i) as u64;
                out.set_limb(i + j, n as u32);
                carry = n >> 32;
            }
        }

        out
    }

    /// Unsigned long division, returning `(quotient, remainder)`.
    ///
    /// Classic shift-and-subtract: the divisor is shifted left until its
    /// highest set bit lines up with the dividend's, then walked back
    /// one bit at a time, subtracting and setting the matching quotient
    /// bit whenever the shrinking remainder still covers it.
    ///
    /// # Errors
    /// Returns [`DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), DivisionByZero> {
        let divisor_bits = divisor.bits();

        if divisor_bits == 0 {
            return Err(DivisionByZero);
        }

        let mut quotient = Self::ZERO;
        let mut remainder = *self;

        let dividend_bits = self.bits();
        if divisor_bits > dividend_bits {
            // The quotient is certainly zero.
            return Ok((quotient, remainder));
        }

        let mut shift = dividend_bits - divisor_bits;
        let mut div = *divisor << shift;

        loop {
            if remainder >= div {
                remainder = remainder.wrapping_sub(&div);

                let i = (shift / 32) as usize;
                quotient.set_limb(i, quotient.limb(i) | 1 << (shift & 31));
            }

            if shift == 0 {
                break;
            }

            div = div >> 1;
            shift -= 1;
        }

        Ok((quotient, remainder))
    }

    /// Quotient of [`U512::div_rem`].
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, DivisionByZero> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Remainder of [`U512::div_rem`].
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, DivisionByZero> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }
}

/// Bitwise complement.
impl Not for U512 {
    type Output = U512;

    fn not(self) -> Self::Output {
        let mut out = [0u8; 64];

        out.iter_mut()
            .zip(self.0.iter())
            .for_each(|(o, b)| *o = !b);

        U512::from(out)
    }
}

/// Bitwise AND between two 512-bit values.
impl BitAnd<U512> for U512 {
    type Output = U512;

    fn bitand(self, rhs: U512) -> Self::Output {
        let mut out = [0u8; 64];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l & r);

        U512::from(out)
    }
}

/// Bitwise OR between two 512-bit values.
impl BitOr<U512> for U512 {
    type Output = U512;

    fn bitor(self, rhs: U512) -> Self::Output {
        let mut out = [0u8; 64];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l | r);

        U512::from(out)
    }
}

/// Bitwise XOR between two 512-bit values.
impl BitXor<U512> for U512 {
    type Output = U512;

    fn bitxor(self, rhs: U512) -> Self::Output {
        let mut out = [0u8; 64];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l ^ r);

        U512::from(out)
    }
}

impl BitAndAssign for U512 {
    fn bitand_assign(&mut self, rhs: U512) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for U512 {
    fn bitor_assign(&mut self, rhs: U512) {
        *self = *self | rhs;
    }
}

impl BitXorAssign for U512 {
    fn bitxor_assign(&mut self, rhs: U512) {
        *self = *self ^ rhs;
    }
}

/// Logical left shift.
///
/// The shift amount decomposes into a limb shift `k = s / 32` and a
/// sub-limb shift `r = s % 32`; limbs pushed past the top are discarded.
/// Shifts of 512 bits or more yield zero.
impl Shl<u32> for U512 {
    type Output = U512;

    fn shl(self, shift: u32) -> Self::Output {
        let mut out = U512::ZERO;
        let k = (shift / 32) as usize;
        let r = shift % 32;

        for i in 0..LIMBS {
            let limb = self.limb(i);

            if i + k < LIMBS {
                out.set_limb(i + k, out.limb(i + k) | (limb << r));
            }
            if r != 0 && i + k + 1 < LIMBS {
                out.set_limb(i + k + 1, out.limb(i + k + 1) | (limb >> (32 - r)));
            }
        }

        out
    }
}

/// Logical right shift, the mirror of `<<`.
///
/// Bits shifted out at the bottom are discarded; shifts of 512 bits or
/// more yield zero.
impl Shr<u32> for U512 {
    type Output = U512;

    fn shr(self, shift: u32) -> Self::Output {
        let mut out = U512::ZERO;
        let k = (shift / 32) as usize;
        let r = shift % 32;

        for i in 0..LIMBS {
            let limb = self.limb(i);

            if i >= k {
                out.set_limb(i - k, out.limb(i - k) | (limb >> r));
            }
            if r != 0 && i > k {
                out.set_limb(i - k - 1, out.limb(i - k - 1) | (limb << (32 - r)));
            }
        }

        out
    }
}

impl ShlAssign<u32> for U512 {
    fn shl_assign(&mut self, shift: u32) {
        *self = *self << shift;
    }
}

impl ShrAssign<u32> for U512 {
    fn shr_assign(&mut self, shift: u32) {
        *self = *self >> shift;
    }
}

/// Addition modulo 2^512.
impl Add for U512 {
    type Output = U512;

    fn add(self, rhs: U512) -> Self::Output {
        self.wrapping_add(&rhs)
    }
}

impl AddAssign for U512 {
    fn add_assign(&mut self, rhs: U512) {
        *self = self.wrapping_add(&rhs);
    }
}

/// Subtraction modulo 2^512.
impl Sub for U512 {
    type Output = U512;

    fn sub(self, rhs: U512) -> Self::Output {
        self.wrapping_sub(&rhs)
    }
}

impl SubAssign for U512 {
    fn sub_assign(&mut self, rhs: U512) {
        *self = self.wrapping_sub(&rhs);
    }
}

/// Two's-complement negation.
impl Neg for U512 {
    type Output = U512;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

/// Multiplication modulo 2^512.
impl Mul<U512> for U512 {
    type Output = U512;

    fn mul(self, rhs: U512) -> Self::Output {
        self.wrapping_mul(&rhs)
    }
}

/// Multiplication by a 32-bit scalar, modulo 2^512.
impl Mul<u32> for U512 {
    type Output = U512;

    fn mul(self, rhs: u32) -> Self::Output {
        self.wrapping_mul_u32(rhs)
    }
}

impl MulAssign<U512> for U512 {
    fn mul_assign(&mut self, rhs: U512) {
        *self = self.wrapping_mul(&rhs);
    }
}
