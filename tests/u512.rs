use fixedhash::{DivisionByZero, U512};

fn patterned() -> U512 {
    let mut out = [0u8; 64];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(31).wrapping_add(17);
    }
    U512::from(out)
}

#[test]
fn addition_carries_and_wraps() {
    assert_eq!(U512::from(2u64) + U512::from(3u64), U512::from(5u64));

    // Carry across a limb boundary.
    let mut carried = U512::from(0xffff_ffffu64);
    carried.increment();
    assert_eq!(carried, U512::from(0x1_0000_0000u64));

    // Overflow past the top limb is discarded.
    assert_eq!(U512::MAX + U512::ONE, U512::ZERO);
}

#[test]
fn additive_inverse_is_zero() {
    for value in [U512::ONE, U512::MAX, U512::from(0xdead_beefu64), patterned()] {
        assert_eq!(value + (-value), U512::ZERO);
        assert_eq!(value.wrapping_add(&value.wrapping_neg()), U512::ZERO);
    }

    assert_eq!(-U512::ZERO, U512::ZERO);
}

#[test]
fn subtraction_is_addition_of_the_negation() {
    assert_eq!(U512::from(10u64) - U512::from(3u64), U512::from(7u64));
    assert_eq!(U512::ZERO - U512::ONE, U512::MAX);

    let mut value = U512::from(10u64);
    value -= U512::from(3u64);
    assert_eq!(value, U512::from(7u64));
}

#[test]
fn increment_and_decrement_ripple() {
    let mut value = U512::MAX;
    value.increment();
    assert_eq!(value, U512::ZERO);

    value.decrement();
    assert_eq!(value, U512::MAX);

    let mut value = U512::from(41u64);
    value.increment();
    assert_eq!(value, U512::from(42u64));

    let mut value = U512::from(0x1_0000_0000u64);
    value.decrement();
    assert_eq!(value, U512::from(0xffff_ffffu64));
}

#[test]
fn scalar_multiplication() {
    assert_eq!(U512::from(6u64).wrapping_mul_u32(7), U512::from(42u64));
    assert_eq!(patterned() * 1u32, patterned());
    assert_eq!(patterned() * 0u32, U512::ZERO);

    // MAX * 2 == 2^513 - 2 == MAX - 1 (mod 2^512).
    assert_eq!(U512::MAX.wrapping_mul_u32(2), U512::MAX - U512::ONE);
}

#[test]
fn blob_multiplication() {
    let a = U512::from(u64::MAX);
    let expected = U512::from_hex("fffffffffffffffe0000000000000001");
    assert_eq!(a.wrapping_mul(&a), expected);
    assert_eq!(a * a, expected);

    assert_eq!(patterned() * U512::ONE, patterned());
    assert_eq!(patterned() * U512::ZERO, U512::ZERO);

    // Wraparound: 2^511 * 2 == 0 (mod 2^512).
    assert_eq!((U512::ONE << 511) * U512::from(2u64), U512::ZERO);
}

#[test]
fn shifts_are_logical_and_drop_bits() {
    assert_eq!(U512::ONE << 0, U512::ONE);
    assert_eq!(U512::ONE >> 1, U512::ZERO);
    assert_eq!(U512::ONE << 512, U512::ZERO);
    assert_eq!(U512::MAX >> 512, U512::ZERO);
    assert_eq!((U512::ONE << 511) >> 511, U512::ONE);
    assert_eq!((U512::ONE << 255).bits(), 256);

    let mut value = U512::ONE;
    value <<= 64;
    assert_eq!(value, U512::from_hex("10000000000000000"));
    value >>= 64;
    assert_eq!(value, U512::ONE);
}

#[test]
fn shift_identity_clears_the_lost_bits() {
    let value = patterned();
    let shift = 37u32;

    // Right-then-left loses the lowest bits.
    let low_mask = (U512::ONE << shift) - U512::ONE;
    assert_eq!((value >> shift) << shift, value & !low_mask);

    // Left-then-right loses the highest bits.
    let high_mask = U512::MAX >> shift;
    assert_eq!((value << shift) >> shift, value & high_mask);
}

#[test]
fn bitwise_operators() {
    let value = patterned();

    assert_eq!(!U512::ZERO, U512::MAX);
    assert_eq!(value ^ value, U512::ZERO);
    assert_eq!(value & U512::MAX, value);
    assert_eq!(value | U512::ZERO, value);
    assert_eq!(value & !value, U512::ZERO);
    assert_eq!(value | !value, U512::MAX);

    let mut assigned = value;
    assigned ^= value;
    assert_eq!(assigned, U512::ZERO);
    assigned |= value;
    assert_eq!(assigned, value);
    assigned &= U512::ZERO;
    assert_eq!(assigned, U512::ZERO);
}

#[test]
fn bits_drives_division_alignment() {
    assert_eq!(U512::ZERO.bits(), 0);
    assert_eq!(U512::ONE.bits(), 1);
    assert_eq!(U512::from(0x80u64).bits(), 8);
    assert_eq!((U512::ONE << 300).bits(), 301);
    assert_eq!(U512::MAX.bits(), 512);
}

#[test]
fn division_small_scenarios() {
    let (quotient, remainder) = U512::from(10u64).div_rem(&U512::from(3u64)).unwrap();
    assert_eq!(quotient, U512::from(3u64));
    assert_eq!(remainder, U512::from(1u64));

    let (quotient, remainder) = U512::ZERO.div_rem(&U512::from(5u64)).unwrap();
    assert_eq!(quotient, U512::ZERO);
    assert_eq!(remainder, U512::ZERO);

    // Divisor wider than the dividend: quotient zero, dividend untouched.
    let (quotient, remainder) = U512::from(3u64).div_rem(&U512::from(10u64)).unwrap();
    assert_eq!(quotient, U512::ZERO);
    assert_eq!(remainder, U512::from(3u64));

    assert_eq!(U512::MAX.checked_div(&U512::ONE).unwrap(), U512::MAX);
    assert_eq!(U512::MAX.checked_rem(&U512::ONE).unwrap(), U512::ZERO);
}

#[test]
fn division_by_zero_is_a_typed_error() {
    for dividend in [U512::ZERO, U512::from(7u64), U512::MAX] {
        assert_eq!(dividend.div_rem(&U512::ZERO), Err(DivisionByZero));
        assert_eq!(dividend.checked_div(&U512::ZERO), Err(DivisionByZero));
        assert_eq!(dividend.checked_rem(&U512::ZERO), Err(DivisionByZero));
    }
}

#[test]
fn division_is_floor_division() {
    let dividend = U512::from_hex("123456789abcdef0fedcba9876543210123456789abcdef0");
    let divisors = [
        U512::from(3u64),
        U512::from(0xffff_fffbu64),
        U512::from_hex("1000000000000001"),
        dividend,
    ];

    for divisor in divisors {
        let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();

        // quotient * divisor + remainder reconstructs the dividend,
        // and the remainder is a proper one.
        assert!(remainder < divisor);
        assert_eq!(quotient * divisor + remainder, dividend);

        // Direct floor checks.
        assert!(quotient * divisor <= dividend);
        assert!((quotient + U512::ONE) * divisor > dividend);
    }
}

#[test]
fn division_by_zero_error_formats() {
    assert_eq!(DivisionByZero.to_string(), "division by zero");
}
