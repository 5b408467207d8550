//! Integer arithmetic for pool accounting.
//!
//! Everything here is pure and rounds down. The pool never rounds in the
//! user's favor.

use ethnum::U256;

use crate::errors::AmmError;

/// Largest `r` such that `r * r <= x`, by Newton's method on integers.
///
/// Used for the first-deposit share calculation only.
pub fn integer_sqrt(x: u128) -> u128 {
    if x < 2 {
        return x;
    }
    // Initial guess: 2^ceil(bits/2) >= sqrt(x); iterates strictly downward.
    let bits = 128 - x.leading_zeros();
    let mut r = 1u128 << bits.div_ceil(2);
    loop {
        let next = (r + x / r) / 2;
        if next >= r {
            return r;
        }
        r = next;
    }
}

/// `floor(a * b / denom)` through a 256-bit intermediate.
pub fn mul_div(a: u128, b: u128, denom: u128) -> Result<u128, AmmError> {
    if denom == 0 {
        return Err(AmmError::DivisionByZero);
    }
    // Two u128 factors cannot overflow a U256 product.
    let wide = <U256>::from(a) * <U256>::from(b);
    let (hi, lo) = (wide / <U256>::from(denom)).into_words();
    if hi != 0 {
        return Err(AmmError::ArithmeticOverflow);
    }
    Ok(lo)
}
