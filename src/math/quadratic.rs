//! Fixed-point quadratic root finding.
//!
//! Solves `a·x² + b·x + c = 0` for coefficients given as 27-decimal fixed
//! point integers, the representation the on-chain cost-of-attack contracts
//! use. Only the larger root is returned; it is the point where the attack
//! cost curve crosses zero and must not be negative.

use alloy::primitives::{I256, U256};
use eyre::{bail, eyre, Result};
use log::debug;

/// Decimal places of the fixed point representation
pub const SCALE_DECIMALS: u32 = 27;

/// `10^SCALE_DECIMALS` as a signed 256-bit integer
fn scale() -> Result<I256> {
    Ok(I256::try_from(10_i128.pow(SCALE_DECIMALS))?)
}

/// Parses a coefficient the way a Solidity `int128` arrives on the command line.
///
/// Unsigned decimals are reinterpreted from their low 128 bits as two's
/// complement, so `2^128 - 1` reads as `-1`. Negative decimals must fit in
/// an `i128`.
///
/// # Errors
/// * If the text is not a decimal integer
#[allow(clippy::cast_possible_wrap)]
pub fn parse_int128(text: &str) -> Result<I256> {
    let text = text.trim();
    let value = if text.starts_with('-') {
        text.parse::<i128>()
            .map_err(|e| eyre!("invalid coefficient `{text}`: {e}"))?
    } else {
        let unsigned = U256::from_str_radix(text, 10)
            .map_err(|e| eyre!("invalid coefficient `{text}`: {e}"))?;
        let low = u128::try_from(unsigned & U256::from(u128::MAX))?;
        low as i128
    };
    Ok(I256::try_from(value)?)
}

/// `a · b` in fixed point
fn mul_fixed(a: I256, b: I256) -> Result<I256> {
    a.checked_mul(b)
        .and_then(|product| product.checked_div(scale().ok()?))
        .ok_or_else(|| eyre!("fixed point overflow in {a} * {b}"))
}

/// `a / b` in fixed point
fn div_fixed(a: I256, b: I256) -> Result<I256> {
    if b.is_zero() {
        bail!("fixed point division by zero");
    }
    a.checked_mul(scale()?)
        .and_then(|scaled| scaled.checked_div(b))
        .ok_or_else(|| eyre!("fixed point overflow in {a} / {b}"))
}

/// Square root in fixed point, rounded down.
///
/// Computed as the integer square root of `value · SCALE`, which is exact for
/// every non-negative input, including values below one.
///
/// # Errors
/// * If `value` is negative
/// * If `value · SCALE` overflows
pub fn sqrt_fixed(value: I256) -> Result<I256> {
    if value.is_negative() {
        bail!("Cannot take the square root of a negative number");
    }
    let radicand = value
        .checked_mul(scale()?)
        .ok_or_else(|| eyre!("fixed point overflow in sqrt({value})"))?;
    Ok(isqrt(radicand))
}

/// Integer square root of a non-negative value (Newton's method from above)
fn isqrt(n: I256) -> I256 {
    let two = I256::ONE + I256::ONE;
    if n < two {
        return n;
    }

    let mut z = n;
    let mut x = n / two + I256::ONE;
    while x < z {
        z = x;
        x = (n / x + x) / two;
    }
    z
}

/// Largest root of `a·x² + b·x + c` in 27-decimal fixed point.
///
/// # Errors
/// * If `a` is zero
/// * If the discriminant is negative (no real roots)
/// * If the larger root is negative
/// * If any intermediate product overflows 256 bits
pub fn largest_root(a: I256, b: I256, c: I256) -> Result<I256> {
    if a.is_zero() {
        bail!("leading coefficient must not be zero");
    }

    let overflow = || eyre!("fixed point overflow");
    let four = I256::try_from(4_i8)?;
    let two = I256::try_from(2_i8)?;

    let b_squared = mul_fixed(b, b)?;
    let ac4 = mul_fixed(a, c)?.checked_mul(four).ok_or_else(overflow)?;
    let discriminant = b_squared.checked_sub(ac4).ok_or_else(overflow)?;
    debug!("math::quadratic: b^2 = {b_squared}, 4ac = {ac4}, discriminant = {discriminant}");

    if discriminant.is_negative() {
        bail!("discriminant should not be negative");
    }

    let sqrt_discriminant = sqrt_fixed(discriminant)?;
    let minus_b = b.checked_neg().ok_or_else(overflow)?;
    let two_a = a.checked_mul(two).ok_or_else(overflow)?;

    let root1 = div_fixed(
        minus_b.checked_sub(sqrt_discriminant).ok_or_else(overflow)?,
        two_a,
    )?;
    let root2 = div_fixed(
        minus_b.checked_add(sqrt_discriminant).ok_or_else(overflow)?,
        two_a,
    )?;
    debug!("math::quadratic: roots {root1}, {root2}");

    let root = root1.max(root2);
    if root.is_negative() {
        bail!("the x-intercept should not be negative");
    }

    Ok(root)
}
