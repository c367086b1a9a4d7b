//! Checked fixed-point arithmetic.
//!
//! Amounts are `u64` scaled by [`PRECISION`](crate::constants::PRECISION).
//! Every operation fails with [`ProphecyError::MathOverflow`] instead of
//! wrapping, and division truncates toward zero.

use anchor_lang::prelude::*;

use crate::error::ProphecyError;

pub fn add(a: u64, b: u64) -> Result<u64> {
    Ok(a.checked_add(b).ok_or(ProphecyError::MathOverflow)?)
}

pub fn sub(a: u64, b: u64) -> Result<u64> {
    Ok(a.checked_sub(b).ok_or(ProphecyError::MathOverflow)?)
}

pub fn mul(a: u64, b: u64) -> Result<u64> {
    Ok(a.checked_mul(b).ok_or(ProphecyError::MathOverflow)?)
}

pub fn div(a: u64, b: u64) -> Result<u64> {
    Ok(a.checked_div(b).ok_or(ProphecyError::MathOverflow)?)
}

/// `a * b / c` through a `u128` intermediate, floored.
///
/// The product of two `u64` values always fits in `u128`, so only a zero
/// divisor or a quotient above `u64::MAX` can fail.
pub fn mul_div(a: u64, b: u64, c: u64) -> Result<u64> {
    let quotient = (a as u128)
        .checked_mul(b as u128)
        .ok_or(ProphecyError::MathOverflow)?
        .checked_div(c as u128)
        .ok_or(ProphecyError::MathOverflow)?;

    Ok(u64::try_from(quotient).map_err(|_| ProphecyError::MathOverflow)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_overflow(result: Result<u64>) {
        let expected: anchor_lang::error::Error = ProphecyError::MathOverflow.into();
        assert_eq!(result.unwrap_err(), expected);
    }

    #[test]
    fn test_basic_ops() {
        assert_eq!(add(2, 3).unwrap(), 5);
        assert_eq!(sub(5, 3).unwrap(), 2);
        assert_eq!(mul(4, 3).unwrap(), 12);
        assert_eq!(div(7, 2).unwrap(), 3); // truncates
    }

    #[test]
    fn test_overflow_and_underflow_fail() {
        assert_overflow(add(u64::MAX, 1));
        assert_overflow(sub(0, 1));
        assert_overflow(mul(u64::MAX, 2));
        assert_overflow(div(1, 0));
    }

    #[test]
    fn test_mul_div_uses_wide_intermediate() {
        // u64::MAX * 2 overflows u64 but the quotient fits
        assert_eq!(mul_div(u64::MAX, 2, 4).unwrap(), u64::MAX / 2);
        assert_eq!(mul_div(10, 10, 3).unwrap(), 33);
    }

    #[test]
    fn test_mul_div_rejects_zero_divisor_and_wide_quotient() {
        assert_overflow(mul_div(1, 1, 0));
        assert_overflow(mul_div(u64::MAX, u64::MAX, 1));
    }
}
