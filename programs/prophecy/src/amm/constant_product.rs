//! # Constant-Product Swap
//!
//! Each side of a stream has a virtual reserve. Buying a side deposits value
//! into the *opposite* reserve and takes shares out of the chosen one, so the
//! chosen side gets scarcer and its price rises.
//!
//! ## Buy
//!
//! ```text
//! 1. k        = own × opposite
//! 2. opposite' = opposite + amount_in
//! 3. own'      = ceil(k / opposite')
//! 4. shares    = own - own'
//! ```
//!
//! Rounding `own'` up issues `floor(own × amount_in / opposite')` shares, so
//! selling them straight back (`own'' = own`) returns at most `amount_in`.
//!
//! ## Sell
//!
//! ```text
//! 1. own'      = own + shares_in
//! 2. out       = floor(shares_in × opposite / own')
//! 3. opposite' = opposite - out
//! ```
//!
//! `out < opposite` whenever `own > 0`, so a sell can never empty a reserve.

use anchor_lang::prelude::*;

use super::fixed_point::{add, mul_div, sub};
use crate::constants::PRECISION;
use crate::error::ProphecyError;

/// Reserves of a pool after a swap, seen from the side being traded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapResult {
    /// New reserve of the traded side
    pub own_reserve: u64,
    /// New reserve of the opposite side
    pub opposite_reserve: u64,
    /// Shares issued (buy) or value released (sell)
    pub amount_out: u64,
}

/// Constant-product pool math over a pair of reserves.
pub struct ConstantProduct;

impl ConstantProduct {
    /// Shares issued for depositing `amount_in` on the side whose reserve is `own_reserve`.
    ///
    /// # Example
    /// ```ignore
    /// // 50/50 pool, deposit 5 on side A
    /// let swap = ConstantProduct::buy(50, 50, 5)?;
    /// // own' = ceil(2500 / 55) = 46, shares = 4
    /// ```
    pub fn buy(own_reserve: u64, opposite_reserve: u64, amount_in: u64) -> Result<SwapResult> {
        require!(
            own_reserve > 0 && opposite_reserve > 0,
            ProphecyError::MathOverflow
        );
        require!(amount_in > 0, ProphecyError::InvalidAmount);

        let k = (own_reserve as u128) * (opposite_reserve as u128);
        let new_opposite = add(opposite_reserve, amount_in)?;
        // 0 < ceil(k / new_opposite) <= own_reserve, so the cast cannot truncate
        let new_own = k.div_ceil(new_opposite as u128) as u64;

        let shares_out = sub(own_reserve, new_own)?;
        // A deposit too small to buy one atomic share
        require!(shares_out > 0, ProphecyError::InvalidAmount);

        Ok(SwapResult {
            own_reserve: new_own,
            opposite_reserve: new_opposite,
            amount_out: shares_out,
        })
    }

    /// Value released for returning `shares_in` of the side whose reserve is `own_reserve`.
    pub fn sell(own_reserve: u64, opposite_reserve: u64, shares_in: u64) -> Result<SwapResult> {
        require!(
            own_reserve > 0 && opposite_reserve > 0,
            ProphecyError::MathOverflow
        );
        require!(shares_in > 0, ProphecyError::InvalidAmount);

        let new_own = add(own_reserve, shares_in)?;
        let amount_out = mul_div(shares_in, opposite_reserve, new_own)?;
        let new_opposite = sub(opposite_reserve, amount_out)?;

        require!(new_opposite > 0, ProphecyError::MathOverflow);

        Ok(SwapResult {
            own_reserve: new_own,
            opposite_reserve: new_opposite,
            amount_out,
        })
    }

    /// Implied price of a side: `opposite / own` as a fixed-point ratio.
    ///
    /// `PRECISION` means parity. The value is a ratio, not a probability.
    pub fn price(own_reserve: u64, opposite_reserve: u64) -> Result<u64> {
        require!(own_reserve > 0, ProphecyError::MathOverflow);
        mul_div(opposite_reserve, PRECISION, own_reserve)
    }
}
