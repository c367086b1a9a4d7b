//! Buying and selling shares against the stream's constant-product pool.

use anchor_lang::prelude::*;

use crate::amm::fixed_point::{add, sub};
use crate::amm::ConstantProduct;
use crate::error::ProphecyError;
use crate::state::{Reserves, Side, Stream, UserPosition};

/// Result of a buy or sell, including the data audit logs need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeReceipt {
    pub side: Side,
    /// Lamports paid (buy) or shares returned (sell)
    pub amount_in: u64,
    /// Shares issued (buy) or lamports released (sell)
    pub amount_out: u64,
    pub reserves_before: Reserves,
    pub reserves_after: Reserves,
    /// Implied price of the traded side before the trade
    pub price_before: u64,
    pub price_after: u64,
}

/// Deposit `amount` lamports on `side_id` (1 or 2) for `user`.
///
/// Opens `position` if it has never been used. The caller is responsible for
/// moving `amount` into the stream vault.
pub fn buy(
    stream: &mut Stream,
    position: &mut UserPosition,
    user: Pubkey,
    side_id: u8,
    amount: u64,
    now: i64,
) -> Result<TradeReceipt> {
    stream.ensure_tradable(now)?;
    let side = Side::try_from(side_id)?;
    require!(amount > 0, ProphecyError::InvalidAmount);
    if position.is_open() {
        require_keys_eq!(position.user, user, ProphecyError::Unauthorized);
    }

    let reserves_before = stream.reserves();
    let price_before = stream.price(side)?;

    let (own, opposite) = stream.reserves_for(side);
    let swap = ConstantProduct::buy(own, opposite, amount)?;
    let shares_out = swap.amount_out;

    let price_after = ConstantProduct::price(swap.own_reserve, swap.opposite_reserve)?;
    let outstanding = add(stream.outstanding_shares(side), shares_out)?;
    let total_pool = add(stream.total_pool, amount)?;
    let held = add(position.shares(side), shares_out)?;
    let total_invested = add(position.total_invested, amount)?;

    // Commit
    stream.set_reserves_for(side, swap.own_reserve, swap.opposite_reserve);
    stream.set_outstanding_shares(side, outstanding);
    stream.total_pool = total_pool;

    if !position.is_open() {
        position.user = user;
        position.stream_id = stream.stream_id;
    }
    position.set_shares(side, held);
    position.total_invested = total_invested;

    Ok(TradeReceipt {
        side,
        amount_in: amount,
        amount_out: shares_out,
        reserves_before,
        reserves_after: stream.reserves(),
        price_before,
        price_after,
    })
}

/// Return `shares` of `side_id` to the pool for `user`.
///
/// The caller pays `amount_out` from the stream vault to the user. Buys round
/// the reserve up and sells round the payout down, so `k` never drops and the
/// reserves never sum below the initial liquidity. Deposits net of sells
/// therefore always cover the outstanding shares, so a sell cannot overdraw the
/// vault even though the initial liquidity was never deposited.
pub fn sell(
    stream: &mut Stream,
    position: &mut UserPosition,
    user: Pubkey,
    side_id: u8,
    shares: u64,
    now: i64,
) -> Result<TradeReceipt> {
    stream.ensure_tradable(now)?;
    let side = Side::try_from(side_id)?;
    require!(shares > 0, ProphecyError::InvalidAmount);
    if position.is_open() {
        require_keys_eq!(position.user, user, ProphecyError::Unauthorized);
    }
    require!(
        position.shares(side) >= shares,
        ProphecyError::InsufficientShares
    );

    let reserves_before = stream.reserves();
    let price_before = stream.price(side)?;

    let (own, opposite) = stream.reserves_for(side);
    let swap = ConstantProduct::sell(own, opposite, shares)?;

    let price_after = ConstantProduct::price(swap.own_reserve, swap.opposite_reserve)?;
    let outstanding = sub(stream.outstanding_shares(side), shares)?;
    let held = sub(position.shares(side), shares)?;

    // Commit
    stream.set_reserves_for(side, swap.own_reserve, swap.opposite_reserve);
    stream.set_outstanding_shares(side, outstanding);
    position.set_shares(side, held);

    Ok(TradeReceipt {
        side,
        amount_in: shares,
        amount_out: swap.amount_out,
        reserves_before,
        reserves_after: stream.reserves(),
        price_before,
        price_after,
    })
}
