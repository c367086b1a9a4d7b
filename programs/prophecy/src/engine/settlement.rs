//! Resolution and pari-mutuel payout.
//!
//! Live quotes come from the constant-product pool, but final payouts ignore
//! the price a user paid: the whole historical pool is split among holders
//! of the winning side in proportion to the shares they still hold.
//!
//! ```text
//! payout = total_pool × user_winning_shares / outstanding_winning_shares
//! ```

use anchor_lang::prelude::*;

use crate::amm::fixed_point::mul_div;
use crate::error::ProphecyError;
use crate::state::{Side, Stream, UserPosition};

/// Snapshot of a stream at the moment it was ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub winning_side: Side,
    pub total_pool: u64,
    pub side_a_shares: u64,
    pub side_b_shares: u64,
    pub final_side_a_price: u64,
    pub final_side_b_price: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub winning_side: Side,
    pub shares: u64,
    pub payout: u64,
}

/// Close trading and record the winner. Authority only, after `end_time`.
pub fn end_stream(
    stream: &mut Stream,
    caller: &Pubkey,
    winning_side_id: u8,
    now: i64,
) -> Result<Resolution> {
    stream.ensure_authority(caller)?;
    require!(stream.is_active, ProphecyError::StreamNotActive);
    require!(now >= stream.end_time, ProphecyError::StreamNotEnded);
    let winning_side = Side::try_from(winning_side_id)?;

    let final_side_a_price = stream.price(Side::A)?;
    let final_side_b_price = stream.price(Side::B)?;

    stream.is_active = false;
    stream.winning_side = winning_side.into();

    Ok(Resolution {
        winning_side,
        total_pool: stream.total_pool,
        side_a_shares: stream.side_a_shares,
        side_b_shares: stream.side_b_shares,
        final_side_a_price,
        final_side_b_price,
    })
}

/// Pro-rata share of the pool owed for `shares` of `side` if it wins.
pub fn payout_for(stream: &Stream, side: Side, shares: u64) -> Result<u64> {
    let outstanding = stream.outstanding_shares(side);
    require!(outstanding > 0, ProphecyError::NoPayout);
    mul_div(stream.total_pool, shares, outstanding)
}

/// Settle `position` against a resolved stream.
///
/// Marks the position claimed; the caller pays `payout` from the vault.
/// Shares are left in place so the position remains an audit record.
pub fn claim(stream: &Stream, position: &mut UserPosition, user: &Pubkey) -> Result<ClaimReceipt> {
    require!(!stream.is_active, ProphecyError::StreamStillActive);
    let winning_side = stream
        .winning_side
        .winner()
        .ok_or(ProphecyError::NoWinnerDeclared)?;
    if position.is_open() {
        require_keys_eq!(position.user, *user, ProphecyError::Unauthorized);
    }
    require!(!position.has_claimed, ProphecyError::AlreadyClaimed);

    let shares = position.shares(winning_side);
    require!(shares > 0, ProphecyError::NoWinningShares);

    let payout = payout_for(stream, winning_side, shares)?;
    require!(payout > 0, ProphecyError::NoPayout);

    position.has_claimed = true;

    Ok(ClaimReceipt {
        winning_side,
        shares,
        payout,
    })
}

/// Authorize draining the whole vault to the authority once trading is over.
///
/// This does not wait for winners to claim: whatever is still owed to them
/// leaves with the rest of the balance.
pub fn emergency_withdraw(stream: &Stream, caller: &Pubkey, vault_balance: u64) -> Result<u64> {
    stream.ensure_authority(caller)?;
    require!(!stream.is_active, ProphecyError::StreamStillActive);
    Ok(vault_balance)
}
