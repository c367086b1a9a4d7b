//! Stream (market) state
//!
//! A stream is one two-sided event with a resolution deadline. It owns the
//! constant-product reserves used for live quotes and the share totals used
//! for pari-mutuel settlement.

use anchor_lang::prelude::*;

use crate::amm::ConstantProduct;
use crate::constants::{MAX_LINK_LEN, MAX_NAME_LEN};
use crate::error::ProphecyError;
use crate::state::UserPosition;

/// Individual stream account
///
/// Seeds: ["stream", stream_id.to_le_bytes()]
#[account]
#[derive(InitSpace, Debug)]
pub struct Stream {
    /// Only key allowed to end the stream or withdraw its vault
    pub authority: Pubkey,

    /// Unique stream identifier
    pub stream_id: u64,

    #[max_len(32)]
    pub side_a_name: String,

    #[max_len(32)]
    pub side_b_name: String,

    /// Virtual liquidity backing side A quotes
    pub side_a_reserve: u64,

    /// Virtual liquidity backing side B quotes
    pub side_b_reserve: u64,

    /// Side A shares currently held by users
    pub side_a_shares: u64,

    /// Side B shares currently held by users
    pub side_b_shares: u64,

    /// Gross lamports deposited by purchases. Sells never reduce it.
    pub total_pool: u64,

    pub start_time: i64,
    pub end_time: i64,
    pub is_active: bool,

    /// Set once, when the authority ends the stream
    pub winning_side: Outcome,

    #[max_len(256)]
    pub stream_link: String,

    pub bump: u8,
    pub vault_bump: u8,
}

impl Stream {
    pub const SEED: &'static [u8] = b"stream";
    pub const VAULT_SEED: &'static [u8] = b"stream_vault";

    /// Build a freshly initialized stream, validating the creation parameters.
    ///
    /// `initial_liquidity` is virtual: it is split evenly between the two
    /// reserves to seed the curve and is never deposited.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        authority: Pubkey,
        stream_id: u64,
        side_a_name: String,
        side_b_name: String,
        initial_liquidity: u64,
        duration: i64,
        stream_link: String,
        now: i64,
    ) -> Result<Self> {
        require!(side_a_name.len() <= MAX_NAME_LEN, ProphecyError::NameTooLong);
        require!(side_b_name.len() <= MAX_NAME_LEN, ProphecyError::NameTooLong);
        require!(stream_link.len() <= MAX_LINK_LEN, ProphecyError::LinkTooLong);
        require!(
            initial_liquidity > 0 && initial_liquidity % 2 == 0,
            ProphecyError::InvalidPrice
        );
        require!(duration > 0, ProphecyError::InvalidDuration);

        let end_time = now
            .checked_add(duration)
            .ok_or(ProphecyError::MathOverflow)?;
        let half = initial_liquidity / 2;

        Ok(Self {
            authority,
            stream_id,
            side_a_name,
            side_b_name,
            side_a_reserve: half,
            side_b_reserve: half,
            side_a_shares: 0,
            side_b_shares: 0,
            total_pool: 0,
            start_time: now,
            end_time,
            is_active: true,
            winning_side: Outcome::Undecided,
            stream_link,
            bump: 0,
            vault_bump: 0,
        })
    }

    /// Trading is open while the stream is active and the deadline has not passed.
    pub fn ensure_tradable(&self, now: i64) -> Result<()> {
        require!(self.is_active, ProphecyError::StreamNotActive);
        require!(now < self.end_time, ProphecyError::StreamEnded);
        Ok(())
    }

    pub fn ensure_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, ProphecyError::Unauthorized);
        Ok(())
    }

    /// `(own, opposite)` reserves as seen from `side`
    pub fn reserves_for(&self, side: Side) -> (u64, u64) {
        match side {
            Side::A => (self.side_a_reserve, self.side_b_reserve),
            Side::B => (self.side_b_reserve, self.side_a_reserve),
        }
    }

    pub fn reserves(&self) -> Reserves {
        Reserves {
            side_a: self.side_a_reserve,
            side_b: self.side_b_reserve,
        }
    }

    pub(crate) fn set_reserves_for(&mut self, side: Side, own: u64, opposite: u64) {
        match side {
            Side::A => {
                self.side_a_reserve = own;
                self.side_b_reserve = opposite;
            }
            Side::B => {
                self.side_b_reserve = own;
                self.side_a_reserve = opposite;
            }
        }
    }

    pub fn outstanding_shares(&self, side: Side) -> u64 {
        match side {
            Side::A => self.side_a_shares,
            Side::B => self.side_b_shares,
        }
    }

    pub(crate) fn set_outstanding_shares(&mut self, side: Side, shares: u64) {
        match side {
            Side::A => self.side_a_shares = shares,
            Side::B => self.side_b_shares = shares,
        }
    }

    /// Implied price of `side` (opposite reserve / own reserve, fixed point)
    pub fn price(&self, side: Side) -> Result<u64> {
        let (own, opposite) = self.reserves_for(side);
        ConstantProduct::price(own, opposite)
    }

    /// Value a sell of `shares` would release right now, without executing it.
    pub fn quote_sell(&self, side: Side, shares: u64) -> Result<u64> {
        let (own, opposite) = self.reserves_for(side);
        Ok(ConstantProduct::sell(own, opposite, shares)?.amount_out)
    }

    /// Unrealized value of a position if each side were sold on its own at
    /// current reserves.
    pub fn position_value(&self, position: &UserPosition) -> Result<u64> {
        let mut value: u64 = 0;
        for side in [Side::A, Side::B] {
            let held = position.shares(side);
            if held > 0 {
                value = value
                    .checked_add(self.quote_sell(side, held)?)
                    .ok_or(ProphecyError::MathOverflow)?;
            }
        }
        Ok(value)
    }
}

/// Snapshot of both reserves
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Reserves {
    pub side_a: u64,
    pub side_b: u64,
}

/// One of the two sides of a stream. Encoded on the wire as 1 (A) or 2 (B).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn id(self) -> u8 {
        match self {
            Side::A => 1,
            Side::B => 2,
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = anchor_lang::error::Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            1 => Ok(Side::A),
            2 => Ok(Side::B),
            _ => err!(ProphecyError::InvalidTeam),
        }
    }
}

/// Resolution of a stream. Borsh tags match the wire ids (0, 1, 2).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum Outcome {
    #[default]
    Undecided,
    SideA,
    SideB,
}

impl Outcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Undecided => None,
            Outcome::SideA => Some(Side::A),
            Outcome::SideB => Some(Side::B),
        }
    }

    pub fn id(self) -> u8 {
        self.winner().map_or(0, Side::id)
    }
}

impl From<Side> for Outcome {
    fn from(side: Side) -> Self {
        match side {
            Side::A => Outcome::SideA,
            Side::B => Outcome::SideB,
        }
    }
}
