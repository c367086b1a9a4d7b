//! # Prophecy: Live-Stream Prediction Markets
//!
//! Viewers of a live event back one of two sides, trade their position
//! while the stream runs, and split the pot when it ends.
//!
//! ## How it works
//! - **Trading** prices each side with a constant-product pool over two
//!   virtual reserves. Buying a side makes it scarcer and pricier.
//! - **Settlement** is pari-mutuel: every lamport ever deposited is split
//!   among holders of the winning side by share count, regardless of the
//!   price they paid.
//!
//! Each stream carries its own authority, who ends it and picks the winner.

use anchor_lang::prelude::*;

pub mod amm;
pub mod constants;
pub mod engine;
pub mod error;
pub mod instructions;
pub mod state;

pub use amm::*;
pub use instructions::*;
pub use state::*;

// Replace with your deployed program ID
declare_id!("7Z3EDnUXfjLqN2SkkuEYyX6uNhmGQ9HWvJUXRwr9HKcd");

#[program]
pub mod prophecy {
    use super::*;

    /// Open a stream. `initial_liquidity` must be even and is split
    /// between the two virtual reserves.
    pub fn initialize_stream(
        ctx: Context<InitializeStream>,
        stream_id: u64,
        side_a_name: String,
        side_b_name: String,
        initial_liquidity: u64,
        stream_duration: i64,
        stream_link: String,
    ) -> Result<()> {
        ctx.accounts.initialize_stream(
            stream_id,
            side_a_name,
            side_b_name,
            initial_liquidity,
            stream_duration,
            stream_link,
            &ctx.bumps,
        )
    }

    /// Buy shares of side 1 (A) or 2 (B) with `amount` lamports
    pub fn purchase_shares(
        ctx: Context<Trade>,
        _stream_id: u64,
        side: u8,
        amount: u64,
    ) -> Result<u64> {
        ctx.accounts.buy_shares(side, amount, &ctx.bumps)
    }

    /// Sell shares back to the pool
    pub fn sell_shares(
        ctx: Context<Trade>,
        _stream_id: u64,
        side: u8,
        shares: u64,
    ) -> Result<u64> {
        ctx.accounts.sell_shares(side, shares)
    }

    /// End the stream and declare the winning side (authority only)
    pub fn end_stream(ctx: Context<EndStream>, _stream_id: u64, winning_side: u8) -> Result<()> {
        ctx.accounts.end_stream(winning_side)
    }

    /// Claim the caller's share of the pool
    pub fn claim_winnings(ctx: Context<ClaimWinnings>, _stream_id: u64) -> Result<u64> {
        ctx.accounts.claim_winnings()
    }

    /// Sweep the vault of an ended stream to its authority
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, _stream_id: u64) -> Result<u64> {
        ctx.accounts.emergency_withdraw()
    }
}
