//! Share Trading
//!
//! Buying and selling shares of either side against the stream's
//! constant-product pool while the stream is live.

use anchor_lang::prelude::*;

use crate::engine::trading::{self, TradeReceipt};
use crate::instructions::vault;
use crate::state::{Stream, UserPosition};

/// Event emitted when shares are bought
#[event]
pub struct SharesPurchased {
    pub stream_id: u64,
    pub user: Pubkey,
    pub side: u8,
    pub sol_spent: u64,
    pub shares_received: u64,
    pub price_before: u64,
    pub price_after: u64,
    pub side_a_reserve_before: u64,
    pub side_b_reserve_before: u64,
    pub side_a_reserve_after: u64,
    pub side_b_reserve_after: u64,
}

/// Event emitted when shares are sold
#[event]
pub struct SharesSold {
    pub stream_id: u64,
    pub user: Pubkey,
    pub side: u8,
    pub shares_sold: u64,
    pub sol_received: u64,
    pub price_before: u64,
    pub price_after: u64,
    pub side_a_reserve_before: u64,
    pub side_b_reserve_before: u64,
    pub side_a_reserve_after: u64,
    pub side_b_reserve_after: u64,
}

/// Accounts for trading operations
#[derive(Accounts)]
#[instruction(stream_id: u64)]
pub struct Trade<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [Stream::SEED, stream_id.to_le_bytes().as_ref()],
        bump = stream.bump,
    )]
    pub stream: Account<'info, Stream>,

    /// Opened on the user's first purchase
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserPosition::INIT_SPACE,
        seeds = [UserPosition::SEED, stream_id.to_le_bytes().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub user_position: Account<'info, UserPosition>,

    #[account(
        mut,
        seeds = [Stream::VAULT_SEED, stream_id.to_le_bytes().as_ref()],
        bump = stream.vault_bump,
    )]
    pub stream_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Trade<'info> {
    /// Buy shares of `side` with `amount` lamports. Returns shares received.
    pub fn buy_shares(&mut self, side: u8, amount: u64, bumps: &TradeBumps) -> Result<u64> {
        let clock = Clock::get()?;

        let receipt = trading::buy(
            &mut self.stream,
            &mut self.user_position,
            self.user.key(),
            side,
            amount,
            clock.unix_timestamp,
        )?;
        self.user_position.bump = bumps.user_position;

        vault::deposit(&self.system_program, &self.user, &self.stream_vault, amount)?;

        emit!(SharesPurchased {
            stream_id: self.stream.stream_id,
            user: self.user.key(),
            side: receipt.side.id(),
            sol_spent: receipt.amount_in,
            shares_received: receipt.amount_out,
            price_before: receipt.price_before,
            price_after: receipt.price_after,
            side_a_reserve_before: receipt.reserves_before.side_a,
            side_b_reserve_before: receipt.reserves_before.side_b,
            side_a_reserve_after: receipt.reserves_after.side_a,
            side_b_reserve_after: receipt.reserves_after.side_b,
        });

        self.log_trade("Bought", &receipt);

        Ok(receipt.amount_out)
    }

    /// Sell `shares` of `side` back to the pool. Returns lamports received.
    pub fn sell_shares(&mut self, side: u8, shares: u64) -> Result<u64> {
        let clock = Clock::get()?;

        let receipt = trading::sell(
            &mut self.stream,
            &mut self.user_position,
            self.user.key(),
            side,
            shares,
            clock.unix_timestamp,
        )?;

        vault::withdraw(
            &self.system_program,
            &self.stream_vault,
            self.user.to_account_info(),
            &self.stream,
            receipt.amount_out,
        )?;

        emit!(SharesSold {
            stream_id: self.stream.stream_id,
            user: self.user.key(),
            side: receipt.side.id(),
            shares_sold: receipt.amount_in,
            sol_received: receipt.amount_out,
            price_before: receipt.price_before,
            price_after: receipt.price_after,
            side_a_reserve_before: receipt.reserves_before.side_a,
            side_b_reserve_before: receipt.reserves_before.side_b,
            side_a_reserve_after: receipt.reserves_after.side_a,
            side_b_reserve_after: receipt.reserves_after.side_b,
        });

        self.log_trade("Sold", &receipt);

        Ok(receipt.amount_out)
    }

    fn log_trade(&self, action: &str, receipt: &TradeReceipt) {
        msg!(
            "{} on stream {} side {}: in {} out {}",
            action,
            self.stream.stream_id,
            receipt.side.id(),
            receipt.amount_in,
            receipt.amount_out
        );
        msg!(
            "Reserves A/B: {}/{}",
            receipt.reserves_after.side_a,
            receipt.reserves_after.side_b
        );
    }
}
