//! Winnings Claim
//!
//! After a stream is ended, holders of the winning side claim their
//! pro-rata share of everything ever deposited into the stream.
//!
//! ```text
//! payout = total_pool × user_winning_shares / outstanding_winning_shares
//! ```
//!
//! For example, with a 10 SOL pool and 400 of 1000 outstanding winning
//! shares, the holder receives 4 SOL no matter what they paid.

use anchor_lang::prelude::*;

use crate::engine::settlement;
use crate::instructions::vault;
use crate::state::{Stream, UserPosition};

/// Event emitted when winnings are claimed
#[event]
pub struct WinningsClaimed {
    pub stream_id: u64,
    pub user: Pubkey,
    pub winning_side: u8,
    pub shares: u64,
    pub payout: u64,
}

#[derive(Accounts)]
#[instruction(stream_id: u64)]
pub struct ClaimWinnings<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [Stream::SEED, stream_id.to_le_bytes().as_ref()],
        bump = stream.bump,
    )]
    pub stream: Account<'info, Stream>,

    #[account(
        mut,
        seeds = [UserPosition::SEED, stream_id.to_le_bytes().as_ref(), user.key().as_ref()],
        bump = user_position.bump,
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

impl<'info> ClaimWinnings<'info> {
    pub fn claim_winnings(&mut self) -> Result<u64> {
        let receipt = settlement::claim(
            &self.stream,
            &mut self.user_position,
            &self.user.key(),
        )?;

        vault::withdraw(
            &self.system_program,
            &self.stream_vault,
            self.user.to_account_info(),
            &self.stream,
            receipt.payout,
        )?;

        emit!(WinningsClaimed {
            stream_id: self.stream.stream_id,
            user: self.user.key(),
            winning_side: receipt.winning_side.id(),
            shares: receipt.shares,
            payout: receipt.payout,
        });

        msg!("Claimed {} lamports for {} shares", receipt.payout, receipt.shares);

        Ok(receipt.payout)
    }
}
