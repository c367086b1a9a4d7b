//! Emergency Withdrawal
//!
//! After a stream has been ended its authority may sweep the entire vault.
//! Unclaimed winnings are swept along with everything else.

use anchor_lang::prelude::*;

use crate::engine::settlement;
use crate::instructions::vault;
use crate::state::Stream;

/// Event emitted when the vault is swept
#[event]
pub struct EmergencyWithdrawn {
    pub stream_id: u64,
    pub authority: Pubkey,
    pub amount: u64,
}

#[derive(Accounts)]
#[instruction(stream_id: u64)]
pub struct EmergencyWithdraw<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [Stream::SEED, stream_id.to_le_bytes().as_ref()],
        bump = stream.bump,
    )]
    pub stream: Account<'info, Stream>,

    #[account(
        mut,
        seeds = [Stream::VAULT_SEED, stream_id.to_le_bytes().as_ref()],
        bump = stream.vault_bump,
    )]
    pub stream_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> EmergencyWithdraw<'info> {
    pub fn emergency_withdraw(&mut self) -> Result<u64> {
        let amount = settlement::emergency_withdraw(
            &self.stream,
            &self.authority.key(),
            self.stream_vault.lamports(),
        )?;

        vault::withdraw(
            &self.system_program,
            &self.stream_vault,
            self.authority.to_account_info(),
            &self.stream,
            amount,
        )?;

        emit!(EmergencyWithdrawn {
            stream_id: self.stream.stream_id,
            authority: self.authority.key(),
            amount,
        });

        msg!("Emergency withdrawal of {} lamports", amount);

        Ok(amount)
    }
}
