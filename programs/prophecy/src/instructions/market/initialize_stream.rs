//! Stream Creation
//!
//! The authority opens a stream with two named sides, a virtual liquidity
//! amount that seeds both reserves, and a duration after which trading
//! closes and the stream can be ended.
//!
//! The vault PDA is topped up to the rent-exempt minimum here so that
//! payouts never strand it below the rent floor.

use anchor_lang::prelude::*;

use crate::instructions::vault;
use crate::state::{Side, Stream};

/// Event emitted when a stream is created
#[event]
pub struct StreamInitialized {
    pub stream_id: u64,
    pub authority: Pubkey,
    pub side_a_name: String,
    pub side_b_name: String,
    pub initial_liquidity: u64,
    pub initial_price: u64,
    pub end_time: i64,
    pub stream_link: String,
}

#[derive(Accounts)]
#[instruction(stream_id: u64)]
pub struct InitializeStream<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + Stream::INIT_SPACE,
        seeds = [Stream::SEED, stream_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub stream: Account<'info, Stream>,

    /// Lamport custody for this stream
    #[account(
        mut,
        seeds = [Stream::VAULT_SEED, stream_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub stream_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeStream<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_stream(
        &mut self,
        stream_id: u64,
        side_a_name: String,
        side_b_name: String,
        initial_liquidity: u64,
        stream_duration: i64,
        stream_link: String,
        bumps: &InitializeStreamBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;

        let mut stream = Stream::new(
            self.authority.key(),
            stream_id,
            side_a_name,
            side_b_name,
            initial_liquidity,
            stream_duration,
            stream_link,
            clock.unix_timestamp,
        )?;
        stream.bump = bumps.stream;
        stream.vault_bump = bumps.stream_vault;
        self.stream.set_inner(stream);

        let rent_floor = Rent::get()?.minimum_balance(0);
        let shortfall = rent_floor.saturating_sub(self.stream_vault.lamports());
        vault::deposit(
            &self.system_program,
            &self.authority,
            &self.stream_vault,
            shortfall,
        )?;

        emit!(StreamInitialized {
            stream_id,
            authority: self.authority.key(),
            side_a_name: self.stream.side_a_name.clone(),
            side_b_name: self.stream.side_b_name.clone(),
            initial_liquidity,
            initial_price: self.stream.price(Side::A)?,
            end_time: self.stream.end_time,
            stream_link: self.stream.stream_link.clone(),
        });

        msg!("Stream {} initialized", stream_id);
        msg!(
            "{} vs {}, ends at {}",
            self.stream.side_a_name,
            self.stream.side_b_name,
            self.stream.end_time
        );

        Ok(())
    }
}
