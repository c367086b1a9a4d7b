//! Stream Resolution
//!
//! Once `end_time` has passed, the stream authority declares the winning
//! side. This closes trading for good and opens claims.

use anchor_lang::prelude::*;

use crate::engine::settlement;
use crate::state::Stream;

/// Event emitted when a stream is ended
#[event]
pub struct StreamEnded {
    pub stream_id: u64,
    pub winning_side: u8,
    pub total_pool: u64,
    pub side_a_shares: u64,
    pub side_b_shares: u64,
    pub final_side_a_price: u64,
    pub final_side_b_price: u64,
}

#[derive(Accounts)]
#[instruction(stream_id: u64)]
pub struct EndStream<'info> {
    /// Must match `stream.authority`; checked by the engine
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Stream::SEED, stream_id.to_le_bytes().as_ref()],
        bump = stream.bump,
    )]
    pub stream: Account<'info, Stream>,
}

impl<'info> EndStream<'info> {
    pub fn end_stream(&mut self, winning_side: u8) -> Result<()> {
        let clock = Clock::get()?;

        let resolution = settlement::end_stream(
            &mut self.stream,
            &self.authority.key(),
            winning_side,
            clock.unix_timestamp,
        )?;

        emit!(StreamEnded {
            stream_id: self.stream.stream_id,
            winning_side: self.stream.winning_side.id(),
            total_pool: resolution.total_pool,
            side_a_shares: resolution.side_a_shares,
            side_b_shares: resolution.side_b_shares,
            final_side_a_price: resolution.final_side_a_price,
            final_side_b_price: resolution.final_side_b_price,
        });

        msg!(
            "Stream {} ended: side {:?} wins",
            self.stream.stream_id,
            resolution.winning_side
        );

        Ok(())
    }
}
