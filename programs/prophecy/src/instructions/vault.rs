//! Lamport custody for a stream.
//!
//! The vault is a system-owned PDA, so deposits are plain transfers and
//! payouts are transfers signed with the vault seeds.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::state::Stream;

/// Move `amount` lamports from a signer into the vault.
pub fn deposit<'info>(
    system_program: &Program<'info, System>,
    from: &Signer<'info>,
    vault: &SystemAccount<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    transfer(
        CpiContext::new(
            system_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: vault.to_account_info(),
            },
        ),
        amount,
    )
}

/// Pay `amount` lamports out of the vault of `stream`.
pub fn withdraw<'info>(
    system_program: &Program<'info, System>,
    vault: &SystemAccount<'info>,
    to: AccountInfo<'info>,
    stream: &Stream,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let stream_id = stream.stream_id.to_le_bytes();
    let bump = [stream.vault_bump];
    let vault_seeds: [&[u8]; 3] = [Stream::VAULT_SEED, &stream_id, &bump];
    let signer_seeds = &[&vault_seeds[..]];

    transfer(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            Transfer {
                from: vault.to_account_info(),
                to,
            },
            signer_seeds,
        ),
        amount,
    )
}
