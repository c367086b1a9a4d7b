//! Per-user position in a stream

use anchor_lang::prelude::*;

use crate::state::Side;

/// A user's holdings in one stream
///
/// Seeds: ["user_position", stream_id.to_le_bytes(), user]
///
/// Created on the user's first purchase and never closed, so claimed
/// positions stay on-chain as an audit record.
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct UserPosition {
    pub user: Pubkey,
    pub stream_id: u64,
    pub side_a_shares: u64,
    pub side_b_shares: u64,

    /// Lamports spent on purchases. Selling does not reduce it.
    pub total_invested: u64,

    pub has_claimed: bool,
    pub bump: u8,
}

impl UserPosition {
    pub const SEED: &'static [u8] = b"user_position";

    /// A zeroed account fresh from `init_if_needed` has no owner yet.
    pub fn is_open(&self) -> bool {
        self.user != Pubkey::default()
    }

    pub fn shares(&self, side: Side) -> u64 {
        match side {
            Side::A => self.side_a_shares,
            Side::B => self.side_b_shares,
        }
    }

    pub(crate) fn set_shares(&mut self, side: Side, shares: u64) {
        match side {
            Side::A => self.side_a_shares = shares,
            Side::B => self.side_b_shares = shares,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_position_is_not_open() {
        let mut position = UserPosition::default();
        assert!(!position.is_open());

        position.user = Pubkey::new_unique();
        assert!(position.is_open());
    }

    #[test]
    fn test_shares_by_side() {
        let mut position = UserPosition::default();
        position.set_shares(Side::A, 7);
        position.set_shares(Side::B, 3);

        assert_eq!(position.shares(Side::A), 7);
        assert_eq!(position.shares(Side::B), 3);
    }
}
