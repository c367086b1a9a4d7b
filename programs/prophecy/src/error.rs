//! Error taxonomy shared by the engine and the instruction layer.
//!
//! Every variant is a deterministic validation failure: the instruction is
//! rejected before any account is written or any lamport moves.

use anchor_lang::prelude::*;

#[error_code]
pub enum ProphecyError {
    // Initialization
    #[msg("Name too long (max 32 characters)")]
    NameTooLong,
    #[msg("Stream link too long (max 256 characters)")]
    LinkTooLong,
    #[msg("Invalid price: initial liquidity must be positive and even")]
    InvalidPrice,
    #[msg("Invalid duration")]
    InvalidDuration,

    // Lifecycle
    #[msg("Stream is not active")]
    StreamNotActive,
    #[msg("Stream has ended")]
    StreamEnded,
    #[msg("Stream is still active")]
    StreamStillActive,
    #[msg("Stream has not ended yet")]
    StreamNotEnded,

    // Arguments
    #[msg("Invalid team ID")]
    InvalidTeam,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient shares to sell")]
    InsufficientShares,

    // Authorization
    #[msg("Unauthorized")]
    Unauthorized,

    // Arithmetic
    #[msg("Math overflow")]
    MathOverflow,

    // Settlement
    #[msg("No winner declared yet")]
    NoWinnerDeclared,
    #[msg("No winning shares")]
    NoWinningShares,
    #[msg("No payout available")]
    NoPayout,
    #[msg("Already claimed winnings")]
    AlreadyClaimed,
}
