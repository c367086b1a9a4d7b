//! Protocol-wide constants
//!
//! Every stream carries its own authority and parameters, so the only
//! shared configuration is fixed at compile time.

/// Fixed-point scale: one whole unit (share or SOL) is `10^9` atomic units.
pub const PRECISION: u64 = 1_000_000_000;

/// Maximum byte length of a side's display name.
pub const MAX_NAME_LEN: usize = 32;

/// Maximum byte length of the stream link.
pub const MAX_LINK_LEN: usize = 256;
