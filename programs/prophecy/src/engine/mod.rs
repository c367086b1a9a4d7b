//! # Market Engine
//!
//! Pure state transitions over [`Stream`](crate::state::Stream) and
//! [`UserPosition`](crate::state::UserPosition). The engine never touches
//! lamports or the clock: instruction handlers pass `now` in and move value
//! according to the receipt that comes back.
//!
//! Each operation validates and computes every new value before writing a
//! single field, so a rejected call leaves both records exactly as they were.

pub mod settlement;
pub mod trading;

pub use settlement::*;
pub use trading::*;
