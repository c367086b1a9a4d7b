//! Instruction handlers for the prophecy program
//!
//! Each instruction binds the engine to the runtime:
//! - `market` - Create, end and drain a stream (authority)
//! - `trade` - Buy/sell shares while the stream is live
//! - `claim` - Collect winnings after resolution
//!
//! Handlers read the clock, call into [`crate::engine`], move lamports
//! through the stream vault and emit one event per operation.

pub mod claim;
pub mod market;
pub mod trade;
pub mod vault;

pub use claim::*;
pub use market::*;
pub use trade::*;
