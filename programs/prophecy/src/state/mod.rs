//! Account state for the prophecy program

pub mod stream;
pub mod user_position;

pub use stream::*;
pub use user_position::*;
