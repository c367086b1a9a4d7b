pub mod emergency_withdraw;
pub mod end_stream;
pub mod initialize_stream;

pub use emergency_withdraw::*;
pub use end_stream::*;
pub use initialize_stream::*;
