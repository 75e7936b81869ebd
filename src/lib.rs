//! Turn VirtualDJ playlist exports into track listings for chat.

pub mod process;
pub mod prompt;
pub mod sink;
pub mod types;
