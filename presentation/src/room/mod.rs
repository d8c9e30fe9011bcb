//! Interactive room REPL

pub mod command;
pub mod repl;

pub use command::{Command, VoteTarget};
pub use repl::RoomRepl;
