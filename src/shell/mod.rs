//! Line-oriented shell over the calculator engine.
//!
//! Each line is a command word followed by up to two numbers. Words are
//! resolved through an alias table; unknown words get fuzzy suggestions.

mod command;
mod error;
mod parse;
mod session;
mod suggest;

pub use command::Command;
pub use error::CommandError;
pub use session::{Reply, Shell, Summary};
