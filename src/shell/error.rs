use thiserror::Error;

use crate::calculator::CalcError;

/// A shell command that could not be carried out.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CommandError {
    #[error("Unknown command: '{word}'")]
    UnknownCommand {
        word: String,
        suggestions: Vec<String>,
    },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("{command} takes {expected}")]
    WrongOperandCount {
        command: &'static str,
        expected: &'static str,
    },

    #[error("{0}")]
    Clipboard(String),

    #[error(transparent)]
    Calc(#[from] CalcError),
}
