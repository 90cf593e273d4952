//! Errors raised by calculator operations.

use thiserror::Error;

/// A failed calculator operation.
///
/// Whenever an operation returns one of these, both registers are left
/// exactly as they were before the call.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    /// The right-hand operand of a division or modulo was zero,
    /// or zero was raised to a negative power.
    #[error("Cannot divide by zero")]
    DivideByZero,
    /// The operand is outside the domain of the operation.
    #[error("{0}")]
    InvalidArgument(String),
}

impl CalcError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
