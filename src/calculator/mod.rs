//! Calculator engine.
//!
//! This module provides:
//! - The `Calculator` state machine (accumulator and memory register)
//! - Binary and unary operations with domain validation
//! - Result formatting and clipboard copying

mod clipboard;
mod engine;
mod error;
mod format;
mod ops;

pub use clipboard::copy_last_result;
pub use engine::Calculator;
pub use error::CalcError;
pub use format::{format_number, format_plain};
pub use ops::{BinaryOp, UnaryOp};
