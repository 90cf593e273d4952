//! A stateful calculator with a running accumulator and a single memory
//! register, plus the line-oriented shell that drives it.

pub mod calculator;
pub mod config;
pub mod shell;
