//! The calculator engine: an accumulator plus a single memory register.

use super::error::CalcError;
use super::ops::{BinaryOp, UnaryOp};

/// Stateful calculator.
///
/// `last_result` is the accumulator: every successful arithmetic or
/// scientific call writes its result there. `memory` is only touched by the
/// `memory_*` operations. A failed call leaves both registers unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Calculator {
    last_result: f64,
    memory: f64,
}

impl Calculator {
    /// Create a calculator with both registers at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current accumulator value.
    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    /// The current memory register value.
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Compute `lhs op rhs`. The accumulator is only written.
    pub fn apply(&mut self, op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let result = op.compute(lhs, rhs)?;
        Ok(self.commit(result))
    }

    /// Compute `last_result op rhs`.
    pub fn apply_to_last(&mut self, op: BinaryOp, rhs: f64) -> Result<f64, CalcError> {
        self.apply(op, self.last_result, rhs)
    }

    /// Compute `op(x)`.
    pub fn evaluate(&mut self, op: UnaryOp, x: f64) -> Result<f64, CalcError> {
        let result = op.compute(x)?;
        Ok(self.commit(result))
    }

    /// Compute `op(last_result)`.
    pub fn evaluate_last(&mut self, op: UnaryOp) -> Result<f64, CalcError> {
        self.evaluate(op, self.last_result)
    }

    /// Reset the accumulator to zero. Memory is kept.
    pub fn clear(&mut self) -> f64 {
        self.commit(0.0)
    }

    /// Copy the accumulator into memory.
    pub fn memory_store(&mut self) -> f64 {
        self.memory = self.last_result;
        self.memory
    }

    /// Copy memory into the accumulator.
    pub fn memory_recall(&mut self) -> f64 {
        self.last_result = self.memory;
        self.memory
    }

    pub fn memory_clear(&mut self) -> f64 {
        self.memory = 0.0;
        self.memory
    }

    pub fn memory_add(&mut self) -> f64 {
        self.memory += self.last_result;
        self.memory
    }

    pub fn memory_subtract(&mut self) -> f64 {
        self.memory -= self.last_result;
        self.memory
    }

    fn commit(&mut self, result: f64) -> f64 {
        self.last_result = result;
        result
    }
}
