//! Binary and unary operations with their domain checks.
//!
//! These are pure functions of their operands. The engine decides where the
//! operands come from and where the result goes.

use super::error::CalcError;

/// Largest integer whose factorial is still a finite `f64`.
const MAX_FACTORIAL: f64 = 170.0;

/// An operation combining two operands into one result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
}

impl BinaryOp {
    /// Infix symbol used when echoing a calculation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Modulo => "%",
        }
    }

    /// Compute `lhs op rhs`.
    pub fn compute(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                Ok(lhs / rhs)
            }
            Self::Power => power(lhs, rhs),
            Self::Modulo => {
                if rhs == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                Ok(floored_remainder(lhs, rhs))
            }
        }
    }
}

/// An operation on a single operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    SquareRoot,
    Factorial,
}

impl UnaryOp {
    /// Function name used when echoing a calculation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log10 => "log10",
            Self::Ln => "ln",
            Self::SquareRoot => "sqrt",
            Self::Factorial => "fact",
        }
    }

    /// Compute `op(x)`, rejecting operands outside the function's domain.
    pub fn compute(self, x: f64) -> Result<f64, CalcError> {
        match self {
            Self::Sin | Self::Cos | Self::Tan if x.is_infinite() => Err(CalcError::invalid(
                "Cannot calculate trigonometric function of infinity",
            )),
            Self::Sin => Ok(x.sin()),
            Self::Cos => Ok(x.cos()),
            Self::Tan => Ok(x.tan()),
            Self::Log10 | Self::Ln if x <= 0.0 => Err(CalcError::invalid(
                "Cannot calculate logarithm of non-positive number",
            )),
            Self::Log10 => Ok(x.log10()),
            Self::Ln => Ok(x.ln()),
            Self::SquareRoot if x < 0.0 => Err(CalcError::invalid(
                "Cannot calculate square root of negative number",
            )),
            Self::SquareRoot => Ok(x.sqrt()),
            Self::Factorial => factorial(x),
        }
    }
}

fn power(base: f64, exponent: f64) -> Result<f64, CalcError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(CalcError::DivideByZero);
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(CalcError::invalid(
            "Cannot raise negative number to a fractional power",
        ));
    }
    Ok(base.powf(exponent))
}

/// Remainder carrying the sign of the divisor.
fn floored_remainder(lhs: f64, rhs: f64) -> f64 {
    let remainder = lhs % rhs;
    if remainder != 0.0 && (remainder < 0.0) != (rhs < 0.0) {
        remainder + rhs
    } else {
        remainder
    }
}

fn factorial(n: f64) -> Result<f64, CalcError> {
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
        return Err(CalcError::invalid(
            "Factorial requires a non-negative integer",
        ));
    }
    if n > MAX_FACTORIAL {
        return Err(CalcError::invalid(format!(
            "Factorial is only defined up to {}",
            MAX_FACTORIAL
        )));
    }

    Ok(exact_factorial(n as u32))
}

/// `n!` computed exactly in base 2^32 limbs, then rounded once to `f64`.
fn exact_factorial(n: u32) -> f64 {
    let mut limbs: Vec<u32> = vec![1];
    for k in 2..=n {
        let mut carry: u64 = 0;
        for limb in limbs.iter_mut() {
            let product = u64::from(*limb) * u64::from(k) + carry;
            *limb = product as u32;
            carry = product >> 32;
        }
        if carry > 0 {
            limbs.push(carry as u32);
        }
    }
    limbs_to_f64(&limbs)
}

/// Round a little-endian limb integer to the nearest `f64`, ties to even.
fn limbs_to_f64(limbs: &[u32]) -> f64 {
    let bit = |i: usize| (limbs[i / 32] >> (i % 32)) & 1 == 1;

    let top = limbs.len() - 1;
    let bit_len = 32 * top + (32 - limbs[top].leading_zeros() as usize);
    if bit_len <= 64 {
        let value = limbs
            .iter()
            .rev()
            .fold(0u64, |acc, &limb| (acc << 32) | u64::from(limb));
        return value as f64;
    }

    // Keep the top 64 bits and fold everything below into the lowest one,
    // which sits under the rounding position of a 53-bit mantissa.
    let shift = bit_len - 64;
    let mantissa = (shift..bit_len).rev().fold(0u64, |acc, i| (acc << 1) | u64::from(bit(i)));
    let sticky = (0..shift).any(bit);

    (mantissa | u64::from(sticky)) as f64 * 2f64.powi(shift as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(BinaryOp::Add.compute(5.0, 3.0), Ok(8.0));
        assert_eq!(BinaryOp::Subtract.compute(10.0, 4.0), Ok(6.0));
        assert_eq!(BinaryOp::Multiply.compute(3.0, 4.0), Ok(12.0));
        assert_eq!(BinaryOp::Divide.compute(10.0, 2.0), Ok(5.0));
        assert_eq!(BinaryOp::Divide.compute(1.0, 4.0), Ok(0.25));
        assert_eq!(BinaryOp::Power.compute(2.0, 10.0), Ok(1024.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            BinaryOp::Divide.compute(1.0, 0.0),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(
            BinaryOp::Modulo.compute(1.0, -0.0),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(
            BinaryOp::Power.compute(0.0, -1.0),
            Err(CalcError::DivideByZero)
        );
    }

    #[test]
    fn test_modulo_takes_sign_of_divisor() {
        assert_eq!(BinaryOp::Modulo.compute(7.0, 3.0), Ok(1.0));
        assert_eq!(BinaryOp::Modulo.compute(-7.0, 3.0), Ok(2.0));
        assert_eq!(BinaryOp::Modulo.compute(7.0, -3.0), Ok(-2.0));
        assert_eq!(BinaryOp::Modulo.compute(-7.0, -3.0), Ok(-1.0));
        assert_eq!(BinaryOp::Modulo.compute(6.0, 3.0), Ok(0.0));
        assert_eq!(BinaryOp::Modulo.compute(5.5, 2.0), Ok(1.5));
    }

    #[test]
    fn test_power_domain() {
        assert_eq!(BinaryOp::Power.compute(-2.0, 3.0), Ok(-8.0));
        assert_eq!(BinaryOp::Power.compute(4.0, 0.5), Ok(2.0));
        assert!(matches!(
            BinaryOp::Power.compute(-8.0, 1.0 / 3.0),
            Err(CalcError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_scientific_functions() {
        assert!((UnaryOp::Sin.compute(std::f64::consts::FRAC_PI_2).unwrap() - 1.0).abs() < 1e-10);
        assert_eq!(UnaryOp::Cos.compute(0.0), Ok(1.0));
        assert_eq!(UnaryOp::Tan.compute(0.0), Ok(0.0));
        assert_eq!(UnaryOp::Log10.compute(100.0), Ok(2.0));
        assert_eq!(UnaryOp::Ln.compute(1.0), Ok(0.0));
        assert_eq!(UnaryOp::SquareRoot.compute(9.0), Ok(3.0));
    }

    #[test]
    fn test_domain_errors() {
        for (op, x) in [
            (UnaryOp::SquareRoot, -4.0),
            (UnaryOp::Log10, 0.0),
            (UnaryOp::Log10, -1.0),
            (UnaryOp::Ln, 0.0),
            (UnaryOp::Sin, f64::INFINITY),
        ] {
            assert!(
                matches!(op.compute(x), Err(CalcError::InvalidArgument(_))),
                "{:?}({}) should be rejected",
                op,
                x
            );
        }
    }

    #[test]
    fn test_factorial() {
        assert_eq!(UnaryOp::Factorial.compute(0.0), Ok(1.0));
        assert_eq!(UnaryOp::Factorial.compute(1.0), Ok(1.0));
        assert_eq!(UnaryOp::Factorial.compute(5.0), Ok(120.0));
        assert_eq!(UnaryOp::Factorial.compute(20.0), Ok(2_432_902_008_176_640_000.0));
        assert!(UnaryOp::Factorial.compute(170.0).unwrap().is_finite());

        for n in [2.5, -1.0, 171.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    UnaryOp::Factorial.compute(n),
                    Err(CalcError::InvalidArgument(_))
                ),
                "fact({}) should be rejected",
                n
            );
        }
    }

    #[test]
    fn test_large_factorials_are_correctly_rounded() {
        assert_eq!(UnaryOp::Factorial.compute(25.0), Ok(1.5511210043330986e25));
        assert_eq!(UnaryOp::Factorial.compute(100.0), Ok(9.332621544394415e157));
        assert_eq!(UnaryOp::Factorial.compute(170.0), Ok(7.257415615307999e306));
    }
}
