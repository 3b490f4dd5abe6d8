use crate::utils::error::{CalculatorError, Result};
use tracing::debug;

/// Stateless arithmetic calculator.
///
/// Every operation is pure and independent; the only failure mode is
/// division by zero. Safe to share across threads without synchronization.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// Errors with [`CalculatorError::DivisionByZero`] when `b` is exactly
    /// zero; otherwise returns the IEEE-754 quotient.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            debug!(dividend = a, "division by zero rejected");
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Raise `base` to `exponent` using native `f64` exponentiation.
    /// Fractional and negative exponents follow `f64::powf` semantics.
    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }
}
