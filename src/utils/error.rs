use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("cannot divide by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
