pub mod core;
pub mod utils;

pub use crate::core::calculator::Calculator;
pub use crate::utils::error::{CalculatorError, Result};
