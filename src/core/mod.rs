pub mod calculator;

pub use crate::utils::error::Result;
pub use self::calculator::Calculator;
