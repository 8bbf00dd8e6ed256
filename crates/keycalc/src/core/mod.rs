//! Calculator engine: arithmetic, expression parsing and keypad input tracking
//!
//! Nothing in here knows about terminals, so every rule of the keypad can be
//! exercised from plain unit tests.

pub mod button;
pub mod evaluator;
mod operations;
pub mod parser;
pub mod tracker;

pub use button::Button;
pub use evaluator::{format_value, Evaluator};
pub use operations::{Calculator, Operation};
pub use tracker::{ErrorStyle, InputTracker, TrackerState};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Everything that can go wrong while evaluating an expression buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division or remainder by zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is not representable (infinite)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Nothing to evaluate
    #[error("Empty expression")]
    EmptyExpression,
    /// Result is NaN or otherwise unusable
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}

impl CalcError {
    /// Short message shown on the display when errors are reported in detail
    #[must_use]
    pub fn display_message(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "Cannot divide by zero",
            Self::Overflow => "Overflow",
            Self::ParseError(_) | Self::EmptyExpression => "Syntax error",
            Self::InvalidResult(_) => "Not a number",
        }
    }
}
