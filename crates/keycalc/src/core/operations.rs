//! Binary arithmetic operations
//!
//! Every operation is checked: division by zero, infinities and NaN surface as
//! [`CalcError`] values instead of leaking into the display.

use crate::core::{CalcError, CalcResult};

/// The five binary operators the keypad can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Remainder (%)
    Modulo,
}

impl Operation {
    /// All operations in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
    ];

    /// Symbol written into the expression buffer
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
        }
    }

    /// Symbol printed on the keypad (division and multiplication use the
    /// typographic signs)
    #[must_use]
    pub const fn label(&self) -> char {
        match self {
            Self::Multiply => '×',
            Self::Divide => '÷',
            other => other.symbol(),
        }
    }

    /// Parses a buffer symbol or a keypad label
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    /// Returns true if `ch` is one of the buffer operator symbols
    #[must_use]
    pub const fn is_symbol(ch: char) -> bool {
        matches!(ch, '+' | '-' | '*' | '/' | '%')
    }

    /// Precedence level (higher binds tighter)
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide | Self::Modulo => 2,
        }
    }
}

/// Checked arithmetic on two operands
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Creates a new calculator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Performs an operation on two operands
    pub fn calculate(&self, a: f64, b: f64, op: Operation) -> CalcResult<f64> {
        match op {
            Operation::Add => Self::add(a, b),
            Operation::Subtract => Self::subtract(a, b),
            Operation::Multiply => Self::multiply(a, b),
            Operation::Divide => Self::divide(a, b),
            Operation::Modulo => Self::modulo(a, b),
        }
    }

    /// Addition: a + b
    pub fn add(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_overflow(a + b)
    }

    /// Subtraction: a - b
    pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_overflow(a - b)
    }

    /// Multiplication: a * b
    pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_overflow(a * b)
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_overflow(a / b)
    }

    /// Floored remainder: the result carries the sign of the divisor
    /// (`-7 % 3 == 2`, `7 % -3 == -2`)
    pub fn modulo(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        let rem = a % b;
        let result = if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
            rem + b
        } else {
            rem
        };
        Self::check_overflow(result)
    }

    /// Rejects infinite and NaN values
    pub(crate) fn check_overflow(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::InvalidResult("NaN".into()))
        } else if result.is_infinite() {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }
}
