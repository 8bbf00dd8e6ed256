//! AST evaluation and result formatting

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcResult, Calculator, Operation};

/// Decimal places kept when a result has a fractional part
const MAX_DECIMALS: usize = 10;

/// Evaluator for AST expressions
#[derive(Debug, Default)]
pub struct Evaluator {
    calculator: Calculator,
}

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
        }
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Calculator::check_overflow(*n),
            AstNode::Negate(inner) => {
                let value = self.evaluate(inner)?;
                self.calculator.calculate(value, -1.0, Operation::Multiply)
            }
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                self.calculator.calculate(left_val, right_val, *op)
            }
        }
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }
}

/// Formats a result for the display.
///
/// Integral values print without a fractional part, everything else is cut to
/// ten decimals with trailing zeros removed. A nonzero value that would round
/// to zero at ten decimals keeps its shortest exact decimal form instead. The
/// output never uses an exponent and always tokenizes back to (approximately)
/// the same value, so it can seed a new expression.
///
/// Infinite and NaN values are rejected.
pub fn format_value(value: f64) -> CalcResult<String> {
    let value = Calculator::check_overflow(value)?;

    let formatted = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let fixed = format!("{value:.prec$}", prec = MAX_DECIMALS);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "0" || trimmed == "-0" {
            value.to_string()
        } else {
            trimmed.to_string()
        }
    };

    if formatted == "-0" {
        Ok("0".to_string())
    } else {
        Ok(formatted)
    }
}
