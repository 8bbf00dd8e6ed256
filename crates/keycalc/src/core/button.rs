//! Keypad buttons and the labels printed on them

use crate::core::Operation;

/// Label of the sign toggle key
pub const SIGN_TOGGLE_LABEL: char = '±';

/// A single keypad button, independent of how it is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Point,
    /// Binary operator
    Operator(Operation),
    /// Evaluate the expression
    Equals,
    /// Reset everything
    Clear,
    /// Sign toggle. Present on the keypad but wired to nothing.
    SignToggle,
}

impl Button {
    /// Creates a digit button. Values above 9 are rejected.
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Resolves a keypad label (`0-9 . + - * / % ÷ × = C ±`)
    #[must_use]
    pub fn from_label(label: char) -> Option<Self> {
        match label {
            '0'..='9' => label.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Point),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            SIGN_TOGGLE_LABEL => Some(Self::SignToggle),
            other => Operation::from_symbol(other).map(Self::Operator),
        }
    }

    /// The glyph printed on the key
    #[must_use]
    pub fn label(&self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10).unwrap_or('?'),
            Self::Point => '.',
            Self::Operator(op) => op.label(),
            Self::Equals => '=',
            Self::Clear => 'C',
            Self::SignToggle => SIGN_TOGGLE_LABEL,
        }
    }

    /// Returns true for digit and decimal point keys
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Point)
    }
}
