//! keycalc - a keypad calculator
//!
//! The calculator is driven one button at a time. Every press goes through an
//! [`InputTracker`](core::InputTracker), which keeps the expression buffer
//! well-formed, evaluates it on `=` and decides what the display shows. The
//! terminal front end in [`tui`] only maps keys and clicks to buttons and draws
//! the result.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut tracker = InputTracker::new();
//! for label in "5+3=".chars() {
//!     tracker.press(Button::from_label(label).unwrap());
//! }
//! assert_eq!(tracker.display(), "8");
//!
//! // An operator on an empty buffer continues from the last result
//! tracker.press(Button::Operator(Operation::Add));
//! tracker.press(Button::Digit(2));
//! assert_eq!(tracker.press(Button::Equals), "10");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod display;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalcConfig, ConfigError};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::tracker::TrackerSnapshot;
    pub use crate::core::{
        format_value, Button, CalcError, CalcResult, Calculator, ErrorStyle, Evaluator,
        InputTracker, Operation, TrackerState,
    };
    pub use crate::display::{fit, FittedText, FontSize};
    pub use crate::driver::{CalculatorDriver, DriverError, TrackerDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
