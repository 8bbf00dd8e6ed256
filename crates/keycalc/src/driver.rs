//! Scripted calculator drivers
//!
//! A [`CalculatorDriver`] feeds keypad labels to a calculator and reads back
//! what it shows. The same scenario can then run against the bare
//! [`InputTracker`] and against the terminal view-model, which proves the
//! front end adds no behaviour of its own.

use thiserror::Error;

use crate::core::{Button, InputTracker};

/// Errors raised while driving a calculator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The character is not printed on any key
    #[error("Unknown key label '{0}'")]
    UnknownLabel(char),
}

/// Uniform interface over calculator front ends
pub trait CalculatorDriver {
    /// Presses the key with `label` and returns the display
    fn press_label(&mut self, label: char) -> Result<String, DriverError>;

    /// Presses every label in `labels`, skipping whitespace, and returns the
    /// final display. Stops at the first unknown label.
    fn press_sequence(&mut self, labels: &str) -> Result<String, DriverError> {
        for label in labels.chars().filter(|c| !c.is_whitespace()) {
            self.press_label(label)?;
        }
        Ok(self.display())
    }

    /// Text on the display
    fn display(&self) -> String;

    /// Expression buffer
    fn expression(&self) -> String;

    /// Resets the calculator
    fn clear(&mut self);
}

fn button_for(label: char) -> Result<Button, DriverError> {
    Button::from_label(label).ok_or(DriverError::UnknownLabel(label))
}

/// Driver over a bare [`InputTracker`]
#[derive(Debug, Default)]
pub struct TrackerDriver {
    tracker: InputTracker,
}

impl TrackerDriver {
    /// Creates a driver with a default tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver around an existing tracker
    #[must_use]
    pub fn with_tracker(tracker: InputTracker) -> Self {
        Self { tracker }
    }

    /// Returns a reference to the tracker
    #[must_use]
    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }
}

impl CalculatorDriver for TrackerDriver {
    fn press_label(&mut self, label: char) -> Result<String, DriverError> {
        let button = button_for(label)?;
        Ok(self.tracker.press(button).to_string())
    }

    fn display(&self) -> String {
        self.tracker.display().to_string()
    }

    fn expression(&self) -> String {
        self.tracker.expression().to_string()
    }

    fn clear(&mut self) {
        self.tracker.clear();
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{button_for, CalculatorDriver, DriverError};
    use crate::tui::CalculatorApp;

    /// Driver over the terminal view-model
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press_label(&mut self, label: char) -> Result<String, DriverError> {
            let button = button_for(label)?;
            Ok(self.app.press(button).to_string())
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn expression(&self) -> String {
            self.app.expression().to_string()
        }

        fn clear(&mut self) {
            self.app.clear();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenarios =====
// These run against any CalculatorDriver implementation

/// Verifies the four basic operations and remainder
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> Result<(), DriverError> {
    for (keys, expected) in [
        ("5+3=", "8"),
        ("10-4=", "6"),
        ("6×7=", "42"),
        ("20÷4=", "5"),
        ("7÷2=", "3.5"),
        ("17%5=", "2"),
    ] {
        driver.clear();
        assert_eq!(driver.press_sequence(keys)?, expected, "{keys}");
    }
    driver.clear();
    Ok(())
}

/// Verifies that an operator on an empty buffer continues from the result
pub fn verify_continuation<D: CalculatorDriver>(driver: &mut D) -> Result<(), DriverError> {
    driver.clear();
    assert_eq!(driver.press_sequence("5+3=")?, "8");
    assert_eq!(driver.press_sequence("+2=")?, "10");
    assert_eq!(driver.press_sequence("×3=")?, "30");
    driver.clear();
    Ok(())
}

/// Verifies the leading zero, decimal point and operator rules
pub fn verify_input_sanitization<D: CalculatorDriver>(
    driver: &mut D,
) -> Result<(), DriverError> {
    driver.clear();
    assert_eq!(driver.press_sequence("007")?, "7");
    assert_eq!(driver.expression(), "7");

    driver.clear();
    assert_eq!(driver.press_sequence(".5")?, "0.5");
    assert_eq!(driver.press_sequence(".3")?, "0.53");

    driver.clear();
    driver.press_sequence("5+-×")?;
    assert_eq!(driver.expression(), "5*");

    driver.clear();
    driver.press_sequence("+")?;
    assert_eq!(driver.expression(), "");
    driver.clear();
    Ok(())
}

/// Verifies failure reporting and recovery
pub fn verify_failure_recovery<D: CalculatorDriver>(driver: &mut D) -> Result<(), DriverError> {
    driver.clear();
    assert_eq!(driver.press_sequence("1÷0=")?, "Not a number");
    assert_eq!(driver.expression(), "1/0");

    // operators and equals keep the failure
    assert_eq!(driver.press_sequence("+=")?, "Not a number");

    // a new number starts over
    assert_eq!(driver.press_sequence("4")?, "4");
    assert_eq!(driver.expression(), "4");
    assert_eq!(driver.press_sequence("×2=")?, "8");
    driver.clear();
    Ok(())
}

/// Verifies that clear resets everything
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) -> Result<(), DriverError> {
    driver.press_sequence("9+9=")?;
    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.expression(), "");
    // no last result to continue from
    driver.press_sequence("+")?;
    assert_eq!(driver.expression(), "");
    Ok(())
}

/// Runs every shared scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) -> Result<(), DriverError> {
    verify_basic_arithmetic(driver)?;
    verify_continuation(driver)?;
    verify_input_sanitization(driver)?;
    verify_failure_recovery(driver)?;
    verify_clear(driver)
}
