//! Keypad input tracker
//!
//! Turns a stream of button presses into an expression buffer and decides what
//! the display shows after each press. The sanitization rules are:
//!
//! - a `0` pressed while the buffer is empty is swallowed (no leading zeros)
//! - a point on an empty operand becomes `0.`; a second point in the same
//!   operand is ignored
//! - an operator pressed right after another one replaces it
//! - an operator pressed with an empty buffer continues from the last result
//!
//! A failed evaluation parks the buffer on [`SENTINEL_EXPRESSION`] until the
//! next number or a clear.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{format_value, Button, CalcError, Evaluator, Operation};

/// Buffer contents after a failed evaluation
pub const SENTINEL_EXPRESSION: &str = "1/0";

/// Text shown for every evaluation failure in [`ErrorStyle::Uniform`] mode
pub const DEFAULT_ERROR_MESSAGE: &str = "Not a number";

/// Display text of a cleared calculator
pub const ZERO_DISPLAY: &str = "0";

/// How evaluation failures are worded on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorStyle {
    /// One fixed message for every failure
    #[default]
    Uniform,
    /// Distinguish division by zero, overflow and syntax errors
    Detailed,
}

/// Where the tracker is in the entry cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerState {
    /// Nothing entered yet
    #[default]
    Empty,
    /// Typing the digits of an operand
    EnteringOperand,
    /// Buffer ends in an operator
    OperatorPending,
    /// Showing a result
    Evaluated,
    /// Showing an error, buffer holds the sentinel
    Errored,
}

impl TrackerState {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::EnteringOperand => "entering_operand",
            Self::OperatorPending => "operator_pending",
            Self::Evaluated => "evaluated",
            Self::Errored => "errored",
        }
    }
}

/// Serializable view of the tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerSnapshot {
    /// Displayed text
    pub display: String,
    /// Expression buffer
    pub expression: String,
    /// Most recent successful result, empty if none
    pub last_result: String,
    /// Current state
    pub state: TrackerState,
}

/// The stateful core of the calculator
#[derive(Debug)]
pub struct InputTracker {
    display: String,
    expression: String,
    token: String,
    last_result: String,
    state: TrackerState,
    last_error: Option<CalcError>,
    evaluator: Evaluator,
    error_style: ErrorStyle,
    error_message: String,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl InputTracker {
    /// Creates a cleared tracker showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: ZERO_DISPLAY.to_string(),
            expression: String::new(),
            token: String::new(),
            last_result: String::new(),
            state: TrackerState::Empty,
            last_error: None,
            evaluator: Evaluator::new(),
            error_style: ErrorStyle::Uniform,
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }

    /// Sets how failures are worded. `message` is used in uniform mode.
    #[must_use]
    pub fn with_error_policy(mut self, style: ErrorStyle, message: impl Into<String>) -> Self {
        self.error_style = style;
        self.error_message = message.into();
        self
    }

    /// Text currently on the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Accumulated expression buffer
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Operand being typed
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Most recent successful result, empty if none
    #[must_use]
    pub fn last_result(&self) -> &str {
        &self.last_result
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Cause of the current error, if the display shows one
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Configured error wording
    #[must_use]
    pub fn error_style(&self) -> ErrorStyle {
        self.error_style
    }

    /// Serializable copy of the visible state
    #[must_use]
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            display: self.display.clone(),
            expression: self.expression.clone(),
            last_result: self.last_result.clone(),
            state: self.state,
        }
    }

    /// Dispatches a keypad button and returns the text to display
    pub fn press(&mut self, button: Button) -> &str {
        debug!(label = %button.label(), state = self.state.as_str(), "press");
        match button {
            Button::Digit(d) => match char::from_digit(u32::from(d), 10) {
                Some(ch) => self.append_digit_or_point(ch),
                None => &self.display,
            },
            Button::Point => self.append_digit_or_point('.'),
            Button::Operator(op) => self.apply_operator(op),
            Button::Equals => self.evaluate(),
            Button::Clear => self.clear(),
            Button::SignToggle => {
                debug!("sign toggle has no action");
                &self.display
            }
        }
    }

    /// Appends a digit or decimal point to the operand being typed.
    ///
    /// `token` must be `0-9` or `.`; anything else leaves the state untouched.
    pub fn append_digit_or_point(&mut self, token: char) -> &str {
        debug_assert!(token.is_ascii_digit() || token == '.', "bad token {token:?}");
        if !(token.is_ascii_digit() || token == '.') {
            return &self.display;
        }

        if self.state == TrackerState::Errored {
            // A new number replaces the failed expression
            self.expression.clear();
            self.last_error = None;
            self.state = TrackerState::Empty;
        }

        if token == '.' {
            if self.token.contains('.') {
                return &self.display;
            }
            if self.token.is_empty() {
                self.push_numeric('0');
            }
        } else if token == '0' && self.expression.is_empty() {
            self.display = ZERO_DISPLAY.to_string();
            self.token.clear();
            return &self.display;
        }

        self.push_numeric(token);
        self.display.clone_from(&self.token);
        self.state = TrackerState::EnteringOperand;
        &self.display
    }

    /// Records a binary operator.
    ///
    /// With an empty buffer the last result is used as the left operand; with
    /// nothing to operate on the press is ignored. An operator directly after
    /// another one replaces it.
    pub fn apply_operator(&mut self, op: Operation) -> &str {
        if self.state == TrackerState::Errored {
            debug!(op = %op.symbol(), "operator ignored after failed evaluation");
            return &self.display;
        }

        if self.expression.is_empty() {
            if self.last_result.is_empty() {
                return &self.display;
            }
            self.expression.push_str(&self.last_result);
        }

        if self.expression.ends_with(Operation::is_symbol) {
            self.expression.pop();
        }

        self.expression.push(op.symbol());
        self.token.clear();
        self.state = TrackerState::OperatorPending;
        &self.display
    }

    /// Evaluates the buffer.
    ///
    /// Empty buffers are left alone. After a failure the call repeats the same
    /// error without touching anything.
    pub fn evaluate(&mut self) -> &str {
        if self.expression.is_empty() || self.state == TrackerState::Errored {
            return &self.display;
        }

        let outcome = self
            .evaluator
            .evaluate_str(&self.expression)
            .and_then(format_value);
        match outcome {
            Ok(text) => {
                info!(expression = %self.expression, result = %text, "evaluated");
                self.last_result.clone_from(&text);
                self.display = text;
                self.expression.clear();
                self.last_error = None;
                self.state = TrackerState::Evaluated;
            }
            Err(err) => {
                warn!(expression = %self.expression, error = %err, "evaluation failed");
                self.display = self.error_text(&err);
                self.expression = SENTINEL_EXPRESSION.to_string();
                self.last_error = Some(err);
                self.state = TrackerState::Errored;
            }
        }
        self.token.clear();
        &self.display
    }

    /// Resets everything, including the last result
    pub fn clear(&mut self) -> &str {
        self.display = ZERO_DISPLAY.to_string();
        self.expression.clear();
        self.token.clear();
        self.last_result.clear();
        self.last_error = None;
        self.state = TrackerState::Empty;
        &self.display
    }

    fn push_numeric(&mut self, ch: char) {
        self.token.push(ch);
        self.expression.push(ch);
    }

    fn error_text(&self, err: &CalcError) -> String {
        match self.error_style {
            ErrorStyle::Uniform => self.error_message.clone(),
            ErrorStyle::Detailed => err.display_message().to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn press_all(tracker: &mut InputTracker, labels: &str) {
        for label in labels.chars() {
            let button = Button::from_label(label).unwrap();
            tracker.press(button);
        }
    }

    fn tracker_after(labels: &str) -> InputTracker {
        let mut tracker = InputTracker::new();
        press_all(&mut tracker, labels);
        tracker
    }

    // ===== Construction and clear =====

    #[test]
    fn test_new_tracker_shows_zero() {
        let tracker = InputTracker::new();
        assert_eq!(tracker.display(), "0");
        assert_eq!(tracker.expression(), "");
        assert_eq!(tracker.token(), "");
        assert_eq!(tracker.last_result(), "");
        assert_eq!(tracker.state(), TrackerState::Empty);
        assert!(tracker.last_error().is_none());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut tracker = tracker_after("5+3=+2");
        assert_eq!(tracker.clear(), "0");
        assert_eq!(tracker.expression(), "");
        assert_eq!(tracker.token(), "");
        assert_eq!(tracker.last_result(), "");
        assert_eq!(tracker.state(), TrackerState::Empty);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut tracker = tracker_after("12");
        tracker.clear();
        let first = tracker.snapshot();
        tracker.clear();
        assert_eq!(tracker.snapshot(), first);
    }

    // ===== Digits =====

    #[test]
    fn test_digits_concatenate() {
        let tracker = tracker_after("123");
        assert_eq!(tracker.display(), "123");
        assert_eq!(tracker.token(), "123");
        assert_eq!(tracker.expression(), "123");
        assert_eq!(tracker.state(), TrackerState::EnteringOperand);
    }

    #[test]
    fn test_leading_zeros_suppressed() {
        let tracker = tracker_after("0000");
        assert_eq!(tracker.display(), "0");
        assert_eq!(tracker.expression(), "");
        assert_eq!(tracker.state(), TrackerState::Empty);
    }

    #[test]
    fn test_leading_zero_then_digit() {
        let tracker = tracker_after("007");
        assert_eq!(tracker.display(), "7");
        assert_eq!(tracker.expression(), "7");
    }

    #[test]
    fn test_zero_inside_number_kept() {
        let tracker = tracker_after("105");
        assert_eq!(tracker.display(), "105");
    }

    #[test]
    fn test_zero_after_operator_kept() {
        let tracker = tracker_after("5+0");
        assert_eq!(tracker.display(), "0");
        assert_eq!(tracker.expression(), "5+0");

        let mut tracker = tracker_after("5+07");
        assert_eq!(tracker.display(), "07");
        assert_eq!(tracker.evaluate(), "12");
    }

    // ===== Decimal point =====

    #[test]
    fn test_point_on_empty_operand_gets_zero_prefix() {
        let tracker = tracker_after(".");
        assert_eq!(tracker.display(), "0.");
        assert_eq!(tracker.token(), "0.");
        assert_eq!(tracker.expression(), "0.");
    }

    #[test]
    fn test_point_after_operator_gets_zero_prefix() {
        let tracker = tracker_after("3*.5");
        assert_eq!(tracker.display(), "0.5");
        assert_eq!(tracker.expression(), "3*0.5");
    }

    #[test]
    fn test_repeated_point_is_noop() {
        let once = tracker_after("5.");
        let twice = tracker_after("5..");
        assert_eq!(once.snapshot(), twice.snapshot());
        assert_eq!(twice.token(), "5.");
    }

    #[test]
    fn test_second_point_in_operand_rejected() {
        let tracker = tracker_after("1.2.3");
        assert_eq!(tracker.display(), "1.23");
        assert_eq!(tracker.expression(), "1.23");
    }

    #[test]
    fn test_each_operand_gets_its_own_point() {
        let tracker = tracker_after("1.5+2.5=");
        assert_eq!(tracker.display(), "4");
    }

    // ===== Operators =====

    #[test]
    fn test_operator_appends_and_starts_new_operand() {
        let tracker = tracker_after("12+");
        assert_eq!(tracker.expression(), "12+");
        assert_eq!(tracker.token(), "");
        // Display keeps the operand until the next digit
        assert_eq!(tracker.display(), "12");
        assert_eq!(tracker.state(), TrackerState::OperatorPending);
    }

    #[test]
    fn test_consecutive_operators_last_wins() {
        let tracker = tracker_after("5+-×÷");
        assert_eq!(tracker.expression(), "5/");
    }

    #[test]
    fn test_operator_on_empty_buffer_ignored() {
        let tracker = tracker_after("+");
        assert_eq!(tracker.expression(), "");
        assert_eq!(tracker.display(), "0");
        assert_eq!(tracker.state(), TrackerState::Empty);
    }

    #[test]
    fn test_display_symbols_are_normalized() {
        let tracker = tracker_after("6×2÷3");
        assert_eq!(tracker.expression(), "6*2/3");
    }

    // ===== Evaluation =====

    #[test]
    fn test_five_plus_three() {
        let tracker = tracker_after("5+3=");
        assert_eq!(tracker.display(), "8");
        assert_eq!(tracker.last_result(), "8");
        assert_eq!(tracker.expression(), "");
        assert_eq!(tracker.token(), "");
        assert_eq!(tracker.state(), TrackerState::Evaluated);
    }

    #[test]
    fn test_continuation_from_result() {
        let tracker = tracker_after("5+3=+2=");
        assert_eq!(tracker.display(), "10");
        assert_eq!(tracker.last_result(), "10");
    }

    #[test]
    fn test_operator_after_result_seeds_buffer() {
        let tracker = tracker_after("5+3=×");
        assert_eq!(tracker.expression(), "8*");
        assert_eq!(tracker.state(), TrackerState::OperatorPending);
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let tracker = tracker_after("5+3=4+1=");
        assert_eq!(tracker.display(), "5");
    }

    #[test]
    fn test_negative_result_continues() {
        let tracker = tracker_after("3-5=×4=");
        assert_eq!(tracker.display(), "-8");
    }

    #[test]
    fn test_precedence() {
        assert_eq!(tracker_after("2+3×4=").display(), "14");
        assert_eq!(tracker_after("7%4+1=").display(), "4");
    }

    #[test]
    fn test_fractional_result() {
        assert_eq!(tracker_after("5÷2=").display(), "2.5");
        assert_eq!(tracker_after("4÷2=").display(), "2");
    }

    #[test]
    fn test_tiny_result_stays_nonzero() {
        let mut tracker = tracker_after("1÷3000000000000=");
        assert_ne!(tracker.display(), "0");
        assert!(tracker.display().starts_with("0.000000000000333"));
        assert_eq!(tracker.last_result(), tracker.display());

        press_all(&mut tracker, "×3000000000000=");
        assert_eq!(tracker.display(), "1");
    }

    #[test]
    fn test_evaluate_idempotent_after_success() {
        let mut tracker = tracker_after("5+3=");
        let before = tracker.snapshot();
        tracker.evaluate();
        assert_eq!(tracker.snapshot(), before);
    }

    #[test]
    fn test_evaluate_on_empty_tracker_is_noop() {
        let mut tracker = InputTracker::new();
        assert_eq!(tracker.evaluate(), "0");
        assert_eq!(tracker.state(), TrackerState::Empty);
    }

    // ===== Failures =====

    #[test]
    fn test_division_by_zero() {
        let tracker = tracker_after("1÷0=");
        assert_eq!(tracker.display(), DEFAULT_ERROR_MESSAGE);
        assert_eq!(tracker.expression(), SENTINEL_EXPRESSION);
        assert_eq!(tracker.token(), "");
        assert_eq!(tracker.state(), TrackerState::Errored);
        assert_eq!(tracker.last_error(), Some(&CalcError::DivisionByZero));
    }

    #[test]
    fn test_trailing_operator_fails() {
        let tracker = tracker_after("5+=");
        assert_eq!(tracker.display(), DEFAULT_ERROR_MESSAGE);
        assert!(matches!(
            tracker.last_error(),
            Some(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_literal_beyond_f64_is_overflow() {
        let mut tracker = tracker_after("2+2=");
        press_all(&mut tracker, &"9".repeat(400));
        tracker.evaluate();
        assert_eq!(tracker.display(), DEFAULT_ERROR_MESSAGE);
        assert_eq!(tracker.state(), TrackerState::Errored);
        assert_eq!(tracker.last_error(), Some(&CalcError::Overflow));
        assert_eq!(tracker.last_result(), "4");

        press_all(&mut tracker, "1+1=");
        assert_eq!(tracker.display(), "2");
    }

    #[test]
    fn test_overflowing_product_is_overflow() {
        let mut tracker =
            InputTracker::new().with_error_policy(ErrorStyle::Detailed, DEFAULT_ERROR_MESSAGE);
        let big = "9".repeat(200);
        press_all(&mut tracker, &format!("{big}×{big}="));
        assert_eq!(tracker.display(), "Overflow");
        assert_eq!(tracker.last_result(), "");
    }

    #[test]
    fn test_failure_is_idempotent() {
        let mut tracker = tracker_after("1÷0=");
        let before = tracker.snapshot();
        tracker.evaluate();
        assert_eq!(tracker.snapshot(), before);
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let tracker = tracker_after("2+2=1÷0=");
        assert_eq!(tracker.last_result(), "4");
    }

    #[test]
    fn test_digit_after_failure_starts_fresh() {
        let tracker = tracker_after("1÷0=7+1=");
        assert_eq!(tracker.display(), "8");
    }

    #[test]
    fn test_zero_after_failure_is_suppressed() {
        let tracker = tracker_after("1÷0=0");
        assert_eq!(tracker.display(), "0");
        assert_eq!(tracker.expression(), "");
        assert_eq!(tracker.state(), TrackerState::Empty);
    }

    #[test]
    fn test_operator_after_failure_ignored() {
        let tracker = tracker_after("1÷0=+");
        assert_eq!(tracker.expression(), SENTINEL_EXPRESSION);
        assert_eq!(tracker.display(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_clear_after_failure() {
        let mut tracker = tracker_after("1÷0=");
        tracker.clear();
        assert_eq!(tracker.display(), "0");
        assert!(tracker.last_error().is_none());
    }

    #[test]
    fn test_detailed_errors() {
        let mut tracker =
            InputTracker::new().with_error_policy(ErrorStyle::Detailed, DEFAULT_ERROR_MESSAGE);
        press_all(&mut tracker, "1÷0=");
        assert_eq!(tracker.display(), "Cannot divide by zero");
        tracker.clear();
        press_all(&mut tracker, "5×=");
        assert_eq!(tracker.display(), "Syntax error");
    }

    #[test]
    fn test_custom_uniform_message() {
        let mut tracker = InputTracker::new().with_error_policy(ErrorStyle::Uniform, "Error");
        press_all(&mut tracker, "1÷0=");
        assert_eq!(tracker.display(), "Error");
    }

    // ===== Sign toggle =====

    #[test]
    fn test_sign_toggle_is_noop() {
        let mut tracker = tracker_after("12");
        let before = tracker.snapshot();
        tracker.press(Button::SignToggle);
        assert_eq!(tracker.snapshot(), before);
    }

    // ===== Snapshot =====

    #[test]
    fn test_state_names() {
        assert_eq!(TrackerState::OperatorPending.as_str(), "operator_pending");
        assert_eq!(TrackerState::default().as_str(), "empty");
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let snapshot = tracker_after("9-").snapshot();
        assert_eq!(snapshot.display, "9");
        assert_eq!(snapshot.expression, "9-");
        assert_eq!(snapshot.state, TrackerState::OperatorPending);
    }
}
