//! Property-based tests for the input tracker

#![allow(clippy::unwrap_used)]

use keycalc::core::tracker::SENTINEL_EXPRESSION;
use keycalc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    proptest::sample::select(Operation::ALL.to_vec())
}

/// Any keypad button
fn button_strategy() -> impl Strategy<Value = Button> {
    prop_oneof![
        4 => digit_strategy().prop_map(Button::Digit),
        1 => Just(Button::Point),
        2 => operation_strategy().prop_map(Button::Operator),
        1 => Just(Button::Equals),
        1 => Just(Button::SignToggle),
    ]
}

/// A session, occasionally cleared
fn session_strategy() -> impl Strategy<Value = Vec<Button>> {
    prop::collection::vec(
        prop_oneof![20 => button_strategy(), 1 => Just(Button::Clear)],
        0..40,
    )
}

fn run(buttons: &[Button]) -> InputTracker {
    let mut tracker = InputTracker::new();
    for &button in buttons {
        tracker.press(button);
    }
    tracker
}

// ===== Buffer invariants =====

proptest! {
    /// Two operators are never adjacent in the buffer
    #[test]
    fn prop_no_adjacent_operators(buttons in session_strategy()) {
        let mut tracker = InputTracker::new();
        for button in buttons {
            tracker.press(button);
            let chars: Vec<char> = tracker.expression().chars().collect();
            for pair in chars.windows(2) {
                prop_assert!(
                    !(Operation::is_symbol(pair[0]) && Operation::is_symbol(pair[1])),
                    "adjacent operators in {:?}", tracker.expression()
                );
            }
        }
    }

    /// Every operand holds at most one decimal point
    #[test]
    fn prop_single_point_per_operand(buttons in session_strategy()) {
        let mut tracker = InputTracker::new();
        for button in buttons {
            tracker.press(button);
            for operand in tracker.expression().split(Operation::is_symbol) {
                prop_assert!(operand.matches('.').count() <= 1, "{:?}", tracker.expression());
            }
            prop_assert!(tracker.token().matches('.').count() <= 1);
        }
    }

    /// Only digits, points and operator symbols reach the buffer
    #[test]
    fn prop_buffer_alphabet(buttons in session_strategy()) {
        let tracker = run(&buttons);
        prop_assert!(tracker
            .expression()
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || Operation::is_symbol(c)));
    }

    /// The display is never blank
    #[test]
    fn prop_display_never_empty(buttons in session_strategy()) {
        let mut tracker = InputTracker::new();
        for button in buttons {
            prop_assert!(!tracker.press(button).is_empty());
        }
    }

    /// A failed evaluation always parks the buffer on the sentinel
    #[test]
    fn prop_errored_holds_sentinel(buttons in session_strategy()) {
        let mut tracker = InputTracker::new();
        for button in buttons {
            tracker.press(button);
            if tracker.state() == TrackerState::Errored {
                prop_assert_eq!(tracker.expression(), SENTINEL_EXPRESSION);
                prop_assert!(tracker.last_error().is_some());
            }
        }
    }
}

// ===== Key sequences =====

proptest! {
    /// Digits without a leading zero concatenate
    #[test]
    fn prop_digits_concatenate(
        first in 1u8..=9u8,
        rest in prop::collection::vec(digit_strategy(), 0..12),
    ) {
        let mut tracker = InputTracker::new();
        let mut expected = first.to_string();
        tracker.press(Button::Digit(first));
        for d in rest {
            tracker.press(Button::Digit(d));
            expected.push_str(&d.to_string());
        }
        prop_assert_eq!(tracker.display(), expected.as_str());
        prop_assert_eq!(tracker.expression(), expected.as_str());
    }

    /// Leading zeros on a fresh buffer are swallowed
    #[test]
    fn prop_leading_zeros_dropped(zeros in 1usize..6, d in 1u8..=9u8) {
        let mut tracker = InputTracker::new();
        for _ in 0..zeros {
            prop_assert_eq!(tracker.press(Button::Digit(0)), "0");
        }
        tracker.press(Button::Digit(d));
        prop_assert_eq!(tracker.expression(), d.to_string());
    }

    /// The last of several consecutive operators wins
    #[test]
    fn prop_operator_last_wins(
        d in 1u8..=9u8,
        ops in prop::collection::vec(operation_strategy(), 1..6),
    ) {
        let mut tracker = InputTracker::new();
        tracker.press(Button::Digit(d));
        for &op in &ops {
            tracker.press(Button::Operator(op));
        }
        let last = ops[ops.len() - 1];
        prop_assert_eq!(tracker.expression(), format!("{d}{}", last.symbol()));
    }

    /// Pressing equals twice shows the same thing as pressing it once
    #[test]
    fn prop_evaluate_idempotent(buttons in session_strategy()) {
        let mut tracker = run(&buttons);
        let once = tracker.press(Button::Equals).to_string();
        let state = tracker.state();
        prop_assert_eq!(tracker.press(Button::Equals), once.as_str());
        prop_assert_eq!(tracker.state(), state);
    }

    /// Clear always returns to the initial state
    #[test]
    fn prop_clear_resets(buttons in session_strategy()) {
        let mut tracker = run(&buttons);
        tracker.press(Button::Clear);
        prop_assert_eq!(tracker.display(), "0");
        prop_assert_eq!(tracker.expression(), "");
        prop_assert_eq!(tracker.last_result(), "");
        prop_assert_eq!(tracker.state(), TrackerState::Empty);
    }

    /// Sign toggle never changes anything
    #[test]
    fn prop_sign_toggle_is_inert(buttons in session_strategy()) {
        let mut tracker = run(&buttons);
        let before = tracker.snapshot();
        tracker.press(Button::SignToggle);
        prop_assert_eq!(tracker.snapshot(), before);
    }

    /// Two-operand sums match direct arithmetic
    #[test]
    fn prop_addition_matches(a in 1u32..100_000, b in 0u32..100_000) {
        let mut driver = TrackerDriver::new();
        let keys = format!("{a}+{b}=");
        prop_assert_eq!(driver.press_sequence(&keys).unwrap(), (a + b).to_string());
    }
}

// ===== Front-end parity =====

#[cfg(feature = "tui")]
proptest! {
    /// The terminal view-model shows exactly what the bare tracker shows
    #[test]
    fn prop_tui_matches_tracker(buttons in session_strategy()) {
        let mut tracker = InputTracker::new();
        let mut driver = TuiDriver::new();
        for button in buttons {
            let expected = tracker.press(button).to_string();
            let shown = driver.press_label(button.label()).unwrap();
            prop_assert_eq!(shown, expected);
            prop_assert_eq!(driver.expression(), tracker.expression());
        }
    }
}
