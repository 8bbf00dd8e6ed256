//! Keyboard and mouse input mapping

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::{Button, Operation};

/// What a key press means to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad button
    Press(Button),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Windows reports releases too
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => Self::map_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Button::Equals),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(Button::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a typed character to a button
    #[must_use]
    pub fn map_char(c: char) -> Option<Button> {
        match c {
            'x' | 'X' => Some(Button::Operator(Operation::Multiply)),
            '_' => Some(Button::SignToggle),
            '\r' | '\n' => Some(Button::Equals),
            other => Button::from_label(other),
        }
    }

    /// Screen position of a left click, if the event is one
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> Option<(u16, u16)> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (d, c) in ('0'..='9').enumerate() {
            let event = key_event(KeyCode::Char(c));
            assert_eq!(
                handler.handle_key(event),
                KeyAction::Press(Button::Digit(d as u8))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', Operation::Add),
            ('-', Operation::Subtract),
            ('*', Operation::Multiply),
            ('x', Operation::Multiply),
            ('/', Operation::Divide),
            ('%', Operation::Modulo),
        ];
        for (c, op) in cases {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Press(Button::Operator(op)),
                "{c}"
            );
        }
    }

    #[test]
    fn test_handle_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Press(Button::Point)
        );
    }

    #[test]
    fn test_handle_equals_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Press(Button::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Press(Button::Equals)
        );
    }

    #[test]
    fn test_handle_clear_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Esc, KeyCode::Delete, KeyCode::Char('c')] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Press(Button::Clear)
            );
        }
    }

    #[test]
    fn test_handle_sign_toggle() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('_'))),
            KeyAction::Press(Button::SignToggle)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Char('a'),
            KeyCode::Char('('),
            KeyCode::Char('^'),
            KeyCode::Left,
            KeyCode::Tab,
            KeyCode::Backspace,
        ] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None);
        }
    }

    // ===== Quit tests =====

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_other_ctrl_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('5'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Char('5'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    // ===== Mouse tests =====

    #[test]
    fn test_left_click_position() {
        let handler = InputHandler::new();
        let event = mouse_event(MouseEventKind::Down(MouseButton::Left), 4, 7);
        assert_eq!(handler.handle_mouse(event), Some((4, 7)));
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let handler = InputHandler::new();
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            assert_eq!(handler.handle_mouse(mouse_event(kind, 1, 1)), None);
        }
    }
}
