//! On-screen keypad
//!
//! Keys can be clicked with the mouse and light up when the matching key is
//! typed. The layout is a 5x4 grid with a double-width `0`:
//!
//! ```text
//! [ C ] [ ± ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [     0     ] [ . ] [ = ]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Button, Operation};
use crate::tui::theme::Palette;

/// Colour group of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Digit,
    /// Clear, sign toggle and remainder
    Function,
    /// Arithmetic operators and equals
    Operator,
}

impl ButtonKind {
    /// Colour group of `button`
    #[must_use]
    pub const fn of(button: Button) -> Self {
        match button {
            Button::Digit(_) | Button::Point => Self::Digit,
            Button::Clear | Button::SignToggle | Button::Operator(Operation::Modulo) => {
                Self::Function
            }
            Button::Operator(_) | Button::Equals => Self::Operator,
        }
    }
}

/// A key on the keypad grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// What the key does
    pub button: Button,
    /// Grid row
    pub row: u16,
    /// Leftmost grid column
    pub col: u16,
    /// Number of columns covered
    pub span: u16,
    /// Whether the key is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a single-width key
    #[must_use]
    pub const fn new(button: Button, row: u16, col: u16) -> Self {
        Self::wide(button, row, col, 1)
    }

    /// Creates a key covering `span` columns
    #[must_use]
    pub const fn wide(button: Button, row: u16, col: u16, span: u16) -> Self {
        Self {
            button,
            row,
            col,
            span,
            pressed: false,
        }
    }

    /// The glyph printed on the key
    #[must_use]
    pub fn label(&self) -> char {
        self.button.label()
    }

    /// Colour group
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        ButtonKind::of(self.button)
    }

    /// Whether the key covers `col`
    #[must_use]
    pub const fn covers(&self, row: u16, col: u16) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: u16,
    rows: u16,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let digit = |d: u8, row, col| KeypadButton::new(Button::Digit(d), row, col);
        let op = |op: Operation, row, col| KeypadButton::new(Button::Operator(op), row, col);

        let buttons = vec![
            // Row 0: C ± % ÷
            KeypadButton::new(Button::Clear, 0, 0),
            KeypadButton::new(Button::SignToggle, 0, 1),
            op(Operation::Modulo, 0, 2),
            op(Operation::Divide, 0, 3),
            // Row 1: 7 8 9 ×
            digit(7, 1, 0),
            digit(8, 1, 1),
            digit(9, 1, 2),
            op(Operation::Multiply, 1, 3),
            // Row 2: 4 5 6 -
            digit(4, 2, 0),
            digit(5, 2, 1),
            digit(6, 2, 2),
            op(Operation::Subtract, 2, 3),
            // Row 3: 1 2 3 +
            digit(1, 3, 0),
            digit(2, 3, 1),
            digit(3, 3, 2),
            op(Operation::Add, 3, 3),
            // Row 4: 0 0 . =
            KeypadButton::wide(Button::Digit(0), 4, 0, 2),
            KeypadButton::new(Button::Point, 4, 2),
            KeypadButton::new(Button::Equals, 4, 3),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of keys
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// Gets a key by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the key covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: u16, col: u16) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds the key for `button`
    #[must_use]
    pub fn find_button(&self, button: Button) -> Option<usize> {
        self.buttons.iter().position(|b| b.button == button)
    }

    /// Releases all keys
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the key for `button`, releasing any other
    pub fn highlight(&mut self, button: Button) {
        self.release_all();
        if let Some(btn) = self.buttons.iter_mut().find(|b| b.button == button) {
            btn.set_pressed(true);
        }
    }

    /// The highlighted key, if any
    #[must_use]
    pub fn pressed(&self) -> Option<Button> {
        self.buttons.iter().find(|b| b.pressed).map(|b| b.button)
    }

    /// Returns an iterator over all keys
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Size of one grid cell inside `inner`, or None if the area is too small
    fn cell_size(&self, inner: Rect) -> Option<(u16, u16)> {
        let width = inner.width / self.cols;
        let height = inner.height / self.rows;
        (width > 0 && height > 0).then_some((width, height))
    }

    /// Screen area of a key inside the bordered keypad `area`
    #[must_use]
    pub fn button_area(&self, area: Rect, btn: &KeypadButton) -> Option<Rect> {
        let inner = inner_area(area);
        let (width, height) = self.cell_size(inner)?;
        Some(Rect {
            x: inner.x + btn.col * width,
            y: inner.y + btn.row * height,
            width: width * btn.span,
            height,
        })
    }

    /// Maps a screen position to the key under it
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Button> {
        let inner = inner_area(area);
        if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
            return None;
        }

        let (width, height) = self.cell_size(inner)?;
        let col = (x - inner.x) / width;
        let row = (y - inner.y) / height;
        if row >= self.rows || col >= self.cols {
            return None;
        }

        self.get_button_at(row, col).map(|b| b.button)
    }
}

fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    palette: &'a Palette,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub const fn new(keypad: &'a Keypad, palette: &'a Palette) -> Self {
        Self { keypad, palette }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.function))
            .style(Style::default().bg(self.palette.background))
            .render(area, buf);

        for btn in self.keypad.buttons() {
            let Some(cell) = self.keypad.button_area(area, btn) else {
                return;
            };

            // One column of background between neighbouring keys
            let face = if cell.width >= 3 {
                Rect {
                    width: cell.width - 1,
                    ..cell
                }
            } else {
                cell
            };

            let style = self.palette.key_style(btn.kind(), btn.pressed);
            buf.set_style(face, style);

            let label_x = face.x + face.width.saturating_sub(1) / 2;
            let label_y = face.y + face.height / 2;
            buf.set_string(label_x, label_y, btn.label().to_string(), style);
        }
    }
}
