//! Colour palette

use ratatui::style::{Color, Modifier, Style};

use crate::config::{ConfigError, ThemeConfig};
use crate::tui::keypad::ButtonKind;

/// Resolved terminal colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Window and display background
    pub background: Color,
    /// Digit and point keys
    pub digit: Color,
    /// Clear, sign toggle and remainder keys
    pub function: Color,
    /// Operator and equals keys
    pub operator: Color,
    /// Labels and display text
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0x1C, 0x1C, 0x1C),
            digit: Color::Rgb(0x80, 0x80, 0x80),
            function: Color::Rgb(0x50, 0x50, 0x50),
            operator: Color::Rgb(0xFF, 0x95, 0x00),
            text: Color::Rgb(0xDC, 0xDC, 0xDC),
        }
    }
}

impl Palette {
    /// Parses the configured colours
    pub fn from_theme(theme: &ThemeConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            background: parse_color("background", &theme.background)?,
            digit: parse_color("digit", &theme.digit)?,
            function: parse_color("function", &theme.function)?,
            operator: parse_color("operator", &theme.operator)?,
            text: parse_color("text", &theme.text)?,
        })
    }

    /// Fill colour of a key
    #[must_use]
    pub const fn key_color(&self, kind: ButtonKind) -> Color {
        match kind {
            ButtonKind::Digit => self.digit,
            ButtonKind::Function => self.function,
            ButtonKind::Operator => self.operator,
        }
    }

    /// Style of a key, inverted while it is highlighted
    #[must_use]
    pub fn key_style(&self, kind: ButtonKind, pressed: bool) -> Style {
        let style = Style::default().fg(self.text).bg(self.key_color(kind));
        if pressed {
            style
                .fg(self.key_color(kind))
                .bg(self.text)
                .add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Style of the display area
    #[must_use]
    pub fn display_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }
}

fn parse_color(name: &str, value: &str) -> Result<Color, ConfigError> {
    value
        .trim()
        .parse::<Color>()
        .map_err(|_| ConfigError::invalid(format!("theme.{name}: unknown colour '{value}'")))
}
