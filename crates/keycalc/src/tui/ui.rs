//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::display::FontSize;

/// Width of the calculator column
pub const CALC_WIDTH: u16 = 44;

/// Display height: the tallest font plus the border
pub const DISPLAY_HEIGHT: u16 = FontSize::Large.rows() + 2;

/// Display width inside the border of a full-width column
pub const DEFAULT_DISPLAY_WIDTH: u16 = CALC_WIDTH - 2;

/// Key bindings shown under the keypad
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "="),
    ("Esc", "clear"),
    ("x", "×"),
    ("_", "±"),
    ("q", "quit"),
];

/// Screen areas of the calculator parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Bordered display
    pub display: Rect,
    /// Bordered keypad
    pub keypad: Rect,
    /// Help line
    pub help: Rect,
}

impl AppLayout {
    /// Splits the terminal area into a centred calculator column
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let width = area.width.min(CALC_WIDTH);
        let column = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(DISPLAY_HEIGHT),
                Constraint::Min(7),
                Constraint::Length(1),
            ])
            .split(column);

        Self {
            display: chunks[0],
            keypad: chunks[1],
            help: chunks[2],
        }
    }

    /// Columns available to the display text
    #[must_use]
    pub const fn display_width(&self) -> u16 {
        self.display.width.saturating_sub(2)
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub const fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let palette = self.app.palette();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.function))
            .style(palette.display_style());

        let rows = block.inner(area).height as usize;
        let glyph_lines = self.app.fitted().lines();
        let mut lines: Vec<Line> = std::iter::repeat_with(Line::default)
            .take(rows.saturating_sub(glyph_lines.len()))
            .collect();
        lines.extend(glyph_lines.into_iter().map(Line::from));

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .style(palette.display_style().add_modifier(Modifier::BOLD))
            .block(block)
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let palette = self.app.palette();
        let mut spans = Vec::new();
        for (i, (key, action)) in HELP_SHORTCUTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(palette.operator)));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, Style::default().fg(palette.text)));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .style(Style::default().bg(palette.background))
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.app.palette().background));

        let layout = AppLayout::new(area);
        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad(), self.app.palette()).render(layout.keypad, buf);
        self.render_help(layout.help, buf);
    }
}
