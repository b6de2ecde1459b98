//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// One-line bar with left and right content.
#[derive(Debug, Clone)]
pub struct StatusBar {
    left: String,
    right: String,
    level: StatusLevel,
    base: Style,
}

impl StatusBar {
    /// Creates empty bar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            level: StatusLevel::Info,
            base: Style::default(),
        }
    }

    /// Sets left text.
    #[must_use]
    pub fn left(mut self, content: impl Into<String>) -> Self {
        self.left = content.into();
        self
    }

    /// Sets right text.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }

    /// Sets severity.
    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the style the bar is painted on.
    #[must_use]
    pub const fn base(mut self, style: Style) -> Self {
        self.base = style;
        self
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self
            .base
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);

        let width = area.width as usize;
        let left_len = self.left.width();
        let right_len = self.right.width();

        let mut spans = vec![Span::styled(&self.left, style)];

        let padding = width.saturating_sub(left_len + right_len);
        if padding > 0 {
            spans.push(Span::styled(" ".repeat(padding), self.base));
        }

        if !self.right.is_empty() {
            spans.push(Span::styled(&self.right, self.base));
        }

        Paragraph::new(Line::from(spans))
            .style(self.base)
            .render(area, buf);
    }
}
