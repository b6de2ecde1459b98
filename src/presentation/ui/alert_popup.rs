use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Alert, AlertLevel};
use crate::presentation::theme::Theme;

const DISMISS_HINT: &str = "Enter to dismiss";

/// Modal box showing the current alert.
pub struct AlertPopup<'a> {
    alert: &'a Alert,
    theme: &'a Theme,
    pending: usize,
}

impl<'a> AlertPopup<'a> {
    /// Creates popup for `alert`.
    #[must_use]
    pub fn new(alert: &'a Alert, theme: &'a Theme) -> Self {
        Self {
            alert,
            theme,
            pending: 1,
        }
    }

    /// Sets how many alerts are queued, the shown one included.
    #[must_use]
    pub const fn pending(mut self, pending: usize) -> Self {
        self.pending = pending;
        self
    }
}

impl Widget for AlertPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.pending > 1 {
            format!(" {} (1/{}) ", self.alert.title(), self.pending)
        } else {
            format!(" {} ", self.alert.title())
        };

        let longest_line = self
            .alert
            .message
            .lines()
            .map(UnicodeWidthStr::width)
            .chain([title.width(), DISMISS_HINT.width()])
            .max()
            .unwrap_or(0);

        let max_popup_width = 70.min(area.width.saturating_sub(2));
        let width = u16::try_from(longest_line)
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = usize::from(width.saturating_sub(2).max(1));
        let wrapped_lines: usize = self
            .alert
            .message
            .lines()
            .map(|line| line.width().max(1).div_ceil(inner_width))
            .sum();

        let height = u16::try_from(wrapped_lines)
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.height);

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let popup_area = area.intersection(Rect::new(x, y, width, height));
        if popup_area.area() == 0 {
            return;
        }

        let color = match self.alert.level {
            AlertLevel::Success => self.theme.success,
            AlertLevel::Error => self.theme.error,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(color))
            .style(self.theme.base_style);

        let mut lines: Vec<Line> = self
            .alert
            .message
            .lines()
            .map(|line| Line::from(Span::styled(line, Style::default().add_modifier(Modifier::BOLD))))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(DISMISS_HINT, self.theme.dimmed_style)));

        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });

        Clear.render(popup_area, buf);
        para.render(popup_area, buf);
    }
}
