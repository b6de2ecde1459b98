use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Key shown in the footer with what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    /// Key label.
    pub key: &'static str,
    /// Action label.
    pub label: &'static str,
}

impl KeyHint {
    /// Creates hint.
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Styles of the footer bar.
pub struct FooterBarStyle {
    /// Bar background.
    pub background: Style,
    /// Action labels.
    pub label_style: Style,
    /// Key labels.
    pub key_style: Style,
    /// Right side text.
    pub info: Style,
    /// Focused pane name.
    pub focus_indicator: Style,
}

impl FooterBarStyle {
    /// Derives styles from `theme`.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: theme.base_style,
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            focus_indicator: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            info: theme.dimmed_style,
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
            focus_indicator: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Bottom bar with key hints.
pub struct FooterBar<'a> {
    hints: &'a [KeyHint],
    focus_name: Option<&'a str>,
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    /// Creates bar with `hints`.
    #[must_use]
    pub fn new(hints: &'a [KeyHint]) -> Self {
        Self {
            hints,
            focus_name: None,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    /// Sets focused pane name.
    #[must_use]
    pub const fn focus_name(mut self, name: &'a str) -> Self {
        self.focus_name = Some(name);
        self
    }

    /// Sets right side text.
    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    /// Sets styles.
    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn build_left_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        if let Some(name) = self.focus_name {
            spans.push(Span::styled(format!(" {name} "), self.style.focus_indicator));
            spans.push(Span::raw(" "));
        }

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {} ", hint.label), self.style.label_style));
            spans.push(Span::styled(format!(" {} ", hint.key), self.style.key_style));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let right_width = self
            .right_info
            .map_or(0, |s| u16::try_from(s.width()).unwrap_or(u16::MAX));
        let left_width = area.width.saturating_sub(right_width.saturating_add(1));

        let left_area = Rect::new(area.x, area.y, left_width, 1);
        Paragraph::new(Line::from(self.build_left_spans())).render(left_area, buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Span::styled(info, self.style.info)).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_and_focus_rendered() {
        let hints = [KeyHint::new("Enter", "Fetch"), KeyHint::new("Tab", "Next")];
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&hints)
            .focus_name("REPO")
            .right_info(Some("light"))
            .render(area, &mut buf);

        let line: String = (0..60).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(line.starts_with(" REPO "));
        assert!(line.contains(" Fetch  Enter "));
        assert!(line.trim_end().ends_with("light"));
    }
}
