//! Summary progress gauge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Gauge, Widget},
};

use crate::presentation::theme::Theme;

/// Horizontal bar filled to a percentage.
pub struct ProgressBar<'a> {
    percent: u8,
    label: &'a str,
    theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    /// Creates bar at `percent`.
    #[must_use]
    pub fn new(percent: u8, theme: &'a Theme) -> Self {
        Self {
            percent: percent.min(100),
            label: "",
            theme,
        }
    }

    /// Sets label shown left of the gauge.
    #[must_use]
    pub const fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = if self.label.is_empty() {
            format!("{}%", self.percent)
        } else {
            format!("{} {}%", self.label, self.percent)
        };

        Gauge::default()
            .gauge_style(Style::default().fg(self.theme.accent))
            .style(self.theme.base_style)
            .percent(u16::from(self.percent))
            .label(Span::raw(text))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_shows_percentage() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        ProgressBar::new(42, &theme)
            .label("Generating")
            .render(area, &mut buf);

        let line: String = (0..30).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(line.contains("Generating 42%"));
    }

    #[test]
    fn test_percent_is_clamped() {
        let theme = Theme::default();
        assert_eq!(ProgressBar::new(250, &theme).percent, 100);
    }
}
