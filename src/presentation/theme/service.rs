use ratatui::style::{Color, Modifier, Style};

/// Colors and styles of the terminal UI.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Highlight color.
    pub accent: Color,
    /// Default text and background.
    pub base_style: Style,
    /// Secondary text.
    pub dimmed_style: Style,
    /// Cursor row.
    pub selection_style: Style,
    /// Unfocused pane border.
    pub border_style: Style,
    /// Focused pane border.
    pub focused_border_style: Style,
    /// Generated code block.
    pub code_style: Style,
    /// Success alerts and marks.
    pub success: Color,
    /// Error alerts.
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Returns dark or light theme.
    #[must_use]
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    /// Light palette.
    #[must_use]
    pub fn light() -> Self {
        let accent = Color::Blue;
        Self {
            accent,
            base_style: Style::default().fg(Color::Black).bg(Color::White),
            dimmed_style: Style::default().fg(Color::DarkGray).bg(Color::White),
            selection_style: Style::default()
                .bg(Color::Rgb(210, 225, 250))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(Color::Gray),
            focused_border_style: Style::default().fg(accent),
            code_style: Style::default().fg(Color::Black).bg(Color::Rgb(240, 240, 240)),
            success: Color::Green,
            error: Color::Red,
        }
    }

    /// Dark palette.
    #[must_use]
    pub fn dark() -> Self {
        let accent = Color::Cyan;
        Self {
            accent,
            base_style: Style::default().fg(Color::White).bg(Color::Black),
            dimmed_style: Style::default().fg(Color::Gray).bg(Color::Black),
            selection_style: Style::default()
                .bg(Color::Rgb(30, 50, 70))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(Color::DarkGray),
            focused_border_style: Style::default().fg(accent),
            code_style: Style::default().fg(Color::LightGreen).bg(Color::Rgb(20, 20, 20)),
            success: Color::LightGreen,
            error: Color::LightRed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selects_palette() {
        assert_eq!(Theme::for_mode(true).accent, Color::Cyan);
        assert_eq!(Theme::for_mode(false).accent, Color::Blue);
        assert_eq!(Theme::default().base_style.bg, Some(Color::White));
    }
}
