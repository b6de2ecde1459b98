//! Single screen of the client: repository input, file list and summaries.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use super::alert_popup::AlertPopup;
use super::utils::wrap_line;
use crate::application::Session;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, KeyHint, ProgressBar, StatusBar, StatusLevel, TextInput,
};

const INPUT_HINTS: &[KeyHint] = &[
    KeyHint::new("Enter", "Fetch files"),
    KeyHint::new("Tab", "Next pane"),
    KeyHint::new("C-d", "Theme"),
    KeyHint::new("C-c", "Quit"),
];

const FILE_HINTS: &[KeyHint] = &[
    KeyHint::new("Space", "Select"),
    KeyHint::new("g", "Summaries"),
    KeyHint::new("Tab", "Next pane"),
    KeyHint::new("q", "Quit"),
];

const SUMMARY_HINTS: &[KeyHint] = &[
    KeyHint::new("t", "Test code"),
    KeyHint::new("r", "Read more"),
    KeyHint::new("c", "Copy"),
    KeyHint::new("p", "Create PR"),
    KeyHint::new("q", "Quit"),
];

const ALERT_HINTS: &[KeyHint] = &[KeyHint::new("Enter", "Dismiss")];

/// Pane receiving key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Repository input.
    #[default]
    RepoInput,
    /// File list.
    Files,
    /// Summary cards.
    Summaries,
}

impl Focus {
    /// Returns the next pane.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::RepoInput => Self::Files,
            Self::Files => Self::Summaries,
            Self::Summaries => Self::RepoInput,
        }
    }

    /// Returns the previous pane.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::RepoInput => Self::Summaries,
            Self::Files => Self::RepoInput,
            Self::Summaries => Self::Files,
        }
    }

    /// Returns footer label of the pane.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RepoInput => "REPO",
            Self::Files => "FILES",
            Self::Summaries => "SUMMARIES",
        }
    }
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainScreenAction {
    /// Key was consumed or ignored.
    None,
    /// Leave the application.
    Quit,
    /// List files of the typed repository.
    FetchFiles(String),
    /// Toggle selection of a file.
    ToggleFile(String),
    /// Request summaries.
    GenerateSummaries,
    /// Request test code for a card.
    GenerateTestCode(usize),
    /// Open a pull request for a card.
    CreatePullRequest(usize),
    /// Copy code of a card.
    CopyCode(usize),
    /// Expand or collapse a card.
    ToggleSummaryText(usize),
    /// Switch theme.
    ToggleDarkMode,
    /// Close the alert popup.
    DismissAlert,
}

/// Cursor and focus state of the main screen.
#[derive(Debug, Clone)]
pub struct MainScreenState {
    input: TextInput,
    focus: Focus,
    files: ListState,
    summary_cursor: usize,
    summary_scroll: u16,
}

impl Default for MainScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl MainScreenState {
    /// Creates state focused on the input.
    #[must_use]
    pub fn new() -> Self {
        let mut input =
            TextInput::new(" Repository ").placeholder("owner/repo (e.g., facebook/react)");
        input.set_focused(true);

        Self {
            input,
            focus: Focus::RepoInput,
            files: ListState::default(),
            summary_cursor: 0,
            summary_scroll: 0,
        }
    }

    /// Prefills the repository input.
    #[must_use]
    pub fn with_repo(mut self, repo: &str) -> Self {
        self.input.set_value(repo);
        self
    }

    /// Returns focused pane.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Moves focus to `focus`.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.input.set_focused(focus == Focus::RepoInput);
    }

    /// Moves focus to the first summary.
    pub fn focus_summaries(&mut self) {
        self.summary_cursor = 0;
        self.summary_scroll = 0;
        self.set_focus(Focus::Summaries);
    }

    /// Returns typed repository text.
    #[must_use]
    pub fn input_value(&self) -> &str {
        self.input.value()
    }

    fn clamp_cursors(&mut self, session: &Session) {
        let file_count = session.files().len();
        match self.files.selected() {
            _ if file_count == 0 => self.files.select(None),
            Some(i) if i >= file_count => self.files.select(Some(file_count - 1)),
            None => self.files.select(Some(0)),
            Some(_) => {}
        }

        let summary_count = session.board().len();
        self.summary_cursor = self.summary_cursor.min(summary_count.saturating_sub(1));
    }

    /// Translates a key press into an action.
    pub fn handle_key(&mut self, key: KeyEvent, session: &Session) -> MainScreenAction {
        if EventHandler::is_force_quit_event(&key) {
            return MainScreenAction::Quit;
        }

        if session.current_alert().is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                    MainScreenAction::DismissAlert
                }
                _ => MainScreenAction::None,
            };
        }

        if EventHandler::is_theme_toggle_event(&key) {
            return MainScreenAction::ToggleDarkMode;
        }
        if EventHandler::is_focus_prev_event(&key) {
            self.set_focus(self.focus.prev());
            return MainScreenAction::None;
        }
        if EventHandler::is_focus_next_event(&key) {
            self.set_focus(self.focus.next());
            return MainScreenAction::None;
        }

        self.clamp_cursors(session);

        match self.focus {
            Focus::RepoInput => self.handle_input_key(key),
            Focus::Files => self.handle_files_key(key, session),
            Focus::Summaries => self.handle_summaries_key(key, session),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> MainScreenAction {
        match key.code {
            KeyCode::Enter => return MainScreenAction::FetchFiles(self.input_value().to_string()),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.input_char(c);
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_start(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Down | KeyCode::Esc => self.set_focus(Focus::Files),
            _ => {}
        }
        MainScreenAction::None
    }

    fn handle_files_key(&mut self, key: KeyEvent, session: &Session) -> MainScreenAction {
        if EventHandler::is_quit_event(&key) {
            return MainScreenAction::Quit;
        }

        let count = session.files().len();
        if EventHandler::is_up_event(&key) {
            match self.files.selected() {
                Some(0) | None => self.set_focus(Focus::RepoInput),
                Some(i) => self.files.select(Some(i - 1)),
            }
            return MainScreenAction::None;
        }
        if EventHandler::is_down_event(&key) {
            if let Some(i) = self.files.selected()
                && i + 1 < count
            {
                self.files.select(Some(i + 1));
            }
            return MainScreenAction::None;
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => self
                .files
                .selected()
                .and_then(|i| session.files().files().get(i))
                .map_or(MainScreenAction::None, |path| {
                    MainScreenAction::ToggleFile(path.clone())
                }),
            KeyCode::Char('g') => MainScreenAction::GenerateSummaries,
            KeyCode::Char('/' | 'i') => {
                self.set_focus(Focus::RepoInput);
                MainScreenAction::None
            }
            _ => MainScreenAction::None,
        }
    }

    fn handle_summaries_key(&mut self, key: KeyEvent, session: &Session) -> MainScreenAction {
        if EventHandler::is_quit_event(&key) {
            return MainScreenAction::Quit;
        }

        let count = session.board().len();
        if EventHandler::is_up_event(&key) {
            self.summary_cursor = self.summary_cursor.saturating_sub(1);
            return MainScreenAction::None;
        }
        if EventHandler::is_down_event(&key) {
            if self.summary_cursor + 1 < count {
                self.summary_cursor += 1;
            }
            return MainScreenAction::None;
        }

        if count == 0 {
            return match key.code {
                KeyCode::Char('g') => MainScreenAction::GenerateSummaries,
                _ => MainScreenAction::None,
            };
        }

        let index = self.summary_cursor;
        match key.code {
            KeyCode::Char('t') | KeyCode::Enter => MainScreenAction::GenerateTestCode(index),
            KeyCode::Char('r' | ' ') => MainScreenAction::ToggleSummaryText(index),
            KeyCode::Char('c') => MainScreenAction::CopyCode(index),
            KeyCode::Char('p') => MainScreenAction::CreatePullRequest(index),
            KeyCode::Char('g') => MainScreenAction::GenerateSummaries,
            _ => MainScreenAction::None,
        }
    }
}

/// Main screen widget drawn from the session.
pub struct MainScreen<'a> {
    session: &'a Session,
    theme: &'a Theme,
}

impl<'a> MainScreen<'a> {
    /// Creates screen over `session`.
    #[must_use]
    pub const fn new(session: &'a Session, theme: &'a Theme) -> Self {
        Self { session, theme }
    }

    fn pane_block(&self, title: String, focused: bool) -> Block<'static> {
        let border_style = if focused {
            self.theme.focused_border_style
        } else {
            self.theme.border_style
        };

        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title)
            .style(self.theme.base_style)
    }

    fn render_files(&self, area: Rect, buf: &mut Buffer, state: &mut MainScreenState) {
        let files = self.session.files();
        let title = if files.is_empty() {
            " Files ".to_string()
        } else {
            format!(" Files ({}/{} selected) ", files.selected().len(), files.len())
        };
        let block = self.pane_block(title, state.focus == Focus::Files);

        let placeholder = if self.session.is_loading_files() {
            Some("Loading files...")
        } else if files.is_empty() && self.session.has_fetched() {
            Some("No files listed.")
        } else if files.is_empty() {
            Some("Enter a repository as owner/repo and press Enter.")
        } else {
            None
        };

        if let Some(text) = placeholder {
            Paragraph::new(Span::styled(text, self.theme.dimmed_style))
                .block(block)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = files
            .files()
            .iter()
            .map(|path| {
                let mark = if files.is_selected(path) { "[x] " } else { "[ ] " };
                ListItem::new(format!("{mark}{path}"))
            })
            .collect();

        let highlight = if state.focus == Focus::Files {
            self.theme.selection_style
        } else {
            Style::default()
        };

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("> ");

        StatefulWidget::render(list, area, buf, &mut state.files);
    }

    /// Builds summary cards and returns the first row of each card.
    fn summary_lines(&self, width: usize, cursor: usize, focused: bool) -> (Vec<Line<'a>>, Vec<usize>) {
        let theme = self.theme;
        let mut lines = Vec::new();
        let mut starts = Vec::new();

        for (index, summary) in self.session.board().summaries().iter().enumerate() {
            starts.push(lines.len());

            let selected = focused && index == cursor;
            let title_style = if selected {
                theme.selection_style
            } else {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            };
            let marker = if selected { "> " } else { "  " };
            let label = if summary.file_label().is_empty() {
                format!("Summary {}", index + 1)
            } else {
                summary.file_label().to_string()
            };
            lines.push(Line::from(Span::styled(format!("{marker}{label}"), title_style)));

            if let Some(text) = self.session.summary_text(index) {
                for line in text.visible_lines() {
                    for row in wrap_line(line, width.saturating_sub(2)) {
                        lines.push(Line::from(format!("  {row}")));
                    }
                }
                if let Some(toggle) = text.toggle_label() {
                    lines.push(Line::from(Span::styled(
                        format!("  [{toggle}]"),
                        theme.dimmed_style.add_modifier(Modifier::UNDERLINED),
                    )));
                }
            }

            if self.session.is_generating_code(index) {
                lines.push(Line::from(Span::styled(
                    "  Generating test code...",
                    theme.dimmed_style.add_modifier(Modifier::ITALIC),
                )));
            }

            if let Some(code) = self.session.board().code(index) {
                let mut header = vec![Span::styled(
                    "  Test code",
                    Style::default().add_modifier(Modifier::BOLD),
                )];
                if self.session.is_copied(index) {
                    header.push(Span::styled(
                        "  Copied",
                        Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
                    ));
                }
                lines.push(Line::from(header));
                for code_line in code.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("  {code_line}"),
                        theme.code_style,
                    )));
                }
            }

            lines.push(Line::from(""));
        }

        (lines, starts)
    }

    fn render_summaries(&self, area: Rect, buf: &mut Buffer, state: &mut MainScreenState) {
        let focused = state.focus == Focus::Summaries;
        let block = self.pane_block(" Test case summaries ".to_string(), focused);

        if self.session.board().is_empty() {
            let text = if self.session.is_generating_summaries() {
                "Generating summaries..."
            } else {
                "Select files and press g to generate test case summaries."
            };
            Paragraph::new(Span::styled(text, self.theme.dimmed_style))
                .block(block)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let inner = block.inner(area);
        let (lines, starts) =
            self.summary_lines(usize::from(inner.width), state.summary_cursor, focused);

        let cursor_start = starts.get(state.summary_cursor).copied().unwrap_or(0);
        let cursor_start = u16::try_from(cursor_start).unwrap_or(u16::MAX);
        let visible = inner.height.max(1);
        if cursor_start < state.summary_scroll
            || cursor_start >= state.summary_scroll.saturating_add(visible)
        {
            state.summary_scroll = cursor_start;
        }

        Paragraph::new(lines)
            .block(block)
            .scroll((state.summary_scroll, 0))
            .render(area, buf);
    }
}

impl StatefulWidget for MainScreen<'_> {
    type State = MainScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.clamp_cursors(self.session);
        buf.set_style(area, self.theme.base_style);

        let progress_height = u16::from(self.session.is_generating_summaries());
        let [header_area, input_area, body_area, progress_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(progress_height),
            Constraint::Length(1),
        ])
        .areas(area);

        let greeting = if self.session.greeting().is_empty() {
            "Connecting to backend..."
        } else {
            self.session.greeting()
        };
        let title = self
            .session
            .repo()
            .map_or_else(|| " casegen".to_string(), |repo| format!(" casegen  {repo}"));
        let level = if self.session.greeting().is_empty() {
            StatusLevel::Warning
        } else {
            StatusLevel::Success
        };
        let header = StatusBar::new()
            .left(title)
            .right(format!("{greeting} "))
            .level(level)
            .base(self.theme.base_style);
        (&header).render(header_area, buf);

        state.input.render_themed(input_area, buf, self.theme);

        let [files_area, summaries_area] =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .areas(body_area);
        self.render_files(files_area, buf, state);
        self.render_summaries(summaries_area, buf, state);

        if progress_height > 0 {
            ProgressBar::new(self.session.progress(), self.theme)
                .label("Generating summaries")
                .render(progress_area, buf);
        }

        let alert = self.session.current_alert();
        let hints = match (alert, state.focus) {
            (Some(_), _) => ALERT_HINTS,
            (None, Focus::RepoInput) => INPUT_HINTS,
            (None, Focus::Files) => FILE_HINTS,
            (None, Focus::Summaries) => SUMMARY_HINTS,
        };
        let mode = if self.session.is_dark_mode() { "dark " } else { "light " };
        FooterBar::new(hints)
            .focus_name(state.focus.display_name())
            .right_info(Some(mode))
            .style(FooterBarStyle::from_theme(self.theme))
            .render(footer_area, buf);

        if let Some(alert) = alert {
            AlertPopup::new(alert, self.theme)
                .pending(self.session.pending_alerts())
                .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    use crate::application::Outcome;
    use crate::domain::Summary;
    use crossterm::event::KeyEventKind;
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn session_with_files() -> Session {
        let mut session = Session::default();
        session.fetch_files("octocat/Hello-World");
        session.apply(
            Outcome::FilesLoaded(Ok(vec!["src/a.js".to_string(), "src/b.js".to_string()])),
            Instant::now(),
        );
        session
    }

    fn draw(session: &Session, state: &mut MainScreenState) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_stateful_widget(MainScreen::new(session, &theme), frame.area(), state);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_typing_then_enter_fetches() {
        let session = Session::default();
        let mut state = MainScreenState::new();

        for c in "facebook/react".chars() {
            state.handle_key(key(KeyCode::Char(c)), &session);
        }

        assert_eq!(
            state.handle_key(key(KeyCode::Enter), &session),
            MainScreenAction::FetchFiles("facebook/react".to_string())
        );
    }

    #[test]
    fn test_q_types_into_input_but_quits_elsewhere() {
        let session = session_with_files();
        let mut state = MainScreenState::new();

        assert_eq!(
            state.handle_key(key(KeyCode::Char('q')), &session),
            MainScreenAction::None
        );
        assert_eq!(state.input_value(), "q");

        state.set_focus(Focus::Files);
        assert_eq!(
            state.handle_key(key(KeyCode::Char('q')), &session),
            MainScreenAction::Quit
        );
    }

    #[test]
    fn test_file_cursor_toggles_selected_path() {
        let session = session_with_files();
        let mut state = MainScreenState::new();
        state.set_focus(Focus::Files);

        state.handle_key(key(KeyCode::Down), &session);

        assert_eq!(
            state.handle_key(key(KeyCode::Char(' ')), &session),
            MainScreenAction::ToggleFile("src/b.js".to_string())
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Char('g')), &session),
            MainScreenAction::GenerateSummaries
        );
    }

    #[test]
    fn test_alert_captures_keys() {
        let mut session = Session::default();
        session.fetch_files("not-a-repo");
        let mut state = MainScreenState::new();

        assert_eq!(
            state.handle_key(key(KeyCode::Char('x')), &session),
            MainScreenAction::None
        );
        assert_eq!(state.input_value(), "");
        assert_eq!(
            state.handle_key(key(KeyCode::Enter), &session),
            MainScreenAction::DismissAlert
        );
    }

    #[test]
    fn test_summary_keys_target_cursor() {
        let mut session = session_with_files();
        session.toggle_file("src/a.js");
        session.generate_summaries();
        session.apply(
            Outcome::SummariesLoaded(Ok(vec![
                Summary::parse("**src/a.js**: one"),
                Summary::parse("**src/b.js**: two"),
            ])),
            Instant::now(),
        );
        let mut state = MainScreenState::new();
        state.focus_summaries();

        state.handle_key(key(KeyCode::Char('j')), &session);

        assert_eq!(
            state.handle_key(key(KeyCode::Char('t')), &session),
            MainScreenAction::GenerateTestCode(1)
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Char('p')), &session),
            MainScreenAction::CreatePullRequest(1)
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Char('c')), &session),
            MainScreenAction::CopyCode(1)
        );
    }

    #[test]
    fn test_focus_cycles() {
        let session = Session::default();
        let mut state = MainScreenState::new();

        state.handle_key(key(KeyCode::Tab), &session);
        assert_eq!(state.focus(), Focus::Files);
        state.handle_key(key(KeyCode::Tab), &session);
        assert_eq!(state.focus(), Focus::Summaries);
        state.handle_key(
            KeyEvent::new_with_kind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyEventKind::Press),
            &session,
        );
        assert_eq!(state.focus(), Focus::Files);
    }

    #[test]
    fn test_renders_files_and_greeting() {
        let mut session = session_with_files();
        session.apply(
            Outcome::GreetingLoaded(Ok("Backend is running!".to_string())),
            Instant::now(),
        );
        session.toggle_file("src/a.js");
        let mut state = MainScreenState::new();

        let screen = draw(&session, &mut state);

        assert!(screen.contains("Backend is running!"));
        assert!(screen.contains("[x] src/a.js"));
        assert!(screen.contains("[ ] src/b.js"));
        assert!(screen.contains("Files (1/2 selected)"));
    }

    #[test]
    fn test_renders_truncated_summary_with_toggle() {
        let mut session = session_with_files();
        session.toggle_file("src/a.js");
        session.generate_summaries();
        let body = (1..=8).map(|i| format!("case {i}")).collect::<Vec<_>>().join("\n");
        session.apply(
            Outcome::SummariesLoaded(Ok(vec![Summary::parse(format!("**src/a.js**: {body}"))])),
            Instant::now(),
        );
        let mut state = MainScreenState::new();

        let screen = draw(&session, &mut state);

        assert!(screen.contains("src/a.js"));
        assert!(screen.contains("case 6"));
        assert!(!screen.contains("case 7"));
        assert!(screen.contains("[Read more]"));
        assert!(screen.contains("Generating summaries 100%"));
    }

    #[test]
    fn test_renders_alert_popup() {
        let mut session = Session::default();
        session.fetch_files("octocat");
        let mut state = MainScreenState::new();

        let screen = draw(&session, &mut state);

        assert!(screen.contains("Enter repo as owner/repo (e.g., facebook/react)"));
    }
}
