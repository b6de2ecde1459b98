//! Main application orchestrator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::{mpsc, watch};
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::{Effect, EffectRunner, Outcome, Session, SessionTimings};
use crate::domain::ports::{BackendPort, ClipboardPort};
use crate::infrastructure::config::UiConfig;
use crate::presentation::events::EventResult;
use crate::presentation::theme::Theme;
use crate::presentation::ui::{MainScreen, MainScreenAction, MainScreenState};

const TICK_RATE: Duration = Duration::from_millis(100);

/// Terminal client driving a [`Session`].
pub struct App {
    session: Session,
    screen: MainScreenState,
    runner: EffectRunner,
    progress_rx: watch::Receiver<u8>,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
    outcome_rx: mpsc::UnboundedReceiver<Outcome>,
    exiting: bool,
}

impl App {
    /// Creates app over the given ports. `initial_repo` prefills the input.
    #[must_use]
    pub fn new(
        backend: Arc<dyn BackendPort>,
        clipboard: Arc<dyn ClipboardPort>,
        ui: &UiConfig,
        initial_repo: Option<&str>,
    ) -> Self {
        let runner = EffectRunner::new(backend, clipboard).with_tick_period(ui.progress_tick());
        let progress_rx = runner.subscribe_progress();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        let timings = SessionTimings {
            copy_feedback: ui.copy_feedback(),
            ..SessionTimings::default()
        };
        let session = Session::new(timings)
            .with_summary_max_lines(ui.summary_max_lines)
            .with_dark_mode(ui.dark_mode);

        let screen = match initial_repo {
            Some(repo) => MainScreenState::new().with_repo(repo),
            None => MainScreenState::new(),
        };

        Self {
            session,
            screen,
            runner,
            progress_rx,
            outcome_tx,
            outcome_rx,
            exiting: false,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.dispatch(self.session.start());

        let mut terminal_events = EventStream::new();
        let mut tick_interval = interval(TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(outcome) = self.outcome_rx.recv() => {
                    self.session.apply(outcome, Instant::now());
                }

                Ok(()) = self.progress_rx.changed() => {
                    let value = *self.progress_rx.borrow_and_update();
                    self.session.set_progress(value);
                }

                _ = tick_interval.tick() => {
                    self.on_tick(Instant::now());
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.exiting = true;
                    }
                }
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn on_tick(&mut self, now: Instant) {
        self.session.tick(now);
        if self.session.take_summary_focus_request() {
            self.screen.focus_summaries();
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let theme = Theme::for_mode(self.session.is_dark_mode());
        frame.render_stateful_widget(
            MainScreen::new(&self.session, &theme),
            frame.area(),
            &mut self.screen,
        );
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        let effect = match self.screen.handle_key(key, &self.session) {
            MainScreenAction::None => None,
            MainScreenAction::Quit => return EventResult::Exit,
            MainScreenAction::FetchFiles(input) => self.session.fetch_files(&input),
            MainScreenAction::ToggleFile(path) => {
                self.session.toggle_file(&path);
                None
            }
            MainScreenAction::GenerateSummaries => self.session.generate_summaries(),
            MainScreenAction::GenerateTestCode(index) => self.session.generate_test_code(index),
            MainScreenAction::CreatePullRequest(index) => self.session.create_pull_request(index),
            MainScreenAction::CopyCode(index) => self.session.copy_code(index),
            MainScreenAction::ToggleSummaryText(index) => {
                self.session.toggle_summary_text(index);
                None
            }
            MainScreenAction::ToggleDarkMode => {
                self.session.toggle_dark_mode();
                None
            }
            MainScreenAction::DismissAlert => {
                self.session.dismiss_alert();
                None
            }
        };

        if let Some(effect) = effect {
            self.dispatch(effect);
        }

        EventResult::Continue
    }

    /// Runs an effect in the background and feeds its outcome back.
    fn dispatch(&self, effect: Effect) {
        debug!(?effect, "Dispatching effect");

        let runner = self.runner.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = runner.run(effect).await;
            let _ = tx.send(outcome);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockBackend, MockClipboard};
    use crossterm::event::KeyModifiers;

    fn press(code: crossterm::event::KeyCode) -> Event {
        Event::Key(KeyEvent::new_with_kind(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Press,
        ))
    }

    fn app(backend: MockBackend) -> App {
        App::new(
            Arc::new(backend),
            Arc::new(MockClipboard::new()),
            &UiConfig::default(),
            Some("octocat/Hello-World"),
        )
    }

    #[tokio::test]
    async fn test_enter_in_input_lists_files() {
        let backend = MockBackend::new().with_files(Ok(vec!["a.js".to_string()]));
        let mut app = app(backend);

        app.handle_terminal_event(press(crossterm::event::KeyCode::Enter));
        assert!(app.session.is_loading_files());

        let outcome = app.outcome_rx.recv().await.unwrap();
        app.session.apply(outcome, Instant::now());

        assert_eq!(app.session.files().files(), ["a.js"]);
    }

    #[tokio::test]
    async fn test_ctrl_c_exits() {
        let mut app = app(MockBackend::new());
        let event = Event::Key(KeyEvent::new_with_kind(
            crossterm::event::KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        ));

        assert_eq!(app.handle_terminal_event(event), EventResult::Exit);
    }

    #[tokio::test]
    async fn test_key_release_is_ignored() {
        let mut app = app(MockBackend::new());
        let event = Event::Key(KeyEvent::new_with_kind(
            crossterm::event::KeyCode::Char('x'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));

        app.handle_terminal_event(event);
        assert_eq!(app.screen.input_value(), "octocat/Hello-World");
    }

    #[tokio::test]
    async fn test_summary_focus_follows_tick() {
        let mut app = app(MockBackend::new());
        app.session.fetch_files("octocat/Hello-World");
        app.session.apply(
            Outcome::FilesLoaded(Ok(vec!["a.js".to_string()])),
            Instant::now(),
        );
        app.session.toggle_file("a.js");
        app.session.generate_summaries();

        let now = Instant::now();
        app.session.apply(
            Outcome::SummariesLoaded(Ok(vec![crate::domain::Summary::parse("**a.js**: x")])),
            now,
        );
        app.on_tick(now + Duration::from_millis(300));

        assert_eq!(app.screen.focus(), crate::presentation::ui::Focus::Summaries);
    }
}
