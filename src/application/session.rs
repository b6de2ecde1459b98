//! Client session state.
//!
//! Every user action is a transition on [`Session`]. Transitions that need
//! the backend return an [`Effect`]; its [`Outcome`] is applied back with
//! [`Session::apply`]. Delayed changes are deadlines fired by
//! [`Session::tick`].

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::application::effects::{Effect, Outcome};
use crate::application::services::progress_ticker::PROGRESS_COMPLETE;
use crate::application::services::{AlertQueue, DEFAULT_MAX_LINES, ExpandableText};
use crate::application::use_cases::EMPTY_SELECTION_MESSAGE;
use crate::domain::entities::{FileSelection, RepoRef, Summary, SummaryBoard};
use crate::domain::errors::BackendError;
use crate::domain::Alert;
use crate::domain::ports::{PullRequestRequest, SummaryRequest, TestCodeRequest};

/// Alert text when listing files fails.
pub const FETCH_FILES_FAILED: &str = "Failed to fetch files";
/// Alert text when summary generation fails.
pub const SUMMARIES_FAILED: &str = "Failed to generate summaries";

/// Delays of the cosmetic follow-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimings {
    /// Delay before focus moves to fresh summaries.
    pub focus_delay: Duration,
    /// Time the full progress bar stays visible after settlement.
    pub progress_reset_delay: Duration,
    /// Time a copied mark stays visible.
    pub copy_feedback: Duration,
}

impl Default for SessionTimings {
    fn default() -> Self {
        Self {
            focus_delay: Duration::from_millis(300),
            progress_reset_delay: Duration::from_millis(500),
            copy_feedback: Duration::from_millis(1500),
        }
    }
}

/// Interaction state of the client.
#[derive(Debug)]
pub struct Session {
    timings: SessionTimings,
    summary_max_lines: usize,
    greeting: String,
    repo: Option<RepoRef>,
    has_fetched: bool,
    files: FileSelection,
    files_loading: bool,
    board: SummaryBoard,
    texts: Vec<ExpandableText>,
    summary_loading: bool,
    progress: u8,
    progress_reset_at: Option<Instant>,
    focus_summaries_at: Option<Instant>,
    focus_summaries_requested: bool,
    code_in_flight: HashSet<usize>,
    copied_until: HashMap<usize, Instant>,
    dark_mode: bool,
    alerts: AlertQueue,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionTimings::default())
    }
}

impl Session {
    /// Creates an idle session.
    #[must_use]
    pub fn new(timings: SessionTimings) -> Self {
        Self {
            timings,
            summary_max_lines: DEFAULT_MAX_LINES,
            greeting: String::new(),
            repo: None,
            has_fetched: false,
            files: FileSelection::new(),
            files_loading: false,
            board: SummaryBoard::new(),
            texts: Vec::new(),
            summary_loading: false,
            progress: 0,
            progress_reset_at: None,
            focus_summaries_at: None,
            focus_summaries_requested: false,
            code_in_flight: HashSet::new(),
            copied_until: HashMap::new(),
            dark_mode: false,
            alerts: AlertQueue::new(),
        }
    }

    /// Sets the number of summary lines shown while collapsed.
    #[must_use]
    pub fn with_summary_max_lines(mut self, max_lines: usize) -> Self {
        self.summary_max_lines = max_lines.max(1);
        self
    }

    /// Starts in dark mode.
    #[must_use]
    pub const fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    /// Effect issued once when the client starts.
    #[must_use]
    pub const fn start(&self) -> Effect {
        Effect::FetchGreeting
    }

    /// Lists files of the repository typed by the user.
    ///
    /// Malformed input raises an alert and yields no effect. Otherwise the
    /// previous listing and summaries are cleared before the request is
    /// issued.
    pub fn fetch_files(&mut self, input: &str) -> Option<Effect> {
        self.has_fetched = true;

        let repo = match RepoRef::parse(input) {
            Ok(repo) => repo,
            Err(e) => {
                debug!(input = %input, "Rejected repository input");
                self.alerts.push(Alert::error(e.user_message()));
                return None;
            }
        };

        self.files.clear();
        self.clear_summaries();
        self.files_loading = true;
        self.repo = Some(repo.clone());

        Some(Effect::ListFiles(repo))
    }

    /// Toggles selection of a listed file. Inert while a listing is loading.
    pub fn toggle_file(&mut self, path: &str) -> bool {
        !self.files_loading && self.files.toggle(path)
    }

    /// Requests summaries for the selected files.
    pub fn generate_summaries(&mut self) -> Option<Effect> {
        if self.summary_loading || self.files_loading {
            return None;
        }

        let Some(repo) = self.repo.as_ref().filter(|_| !self.files.selected().is_empty()) else {
            self.alerts.push(Alert::error(EMPTY_SELECTION_MESSAGE));
            return None;
        };

        let request = SummaryRequest::new(repo, self.files.selected().to_vec());
        self.summary_loading = true;
        self.progress = 0;
        self.progress_reset_at = None;

        Some(Effect::GenerateSummaries(request))
    }

    /// Records a progress value published by the ticker.
    ///
    /// Ignored outside a pending summary request.
    pub fn set_progress(&mut self, value: u8) {
        if self.summary_loading && self.progress_reset_at.is_none() {
            self.progress = value.min(PROGRESS_COMPLETE);
        }
    }

    /// Requests test code for the summary at `index`.
    pub fn generate_test_code(&mut self, index: usize) -> Option<Effect> {
        if self.code_in_flight.contains(&index) {
            return None;
        }

        let summary = self.board.get(index)?;
        let repo = self.repo.as_ref()?;
        let request = TestCodeRequest::new(repo, summary.file_label(), summary.raw());

        self.code_in_flight.insert(index);

        Some(Effect::GenerateTestCode {
            round: self.board.round(),
            index,
            request,
        })
    }

    /// Opens a pull request with the code generated for `index`.
    #[must_use]
    pub fn create_pull_request(&self, index: usize) -> Option<Effect> {
        let code = self.board.code(index)?;
        let summary = self.board.get(index)?;

        Some(Effect::CreatePullRequest(PullRequestRequest::new(
            code,
            summary.file_label(),
        )))
    }

    /// Copies the code generated for `index`.
    #[must_use]
    pub fn copy_code(&self, index: usize) -> Option<Effect> {
        let code = self.board.code(index)?;

        Some(Effect::CopyCode {
            index,
            code: code.to_string(),
        })
    }

    /// Expands or collapses the summary text at `index`.
    pub fn toggle_summary_text(&mut self, index: usize) {
        if let Some(text) = self.texts.get_mut(index) {
            text.toggle();
        }
    }

    /// Flips between the light and dark theme.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Closes the alert currently shown.
    pub fn dismiss_alert(&mut self) {
        self.alerts.dismiss();
    }

    /// Applies a settled effect.
    pub fn apply(&mut self, outcome: Outcome, now: Instant) {
        match outcome {
            Outcome::GreetingLoaded(Ok(message)) => {
                self.greeting = message;
            }
            Outcome::GreetingLoaded(Err(_)) => {}
            Outcome::FilesLoaded(result) => {
                self.files_loading = false;
                match result {
                    Ok(files) => {
                        self.files.set_files(files);
                        self.clear_summaries();
                    }
                    Err(_) => {
                        self.files.clear();
                        self.alerts.push(Alert::error(FETCH_FILES_FAILED));
                    }
                }
            }
            Outcome::SummariesLoaded(result) => {
                self.progress = PROGRESS_COMPLETE;
                self.progress_reset_at = Some(now + self.timings.progress_reset_delay);
                match result {
                    Ok(summaries) => {
                        self.replace_summaries(summaries);
                        self.focus_summaries_at = Some(now + self.timings.focus_delay);
                    }
                    Err(e) if e.is_validation() => {
                        self.alerts.push(Alert::error(e.user_message()));
                    }
                    Err(_) => {
                        self.alerts.push(Alert::error(SUMMARIES_FAILED));
                    }
                }
            }
            Outcome::TestCodeGenerated { round, index, code } => {
                if round == self.board.round() {
                    self.code_in_flight.remove(&index);
                    self.board.store_code(round, index, code);
                } else {
                    debug!(round, index, "Discarding test code of replaced summaries");
                }
            }
            Outcome::PullRequestCreated(result) => {
                let alert = match result {
                    Ok(url) => Alert::success(format!("PR created! View it here:\n{url}")),
                    Err(BackendError::Application { detail, .. }) => {
                        Alert::error(format!("Failed to create PR: {detail}"))
                    }
                    Err(e) => Alert::error(format!("Error: {}", e.user_message())),
                };
                self.alerts.push(alert);
            }
            Outcome::CodeCopied { index, result } => {
                if result.is_ok() {
                    self.copied_until
                        .insert(index, now + self.timings.copy_feedback);
                }
            }
        }
    }

    /// Fires deadlines that have passed.
    pub fn tick(&mut self, now: Instant) {
        if self.progress_reset_at.is_some_and(|at| at <= now) {
            self.progress_reset_at = None;
            self.progress = 0;
            self.summary_loading = false;
        }

        if self.focus_summaries_at.is_some_and(|at| at <= now) {
            self.focus_summaries_at = None;
            self.focus_summaries_requested = !self.board.is_empty();
        }

        self.copied_until.retain(|_, until| *until > now);
    }

    /// Returns true once after fresh summaries should receive focus.
    pub fn take_summary_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_summaries_requested)
    }

    fn clear_summaries(&mut self) {
        self.replace_summaries(Vec::new());
    }

    fn replace_summaries(&mut self, summaries: Vec<Summary>) {
        self.texts = summaries
            .iter()
            .map(|s| ExpandableText::new(s.body(), self.summary_max_lines))
            .collect();
        if !summaries.is_empty() {
            info!(count = summaries.len(), "Summaries replaced");
        }
        self.board.replace(summaries);
        self.code_in_flight.clear();
        self.copied_until.clear();
        self.focus_summaries_at = None;
    }

    /// Returns the backend greeting, empty until it arrives.
    #[must_use]
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Returns the repository of the last accepted fetch.
    #[must_use]
    pub const fn repo(&self) -> Option<&RepoRef> {
        self.repo.as_ref()
    }

    /// Returns whether a fetch was attempted.
    #[must_use]
    pub const fn has_fetched(&self) -> bool {
        self.has_fetched
    }

    /// Returns listed files and selection.
    #[must_use]
    pub const fn files(&self) -> &FileSelection {
        &self.files
    }

    /// Returns whether a listing is pending.
    #[must_use]
    pub const fn is_loading_files(&self) -> bool {
        self.files_loading
    }

    /// Returns summaries and generated code.
    #[must_use]
    pub const fn board(&self) -> &SummaryBoard {
        &self.board
    }

    /// Returns the expandable body of the summary at `index`.
    #[must_use]
    pub fn summary_text(&self, index: usize) -> Option<&ExpandableText> {
        self.texts.get(index)
    }

    /// Returns whether a summary request is pending or settling.
    #[must_use]
    pub const fn is_generating_summaries(&self) -> bool {
        self.summary_loading
    }

    /// Returns progress percentage.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }

    /// Returns whether test code for `index` is pending.
    #[must_use]
    pub fn is_generating_code(&self, index: usize) -> bool {
        self.code_in_flight.contains(&index)
    }

    /// Returns whether code at `index` was just copied.
    #[must_use]
    pub fn is_copied(&self, index: usize) -> bool {
        self.copied_until.contains_key(&index)
    }

    /// Returns whether dark mode is on.
    #[must_use]
    pub const fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Returns the alert to show.
    #[must_use]
    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.current()
    }

    /// Returns number of queued alerts, including the shown one.
    #[must_use]
    pub fn pending_alerts(&self) -> usize {
        self.alerts.len()
    }
}
