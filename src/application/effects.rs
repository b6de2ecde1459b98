//! Backend effects requested by session transitions and their outcomes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::application::use_cases::{
    CopyCodeUseCase, CreatePullRequestUseCase, FetchGreetingUseCase, GenerateSummariesUseCase,
    GenerateTestCodeUseCase, ListFilesUseCase,
};
use crate::domain::entities::{RepoRef, Summary};
use crate::domain::errors::{BackendError, ClipboardError};
use crate::domain::ports::{
    BackendPort, ClipboardPort, PullRequestRequest, SummaryRequest, TestCodeRequest,
};

/// Side effect to perform outside the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetches the backend greeting.
    FetchGreeting,
    /// Lists code files of a repository.
    ListFiles(RepoRef),
    /// Requests summaries for the selected files.
    GenerateSummaries(SummaryRequest),
    /// Requests test code for one summary card.
    GenerateTestCode {
        /// Summary round the card belongs to.
        round: u64,
        /// Card index.
        index: usize,
        /// Request sent to the backend.
        request: TestCodeRequest,
    },
    /// Opens a pull request with generated code.
    CreatePullRequest(PullRequestRequest),
    /// Copies generated code to the clipboard.
    CopyCode {
        /// Card index.
        index: usize,
        /// Code to copy.
        code: String,
    },
}

/// Settled effect, fed back into the session.
#[derive(Debug)]
pub enum Outcome {
    /// Greeting text, or why it could not be fetched.
    GreetingLoaded(Result<String, BackendError>),
    /// File listing result.
    FilesLoaded(Result<Vec<String>, BackendError>),
    /// Parsed summaries result.
    SummariesLoaded(Result<Vec<Summary>, BackendError>),
    /// Test code or placeholder text for one card.
    TestCodeGenerated {
        /// Summary round the request was issued in.
        round: u64,
        /// Card index.
        index: usize,
        /// Code or placeholder text.
        code: String,
    },
    /// URL of the created pull request.
    PullRequestCreated(Result<String, BackendError>),
    /// Clipboard write result for one card.
    CodeCopied {
        /// Card index.
        index: usize,
        /// Clipboard write result.
        result: Result<(), ClipboardError>,
    },
}

/// Executes effects through the use cases.
#[derive(Clone)]
pub struct EffectRunner {
    fetch_greeting: FetchGreetingUseCase,
    list_files: ListFilesUseCase,
    generate_summaries: GenerateSummariesUseCase,
    generate_test_code: GenerateTestCodeUseCase,
    create_pull_request: CreatePullRequestUseCase,
    copy_code: CopyCodeUseCase,
    progress: Arc<watch::Sender<u8>>,
}

impl EffectRunner {
    /// Creates runner over the given ports.
    #[must_use]
    pub fn new(backend: Arc<dyn BackendPort>, clipboard: Arc<dyn ClipboardPort>) -> Self {
        let (progress, _) = watch::channel(0);

        Self {
            fetch_greeting: FetchGreetingUseCase::new(Arc::clone(&backend)),
            list_files: ListFilesUseCase::new(Arc::clone(&backend)),
            generate_summaries: GenerateSummariesUseCase::new(Arc::clone(&backend)),
            generate_test_code: GenerateTestCodeUseCase::new(Arc::clone(&backend)),
            create_pull_request: CreatePullRequestUseCase::new(backend),
            copy_code: CopyCodeUseCase::new(clipboard),
            progress: Arc::new(progress),
        }
    }

    /// Sets the progress animation period.
    #[must_use]
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.generate_summaries = self.generate_summaries.with_tick_period(period);
        self
    }

    /// Returns a receiver of cosmetic progress values.
    #[must_use]
    pub fn subscribe_progress(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    /// Performs an effect and returns its outcome. Never panics on failure.
    pub async fn run(&self, effect: Effect) -> Outcome {
        match effect {
            Effect::FetchGreeting => Outcome::GreetingLoaded(self.fetch_greeting.execute().await),
            Effect::ListFiles(repo) => Outcome::FilesLoaded(self.list_files.execute(&repo).await),
            Effect::GenerateSummaries(request) => Outcome::SummariesLoaded(
                self.generate_summaries
                    .execute(request, Arc::clone(&self.progress))
                    .await,
            ),
            Effect::GenerateTestCode {
                round,
                index,
                request,
            } => Outcome::TestCodeGenerated {
                round,
                index,
                code: self.generate_test_code.execute(request).await,
            },
            Effect::CreatePullRequest(request) => {
                Outcome::PullRequestCreated(self.create_pull_request.execute(request).await)
            }
            Effect::CopyCode { index, code } => Outcome::CodeCopied {
                index,
                result: self.copy_code.execute(code).await,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockBackend, MockClipboard};

    #[tokio::test]
    async fn test_summary_effect_publishes_completion() {
        let backend = Arc::new(
            MockBackend::new().with_summaries(Ok(vec!["**a.js**: Test basic render".to_string()])),
        );
        let runner = EffectRunner::new(backend, Arc::new(MockClipboard::new()));
        let progress = runner.subscribe_progress();
        let repo = RepoRef::parse("octocat/Hello-World").unwrap();

        let outcome = runner
            .run(Effect::GenerateSummaries(SummaryRequest::new(
                &repo,
                vec!["a.js".to_string()],
            )))
            .await;

        assert!(matches!(outcome, Outcome::SummariesLoaded(Ok(ref s)) if s.len() == 1));
        assert_eq!(*progress.borrow(), 100);
    }

    #[tokio::test]
    async fn test_test_code_effect_keeps_slot() {
        let backend = Arc::new(MockBackend::new().with_test_code(Ok(Some("code".to_string()))));
        let runner = EffectRunner::new(backend, Arc::new(MockClipboard::new()));
        let repo = RepoRef::parse("octocat/Hello-World").unwrap();

        let outcome = runner
            .run(Effect::GenerateTestCode {
                round: 3,
                index: 2,
                request: TestCodeRequest::new(&repo, "a.js", "**a.js**: x"),
            })
            .await;

        match outcome {
            Outcome::TestCodeGenerated { round, index, code } => {
                assert_eq!((round, index), (3, 2));
                assert_eq!(code, "code");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
