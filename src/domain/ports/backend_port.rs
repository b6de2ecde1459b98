//! Test generator backend port.

use async_trait::async_trait;

use crate::domain::entities::RepoRef;
use crate::domain::errors::BackendError;

/// Request for test-case summaries of selected files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    /// `https://github.com/<owner>/<repo>`.
    pub repo_url: String,
    /// Selected file paths in selection order.
    pub selected_files: Vec<String>,
}

impl SummaryRequest {
    /// Creates request for `repo`.
    #[must_use]
    pub fn new(repo: &RepoRef, selected_files: Vec<String>) -> Self {
        Self {
            repo_url: repo.github_url(),
            selected_files,
        }
    }
}

/// Request for test code implementing one summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCodeRequest {
    /// `https://github.com/<owner>/<repo>`.
    pub repo_url: String,
    /// File label of the summary.
    pub file_path: String,
    /// Raw summary text.
    pub summary: String,
}

impl TestCodeRequest {
    /// Creates request for `repo`.
    #[must_use]
    pub fn new(repo: &RepoRef, file_path: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            repo_url: repo.github_url(),
            file_path: file_path.into(),
            summary: summary.into(),
        }
    }
}

/// Request to open a pull request with generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRequest {
    /// Generated test code.
    pub code_content: String,
    /// File label the code belongs to.
    pub file_name: String,
}

impl PullRequestRequest {
    /// Creates request.
    #[must_use]
    pub fn new(code_content: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            code_content: code_content.into(),
            file_name: file_name.into(),
        }
    }
}

/// Port for the remote test generator service.
#[async_trait]
pub trait BackendPort: Send + Sync {
    /// Fetches the service status message.
    async fn greeting(&self) -> Result<String, BackendError>;

    /// Lists code files of a repository.
    async fn list_files(&self, repo: &RepoRef) -> Result<Vec<String>, BackendError>;

    /// Generates one raw summary per selected file.
    async fn generate_summaries(&self, request: &SummaryRequest)
    -> Result<Vec<String>, BackendError>;

    /// Generates test code. `None` when the backend returned no code.
    async fn generate_test_code(
        &self,
        request: &TestCodeRequest,
    ) -> Result<Option<String>, BackendError>;

    /// Opens a pull request and returns its URL.
    async fn create_pull_request(&self, request: &PullRequestRequest)
    -> Result<String, BackendError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted backend for testing.
    pub struct MockBackend {
        greeting: Result<String, BackendError>,
        files: Result<Vec<String>, BackendError>,
        summaries: Result<Vec<String>, BackendError>,
        test_code: Result<Option<String>, BackendError>,
        pull_request: Result<String, BackendError>,
        calls: AtomicUsize,
        last_summary_request: Mutex<Option<SummaryRequest>>,
        last_test_code_request: Mutex<Option<TestCodeRequest>>,
    }

    impl MockBackend {
        /// Creates a backend answering every call successfully with empty data.
        pub fn new() -> Self {
            Self {
                greeting: Ok("Backend is running!".to_string()),
                files: Ok(Vec::new()),
                summaries: Ok(Vec::new()),
                test_code: Ok(None),
                pull_request: Ok("https://github.com/o/r/pull/1".to_string()),
                calls: AtomicUsize::new(0),
                last_summary_request: Mutex::new(None),
                last_test_code_request: Mutex::new(None),
            }
        }

        pub fn with_greeting(mut self, result: Result<String, BackendError>) -> Self {
            self.greeting = result;
            self
        }

        pub fn with_files(mut self, result: Result<Vec<String>, BackendError>) -> Self {
            self.files = result;
            self
        }

        pub fn with_summaries(mut self, result: Result<Vec<String>, BackendError>) -> Self {
            self.summaries = result;
            self
        }

        pub fn with_test_code(mut self, result: Result<Option<String>, BackendError>) -> Self {
            self.test_code = result;
            self
        }

        pub fn with_pull_request(mut self, result: Result<String, BackendError>) -> Self {
            self.pull_request = result;
            self
        }

        /// Returns number of requests made.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_summary_request(&self) -> Option<SummaryRequest> {
            self.last_summary_request.lock().unwrap().clone()
        }

        pub fn last_test_code_request(&self) -> Option<TestCodeRequest> {
            self.last_test_code_request.lock().unwrap().clone()
        }

        fn record(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Default for MockBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl BackendPort for MockBackend {
        async fn greeting(&self) -> Result<String, BackendError> {
            self.record();
            self.greeting.clone()
        }

        async fn list_files(&self, _repo: &RepoRef) -> Result<Vec<String>, BackendError> {
            self.record();
            self.files.clone()
        }

        async fn generate_summaries(
            &self,
            request: &SummaryRequest,
        ) -> Result<Vec<String>, BackendError> {
            self.record();
            *self.last_summary_request.lock().unwrap() = Some(request.clone());
            self.summaries.clone()
        }

        async fn generate_test_code(
            &self,
            request: &TestCodeRequest,
        ) -> Result<Option<String>, BackendError> {
            self.record();
            *self.last_test_code_request.lock().unwrap() = Some(request.clone());
            self.test_code.clone()
        }

        async fn create_pull_request(
            &self,
            _request: &PullRequestRequest,
        ) -> Result<String, BackendError> {
            self.record();
            self.pull_request.clone()
        }
    }
}
