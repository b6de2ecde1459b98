//! Pull request creation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::BackendError;
use crate::domain::ports::{BackendPort, PullRequestRequest};

/// Opens a pull request containing generated test code.
#[derive(Clone)]
pub struct CreatePullRequestUseCase {
    backend: Arc<dyn BackendPort>,
}

impl CreatePullRequestUseCase {
    /// Creates use case over the backend port.
    #[must_use]
    pub const fn new(backend: Arc<dyn BackendPort>) -> Self {
        Self { backend }
    }

    /// Returns the URL of the new pull request.
    ///
    /// # Errors
    /// Returns `Application` with the backend's detail when it refuses,
    /// `Transport` when the request fails.
    pub async fn execute(&self, request: PullRequestRequest) -> Result<String, BackendError> {
        debug!(file = %request.file_name, "Creating pull request");

        match self.backend.create_pull_request(&request).await {
            Ok(url) => {
                info!(file = %request.file_name, url = %url, "Pull request created");
                Ok(url)
            }
            Err(e) => {
                warn!(file = %request.file_name, error = %e, "Failed to create pull request");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockBackend;

    #[tokio::test]
    async fn test_pull_request_url_is_returned() {
        let backend = Arc::new(
            MockBackend::new().with_pull_request(Ok("https://github.com/o/r/pull/7".to_string())),
        );
        let use_case = CreatePullRequestUseCase::new(backend);

        let url = use_case
            .execute(PullRequestRequest::new("code", "a.js"))
            .await
            .unwrap();

        assert_eq!(url, "https://github.com/o/r/pull/7");
    }

    #[tokio::test]
    async fn test_rejection_carries_detail() {
        let backend = Arc::new(
            MockBackend::new().with_pull_request(Err(BackendError::application(400, "bad file"))),
        );
        let use_case = CreatePullRequestUseCase::new(backend);

        let err = use_case
            .execute(PullRequestRequest::new("code", "a.js"))
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "bad file");
    }
}
