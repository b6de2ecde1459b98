//! Repository file listing.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::RepoRef;
use crate::domain::errors::BackendError;
use crate::domain::ports::BackendPort;

/// Lists the code files of a repository.
#[derive(Clone)]
pub struct ListFilesUseCase {
    backend: Arc<dyn BackendPort>,
}

impl ListFilesUseCase {
    /// Creates use case over the backend port.
    #[must_use]
    pub const fn new(backend: Arc<dyn BackendPort>) -> Self {
        Self { backend }
    }

    /// # Errors
    /// Returns error if the request fails or the backend reports an error.
    pub async fn execute(&self, repo: &RepoRef) -> Result<Vec<String>, BackendError> {
        debug!(repo = %repo, "Listing repository files");

        let files = self.backend.list_files(repo).await.inspect_err(|e| {
            warn!(repo = %repo, error = %e, "Failed to list repository files");
        })?;

        info!(repo = %repo, count = files.len(), "Repository files listed");
        Ok(files)
    }
}
