//! Backend status greeting.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::errors::BackendError;
use crate::domain::ports::BackendPort;

/// Fetches the backend's status message shown in the header.
#[derive(Clone)]
pub struct FetchGreetingUseCase {
    backend: Arc<dyn BackendPort>,
}

impl FetchGreetingUseCase {
    /// Creates use case over the backend port.
    #[must_use]
    pub const fn new(backend: Arc<dyn BackendPort>) -> Self {
        Self { backend }
    }

    /// # Errors
    /// Returns error if the backend cannot be reached.
    pub async fn execute(&self) -> Result<String, BackendError> {
        debug!("Fetching backend greeting");
        self.backend.greeting().await.inspect_err(|e| {
            warn!(error = %e, "Failed to fetch backend greeting");
        })
    }
}
