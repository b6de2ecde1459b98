//! Test-case summary generation.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::application::services::progress_ticker::{
    DEFAULT_TICK_PERIOD, PROGRESS_COMPLETE, ProgressTicker,
};
use crate::domain::entities::Summary;
use crate::domain::errors::BackendError;
use crate::domain::ports::{BackendPort, SummaryRequest};

/// Alert text for an empty selection.
pub const EMPTY_SELECTION_MESSAGE: &str = "Select at least one file.";

/// Requests summaries while animating a progress value.
///
/// The ticker and the request run as two tasks; once the request settles
/// the ticker is aborted and the progress is set to 100 whatever value the
/// ticker last published.
#[derive(Clone)]
pub struct GenerateSummariesUseCase {
    backend: Arc<dyn BackendPort>,
    tick_period: Duration,
}

impl GenerateSummariesUseCase {
    /// Creates use case over the backend port.
    #[must_use]
    pub const fn new(backend: Arc<dyn BackendPort>) -> Self {
        Self {
            backend,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }

    /// Sets the progress animation period.
    #[must_use]
    pub const fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    /// # Errors
    /// Returns `InvalidInput` for an empty selection without touching the
    /// progress channel, otherwise any backend failure.
    pub async fn execute(
        &self,
        request: SummaryRequest,
        progress: Arc<watch::Sender<u8>>,
    ) -> Result<Vec<Summary>, BackendError> {
        if request.selected_files.is_empty() {
            return Err(BackendError::invalid_input(EMPTY_SELECTION_MESSAGE));
        }

        debug!(
            repo_url = %request.repo_url,
            files = request.selected_files.len(),
            "Requesting test summaries"
        );

        progress.send_replace(0);
        let ticker = ProgressTicker::spawn(Arc::clone(&progress), self.tick_period);

        let result = self.backend.generate_summaries(&request).await;

        ticker.stop().await;
        progress.send_replace(PROGRESS_COMPLETE);

        match result {
            Ok(raw) => {
                info!(count = raw.len(), "Test summaries generated");
                Ok(raw.into_iter().map(Summary::parse).collect())
            }
            Err(e) => {
                warn!(error = %e, "Failed to generate test summaries");
                Err(e)
            }
        }
    }
}
