//! Clipboard copy of generated code.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::errors::ClipboardError;
use crate::domain::ports::ClipboardPort;

/// Copies generated code to the clipboard.
#[derive(Clone)]
pub struct CopyCodeUseCase {
    clipboard: Arc<dyn ClipboardPort>,
}

impl CopyCodeUseCase {
    /// Creates use case over the clipboard port.
    #[must_use]
    pub const fn new(clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self { clipboard }
    }

    /// # Errors
    /// Returns error if the clipboard cannot be written.
    pub async fn execute(&self, code: String) -> Result<(), ClipboardError> {
        debug!(bytes = code.len(), "Copying code to clipboard");
        self.clipboard.set_text(code).await.inspect_err(|e| {
            warn!(error = %e, "Failed to copy code to clipboard");
        })
    }
}
