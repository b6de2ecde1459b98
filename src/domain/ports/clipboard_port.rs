//! Clipboard port definition.

use async_trait::async_trait;

use crate::domain::errors::ClipboardError;

/// Port for writing text to the system clipboard.
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    /// Replaces clipboard contents with text.
    async fn set_text(&self, text: String) -> Result<(), ClipboardError>;
}
