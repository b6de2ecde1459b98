use arboard::Clipboard;
use async_trait::async_trait;
use tracing::{error, warn};

use crate::domain::errors::ClipboardError;
use crate::domain::ports::ClipboardPort;

/// System clipboard backed by arboard.
#[derive(Clone, Default)]
pub struct ArboardClipboard {}

impl ArboardClipboard {
    /// Creates clipboard adapter.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

fn write_text(text: String) -> Result<(), ClipboardError> {
    let mut cb = Clipboard::new().map_err(|e| {
        warn!("Failed to initialize clipboard for copy: {}", e);
        ClipboardError::Unavailable(e.to_string())
    })?;

    cb.set_text(text).map_err(|e| {
        error!("Failed to set clipboard text: {}", e);
        ClipboardError::WriteFailed(e.to_string())
    })
}

#[async_trait]
impl ClipboardPort for ArboardClipboard {
    async fn set_text(&self, text: String) -> Result<(), ClipboardError> {
        tokio::task::spawn_blocking(move || write_text(text))
            .await
            .map_err(|e| ClipboardError::WriteFailed(format!("clipboard task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_clipboard_is_unavailable() {
        let clipboard = ArboardClipboard::new();

        // Writes succeed where a display server is reachable.
        if let Err(e) = clipboard.set_text("test".to_string()).await {
            assert!(matches!(e, ClipboardError::Unavailable(_)), "{e}");
        }
    }
}
