//! Clipboard error types.

use thiserror::Error;

/// Clipboard error variants.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened.
    #[error("clipboard not available: {0}")]
    Unavailable(String),

    /// The clipboard rejected the text.
    #[error("failed to write clipboard: {0}")]
    WriteFailed(String),
}
