//! Backend interaction error types.

use thiserror::Error;

/// Failure of a backend operation.
///
/// The three variants mirror how a failure reaches the user: input rejected
/// before any request is made, the request itself failing, or the backend
/// answering with an error of its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum BackendError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("request failed: {message}")]
    Transport { message: String },

    #[error("backend returned {status}: {detail}")]
    Application { status: u16, detail: String },
}

impl BackendError {
    /// Creates validation error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates application error.
    #[must_use]
    pub fn application(status: u16, detail: impl Into<String>) -> Self {
        Self::Application {
            status,
            detail: detail.into(),
        }
    }

    /// Returns whether the request was never sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns the text to show the user.
    ///
    /// For application errors this is the backend's `detail` verbatim.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidInput { reason } => reason,
            Self::Transport { message } => message,
            Self::Application { detail, .. } => detail,
        }
    }
}
