//! User-facing alerts.

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// Completed action, such as a created pull request.
    Success,
    /// Failed action.
    Error,
}

/// Modal message that stays until the user dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Severity.
    pub level: AlertLevel,
    /// Text shown in the popup.
    pub message: String,
}

impl Alert {
    /// Creates alert with the given level.
    #[must_use]
    pub fn new(level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Creates success alert.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Success, message)
    }

    /// Creates error alert.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Error, message)
    }

    /// Returns popup title for the level.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.level {
            AlertLevel::Success => "Done",
            AlertLevel::Error => "Error",
        }
    }
}
