//! Test-case summary returned by the backend.

/// Summary tagged with the file it describes.
///
/// The backend formats each entry as `**<path>**: <text>`. The raw string is
/// kept because it is sent back verbatim when requesting test code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    raw: String,
    file_label: String,
    body: String,
}

impl Summary {
    /// Parses a raw summary by splitting on the first colon.
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let (label, body) = raw.split_once(':').unwrap_or((raw.as_str(), ""));

        let file_label = label.replace("**", "").trim().to_string();
        let body = body.trim().to_string();

        Self {
            raw,
            file_label,
            body,
        }
    }

    /// Returns the unparsed summary.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the file path label.
    #[must_use]
    pub fn file_label(&self) -> &str {
        &self.file_label
    }

    /// Returns the human-readable summary text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
