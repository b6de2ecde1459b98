//! Collapsible text block.

/// Default number of lines shown while collapsed.
pub const DEFAULT_MAX_LINES: usize = 6;

/// Text that shows only its first lines until expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandableText {
    content: String,
    max_lines: usize,
    expanded: bool,
}

impl ExpandableText {
    /// Creates collapsed text showing at most `max_lines` lines.
    #[must_use]
    pub fn new(content: impl Into<String>, max_lines: usize) -> Self {
        Self {
            content: content.into(),
            max_lines,
            expanded: false,
        }
    }

    /// Returns whether the text is longer than the collapsed view.
    #[must_use]
    pub fn is_truncatable(&self) -> bool {
        self.content.split('\n').count() > self.max_lines
    }

    /// Flips between collapsed and expanded. No-op for short text.
    pub fn toggle(&mut self) {
        if self.is_truncatable() {
            self.expanded = !self.expanded;
        }
    }

    /// Returns the lines currently displayed.
    #[must_use]
    pub fn visible_lines(&self) -> Vec<&str> {
        let lines = self.content.split('\n');
        if self.expanded {
            lines.collect()
        } else {
            lines.take(self.max_lines).collect()
        }
    }

    /// Returns the label of the toggle control, if one is offered.
    #[must_use]
    pub fn toggle_label(&self) -> Option<&'static str> {
        if !self.is_truncatable() {
            None
        } else if self.expanded {
            Some("Read less")
        } else {
            Some("Read more")
        }
    }
}
