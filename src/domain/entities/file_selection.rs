//! Repository file list with user selection.

/// Ordered file list and the subset chosen by the user.
///
/// Selection keeps the order in which files were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    files: Vec<String>,
    selected: Vec<String>,
}

impl FileSelection {
    /// Creates empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the file list and clears the selection.
    pub fn set_files(&mut self, files: Vec<String>) {
        self.files = files;
        self.selected.clear();
    }

    /// Removes all files.
    pub fn clear(&mut self) {
        self.files.clear();
        self.selected.clear();
    }

    /// Toggles membership of a listed file. Returns new membership.
    pub fn toggle(&mut self, path: &str) -> bool {
        if let Some(pos) = self.selected.iter().position(|p| p == path) {
            self.selected.remove(pos);
            false
        } else if self.files.iter().any(|p| p == path) {
            self.selected.push(path.to_string());
            true
        } else {
            false
        }
    }

    /// Returns whether a file is selected.
    #[must_use]
    pub fn is_selected(&self, path: &str) -> bool {
        self.selected.iter().any(|p| p == path)
    }

    /// Returns listed files.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Returns selected files in pick order.
    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Returns whether no files are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Returns number of listed files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }
}
