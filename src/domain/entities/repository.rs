//! GitHub repository reference value object.

use std::fmt;

use crate::domain::errors::BackendError;

const GITHUB_BASE: &str = "https://github.com";

/// Usage hint shown when the repository input cannot be parsed.
pub const REPO_FORMAT_HINT: &str = "Enter repo as owner/repo (e.g., facebook/react)";

/// Repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    owner: String,
    repo: String,
}

impl RepoRef {
    /// Parses an `owner/repo` string.
    ///
    /// Only the first two `/`-separated segments are considered.
    ///
    /// # Errors
    /// Returns `InvalidInput` when the owner or the repo segment is empty.
    pub fn parse(input: &str) -> Result<Self, BackendError> {
        let mut parts = input.trim().split('/');
        let owner = parts.next().unwrap_or_default();
        let repo = parts.next().unwrap_or_default();

        if owner.is_empty() || repo.is_empty() {
            return Err(BackendError::invalid_input(REPO_FORMAT_HINT));
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Returns the owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Returns the repository's web URL.
    #[must_use]
    pub fn github_url(&self) -> String {
        format!("{GITHUB_BASE}/{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
