//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;
use crate::infrastructure::backend::DEFAULT_BACKEND_URL;

pub(crate) const APP_NAME: &str = "casegen";
pub(crate) const APP_QUALIFIER: &str = "dev";
pub(crate) const APP_ORGANIZATION: &str = "casegen";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Repository prefilled into the input.
    #[serde(skip)]
    pub initial_repo: Option<String>,

    /// Base URL of the test generator backend.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Log file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Request timeout in seconds. Unset waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start in dark mode.
    #[serde(default)]
    pub dark_mode: bool,

    /// Summary lines shown before "Read more".
    #[serde(default = "default_summary_max_lines")]
    pub summary_max_lines: usize,

    /// How long the copied mark stays visible, in milliseconds.
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,

    /// Progress bar tick period in milliseconds.
    #[serde(default = "default_progress_tick_ms")]
    pub progress_tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            summary_max_lines: default_summary_max_lines(),
            copy_feedback_ms: default_copy_feedback_ms(),
            progress_tick_ms: default_progress_tick_ms(),
        }
    }
}

impl UiConfig {
    /// Time a copied mark stays visible.
    #[must_use]
    pub const fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// Tick period, never shorter than one millisecond.
    #[must_use]
    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms.max(1))
    }
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

const fn default_summary_max_lines() -> usize {
    6
}

const fn default_copy_feedback_ms() -> u64 {
    1500
}

const fn default_progress_tick_ms() -> u64 {
    200
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(backend_url) = args.backend_url {
            self.backend_url = backend_url;
        }
        if args.dark {
            self.ui.dark_mode = true;
        }
        if let Some(repo) = args.repo {
            self.initial_repo = Some(repo);
        }
    }

    /// Request timeout, if configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("casegen.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_repo: None,
            backend_url: default_backend_url(),
            log_path: None,
            log_level: LogLevel::Info,
            request_timeout_secs: None,
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            backend_url = "http://localhost:8000"
            request_timeout_secs = 30

            [ui]
            dark_mode = true
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert!(config.ui.dark_mode);
        assert_eq!(config.ui.summary_max_lines, 6);
        assert_eq!(config.ui.copy_feedback(), Duration::from_millis(1500));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.request_timeout(), None);
        assert!(!config.ui.dark_mode);
        assert_eq!(config.ui.progress_tick(), Duration::from_millis(200));
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let content = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let config: AppConfig = toml::from_str(&content).unwrap();

        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_args_override_file_values() {
        let mut config: AppConfig = toml::from_str("backend_url = \"http://file\"").unwrap();
        let args = CliArgs::parse_from([
            "casegen",
            "--backend-url",
            "http://cli",
            "--dark",
            "--repo",
            "facebook/react",
            "--log-level",
            "debug",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.backend_url, "http://cli");
        assert!(config.ui.dark_mode);
        assert_eq!(config.initial_repo.as_deref(), Some("facebook/react"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_absent_args_keep_file_values() {
        let mut config: AppConfig = toml::from_str("[ui]\ndark_mode = true").unwrap();

        config.merge_with_args(CliArgs::parse_from(["casegen"]));

        assert!(config.ui.dark_mode);
        assert!(config.initial_repo.is_none());
    }
}
