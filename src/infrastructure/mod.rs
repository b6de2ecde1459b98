//! Infrastructure layer with external service adapters.

/// Test generator backend client.
pub mod backend;
/// System clipboard adapter.
pub mod clipboard;
/// Application configuration.
pub mod config;

pub use backend::{DEFAULT_BACKEND_URL, HttpBackendClient};
pub use clipboard::ArboardClipboard;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
