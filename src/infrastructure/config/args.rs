use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "casegen",
    version,
    about = "Generate test-case summaries, test code and pull requests for GitHub repositories",
    long_about = None
)]
/// Command line arguments.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Test generator backend base URL.
    #[arg(long, value_name = "URL", env = "CASEGEN_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Start in dark mode.
    #[arg(long)]
    pub dark: bool,

    /// Repository to prefill, as owner/repo.
    #[arg(short, long, value_name = "OWNER/REPO")]
    pub repo: Option<String>,
}
