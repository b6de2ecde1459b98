mod backend_port;
mod clipboard_port;

pub use backend_port::{BackendPort, PullRequestRequest, SummaryRequest, TestCodeRequest};
pub use clipboard_port::ClipboardPort;

#[cfg(test)]
pub mod mocks {
    pub use super::backend_port::mock::MockBackend;
    pub use super::clipboard_port::mock::MockClipboard;
}
