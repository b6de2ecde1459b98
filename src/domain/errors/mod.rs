//! Domain error types.

mod backend_error;
mod clipboard_error;

pub use backend_error::BackendError;
pub use clipboard_error::ClipboardError;
