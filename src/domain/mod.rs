//! Domain layer with core entities and port definitions.

/// Alert definitions.
pub mod alert;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use alert::{Alert, AlertLevel};
pub use entities::{FileSelection, RepoRef, Summary, SummaryBoard};
pub use errors::{BackendError, ClipboardError};
pub use ports::{BackendPort, ClipboardPort};
