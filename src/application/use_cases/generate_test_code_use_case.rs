//! Test code generation for one summary.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::{BackendPort, TestCodeRequest};

/// Shown when the backend answered without code.
pub const NO_CODE_GENERATED: &str = "No code generated.";
/// Shown when the request failed.
pub const CODE_GENERATION_FAILED: &str = "Failed to generate test code.";

/// Generates test code. Never fails: failures become placeholder text.
#[derive(Clone)]
pub struct GenerateTestCodeUseCase {
    backend: Arc<dyn BackendPort>,
}

impl GenerateTestCodeUseCase {
    /// Creates use case over the backend port.
    #[must_use]
    pub const fn new(backend: Arc<dyn BackendPort>) -> Self {
        Self { backend }
    }

    /// Returns generated code or placeholder text.
    pub async fn execute(&self, request: TestCodeRequest) -> String {
        debug!(file = %request.file_path, "Requesting test code");

        match self.backend.generate_test_code(&request).await {
            Ok(Some(code)) if !code.is_empty() => code,
            Ok(_) => NO_CODE_GENERATED.to_string(),
            Err(e) => {
                warn!(file = %request.file_path, error = %e, "Failed to generate test code");
                CODE_GENERATION_FAILED.to_string()
            }
        }
    }
}
