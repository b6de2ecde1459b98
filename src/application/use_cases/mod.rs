//! Use case implementations.

mod copy_code_use_case;
mod create_pull_request_use_case;
mod fetch_greeting_use_case;
mod generate_summaries_use_case;
mod generate_test_code_use_case;
mod list_files_use_case;

pub use copy_code_use_case::CopyCodeUseCase;
pub use create_pull_request_use_case::CreatePullRequestUseCase;
pub use fetch_greeting_use_case::FetchGreetingUseCase;
pub use generate_summaries_use_case::{EMPTY_SELECTION_MESSAGE, GenerateSummariesUseCase};
pub use generate_test_code_use_case::{
    CODE_GENERATION_FAILED, GenerateTestCodeUseCase, NO_CODE_GENERATED,
};
pub use list_files_use_case::ListFilesUseCase;
