//! Domain entity definitions.

mod file_selection;
mod repository;
mod summary;
mod summary_board;

pub use file_selection::FileSelection;
pub use repository::{REPO_FORMAT_HINT, RepoRef};
pub use summary::Summary;
pub use summary_board::SummaryBoard;
